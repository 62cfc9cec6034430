use serde::{Serialize, Serializer};

/// Typed application record with every required field present and validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplicationRecord {
    pub annual_income: f64,
    pub credit_score: i64,
    pub monthly_debt: f64,
    pub employment_months: u64,
    pub is_first_time_buyer: bool,
    pub is_self_employed: bool,
    pub requested_amount: f64,
}

/// Keys every application document must expose.
///
/// Declaration order is the detection order: when several keys are missing, the earliest
/// one listed here is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequiredField {
    AnnualIncome,
    CreditScore,
    MonthlyDebt,
    EmploymentMonths,
    IsFirstTimeBuyer,
    IsSelfEmployed,
    RequestedAmount,
}

impl RequiredField {
    pub const ALL: [RequiredField; 7] = [
        RequiredField::AnnualIncome,
        RequiredField::CreditScore,
        RequiredField::MonthlyDebt,
        RequiredField::EmploymentMonths,
        RequiredField::IsFirstTimeBuyer,
        RequiredField::IsSelfEmployed,
        RequiredField::RequestedAmount,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            RequiredField::AnnualIncome => "annualIncome",
            RequiredField::CreditScore => "creditScore",
            RequiredField::MonthlyDebt => "monthlyDebt",
            RequiredField::EmploymentMonths => "employmentMonths",
            RequiredField::IsFirstTimeBuyer => "isFirstTimeBuyer",
            RequiredField::IsSelfEmployed => "isSelfEmployed",
            RequiredField::RequestedAmount => "requestedAmount",
        }
    }
}

/// Final outcome of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Denied,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Approved => "approved",
            Decision::Denied => "denied",
        }
    }
}

/// Risk tier assigned from the credit score. Applications rejected before tiering are `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    #[default]
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Evaluation output: the decision, its audit trail, and the risk tier.
///
/// Serializes as `{"decision", "reasoning", "riskLevel"}` in that order, with the trail
/// rendered as a single newline-joined string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionRecord {
    pub decision: Decision,
    #[serde(serialize_with = "serialize_reasoning")]
    pub reasoning: Vec<String>,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
}

impl DecisionRecord {
    pub fn approved(reasoning: Vec<String>, risk_level: RiskLevel) -> Self {
        Self {
            decision: Decision::Approved,
            reasoning,
            risk_level,
        }
    }

    pub fn denied(reasoning: Vec<String>, risk_level: RiskLevel) -> Self {
        Self {
            decision: Decision::Denied,
            reasoning,
            risk_level,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.decision == Decision::Approved
    }

    pub fn reasoning_text(&self) -> String {
        self.reasoning.join("\n")
    }

    /// The line that caused a denial, if any.
    pub fn denial_reason(&self) -> Option<&str> {
        self.reasoning
            .iter()
            .find(|line| line.starts_with("DENIED:"))
            .map(String::as_str)
    }
}

fn serialize_reasoning<S>(reasoning: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&reasoning.join("\n"))
}
