use tracing::debug;

use super::super::domain::{ApplicationRecord, DecisionRecord, RiskLevel};
use super::format::{currency, percent};
use super::policy::{
    tier_label, UnderwritingTerms, HIGH_RISK_INCOME_OVERRIDE, MINIMUM_ANNUAL_INCOME,
    MINIMUM_CREDIT_SCORE,
};

const APPROVAL_SUMMARY: &str = "APPROVED: Applicant meets all criteria.";

/// Ordered audit trail. Every stage appends before it can terminate evaluation.
#[derive(Debug, Default)]
pub(crate) struct ReasoningTrail {
    lines: Vec<String>,
}

impl ReasoningTrail {
    fn info(&mut self, message: String) {
        debug!(%message, "underwriting stage noted");
        self.lines.push(format!("INFO: {message}"));
    }

    fn pass(&mut self, message: String) {
        debug!(%message, "underwriting stage passed");
        self.lines.push(format!("PASS: {message}"));
    }

    fn deny(mut self, message: String, risk_level: RiskLevel) -> DecisionRecord {
        debug!(%message, risk_level = risk_level.label(), "underwriting stage denied");
        self.lines.push(format!("DENIED: {message}"));
        DecisionRecord::denied(self.lines, risk_level)
    }

    fn approve(mut self, risk_level: RiskLevel) -> DecisionRecord {
        self.lines.insert(0, APPROVAL_SUMMARY.to_string());
        DecisionRecord::approved(self.lines, risk_level)
    }
}

/// Runs the guard-clause pipeline; the first failing stage ends evaluation.
pub(crate) fn underwrite(application: &ApplicationRecord) -> DecisionRecord {
    let mut trail = ReasoningTrail::default();

    if application.annual_income < MINIMUM_ANNUAL_INCOME {
        return trail.deny(
            format!(
                "Annual income {} is below the {} minimum.",
                currency(application.annual_income),
                currency(MINIMUM_ANNUAL_INCOME)
            ),
            RiskLevel::High,
        );
    }

    if application.credit_score < MINIMUM_CREDIT_SCORE {
        return trail.deny(
            format!(
                "Credit score {} is below the {MINIMUM_CREDIT_SCORE} minimum requirement.",
                application.credit_score
            ),
            RiskLevel::High,
        );
    }

    // Unreachable behind the income floor; guards the DTI division below.
    if application.annual_income == 0.0 {
        return trail.deny(
            "Annual income is $0, cannot calculate DTI.".to_string(),
            RiskLevel::High,
        );
    }

    let dti = (application.monthly_debt * 12.0) / application.annual_income;
    trail.info(format!("Debt-to-Income (DTI) calculated at {}.", percent(dti)));

    let mut terms = UnderwritingTerms::for_credit_score(application.credit_score);
    trail.info(format!(
        "Credit score {} qualifies for {}.",
        application.credit_score,
        tier_label(terms.risk_level)
    ));

    if terms.risk_level == RiskLevel::High {
        if application.annual_income < HIGH_RISK_INCOME_OVERRIDE {
            return trail.deny(
                "High-risk applicants with income below $150,000 are automatically denied."
                    .to_string(),
                terms.risk_level,
            );
        }
        trail.info(format!(
            "High-risk applicant income {} exceeds $150,000; proceeding with review.",
            currency(application.annual_income)
        ));
    }

    if application.is_self_employed {
        trail.info("Applicant is self-employed, requires 24 months history.".to_string());
        terms.require_self_employment_history();
    }

    if application.employment_months < terms.employment_requirement_months {
        return trail.deny(
            format!(
                "Employment history of {} months is insufficient. Required: {} months.",
                application.employment_months, terms.employment_requirement_months
            ),
            terms.risk_level,
        );
    }
    trail.pass(format!(
        "Employment history of {} months meets the {}-month requirement.",
        application.employment_months, terms.employment_requirement_months
    ));

    if application.requested_amount > terms.max_loan {
        return trail.deny(
            format!(
                "Requested amount {} exceeds the maximum of {} for this risk tier.",
                currency(application.requested_amount),
                currency(terms.max_loan)
            ),
            terms.risk_level,
        );
    }
    trail.pass(format!(
        "Requested amount {} is within the {} maximum.",
        currency(application.requested_amount),
        currency(terms.max_loan)
    ));

    if application.is_first_time_buyer {
        let base_limit = terms.dti_limit;
        terms.apply_first_time_buyer_bonus();
        trail.info(format!(
            "First-time homebuyer status applied. DTI limit increased from {} to {}.",
            percent(base_limit),
            percent(terms.dti_limit)
        ));
    }

    // Both positions render the applicant's DTI; the limit itself only appears in the
    // first-time buyer line above.
    let dti_text = percent(dti);
    if dti > terms.dti_limit {
        return trail.deny(
            format!("DTI of {dti_text} exceeds the {dti_text} limit."),
            terms.risk_level,
        );
    }
    trail.pass(format!("DTI of {dti_text} is within the {dti_text} limit."));

    trail.approve(terms.risk_level)
}
