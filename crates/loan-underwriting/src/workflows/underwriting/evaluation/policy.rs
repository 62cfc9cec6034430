use super::super::domain::RiskLevel;

pub const MINIMUM_ANNUAL_INCOME: f64 = 35_000.0;
pub const MINIMUM_CREDIT_SCORE: i64 = 600;
pub const LOW_RISK_MINIMUM_SCORE: i64 = 720;
pub const MEDIUM_RISK_MINIMUM_SCORE: i64 = 650;
pub const MEDIUM_RISK_MAXIMUM_SCORE: i64 = 719;
/// High-risk applicants below this income are denied outright.
pub const HIGH_RISK_INCOME_OVERRIDE: f64 = 150_000.0;
pub const SELF_EMPLOYED_REQUIREMENT_MONTHS: u64 = 24;
/// Additive, applied once.
pub const FIRST_TIME_BUYER_DTI_BONUS: f64 = 0.05;

/// Limits in force for an application as it moves through the pipeline.
///
/// Starts from the tier table and is only ever tightened (self-employment) or relaxed
/// (first-time buyer) by the dedicated adjustments below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnderwritingTerms {
    pub risk_level: RiskLevel,
    pub dti_limit: f64,
    pub employment_requirement_months: u64,
    pub max_loan: f64,
}

impl UnderwritingTerms {
    pub const fn for_tier(risk_level: RiskLevel) -> Self {
        match risk_level {
            RiskLevel::Low => Self {
                risk_level,
                dti_limit: 0.40,
                employment_requirement_months: 12,
                max_loan: 500_000.0,
            },
            RiskLevel::Medium => Self {
                risk_level,
                dti_limit: 0.30,
                employment_requirement_months: 18,
                max_loan: 350_000.0,
            },
            RiskLevel::High => Self {
                risk_level,
                dti_limit: 0.25,
                employment_requirement_months: 24,
                max_loan: 200_000.0,
            },
        }
    }

    pub const fn for_credit_score(credit_score: i64) -> Self {
        Self::for_tier(tier_for_credit_score(credit_score))
    }

    pub fn require_self_employment_history(&mut self) {
        self.employment_requirement_months = SELF_EMPLOYED_REQUIREMENT_MONTHS;
    }

    pub fn apply_first_time_buyer_bonus(&mut self) {
        self.dti_limit += FIRST_TIME_BUYER_DTI_BONUS;
    }
}

pub const fn tier_for_credit_score(credit_score: i64) -> RiskLevel {
    if credit_score >= LOW_RISK_MINIMUM_SCORE {
        RiskLevel::Low
    } else if credit_score >= MEDIUM_RISK_MINIMUM_SCORE && credit_score <= MEDIUM_RISK_MAXIMUM_SCORE
    {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

pub const fn tier_label(risk_level: RiskLevel) -> &'static str {
    match risk_level {
        RiskLevel::Low => "Tier 1 (Low Risk)",
        RiskLevel::Medium => "Tier 2 (Medium Risk)",
        RiskLevel::High => "Tier 3 (High Risk)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_follow_credit_score_cutoffs() {
        assert_eq!(tier_for_credit_score(850), RiskLevel::Low);
        assert_eq!(tier_for_credit_score(720), RiskLevel::Low);
        assert_eq!(tier_for_credit_score(719), RiskLevel::Medium);
        assert_eq!(tier_for_credit_score(650), RiskLevel::Medium);
        assert_eq!(tier_for_credit_score(649), RiskLevel::High);
        assert_eq!(tier_for_credit_score(600), RiskLevel::High);
    }

    #[test]
    fn tier_table_matches_published_limits() {
        let low = UnderwritingTerms::for_tier(RiskLevel::Low);
        assert_eq!(
            (low.dti_limit, low.employment_requirement_months, low.max_loan),
            (0.40, 12, 500_000.0)
        );
        let medium = UnderwritingTerms::for_tier(RiskLevel::Medium);
        assert_eq!(
            (
                medium.dti_limit,
                medium.employment_requirement_months,
                medium.max_loan
            ),
            (0.30, 18, 350_000.0)
        );
        let high = UnderwritingTerms::for_tier(RiskLevel::High);
        assert_eq!(
            (high.dti_limit, high.employment_requirement_months, high.max_loan),
            (0.25, 24, 200_000.0)
        );
    }

    #[test]
    fn self_employment_never_lowers_the_requirement() {
        for tier in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            let base = UnderwritingTerms::for_tier(tier);
            let mut adjusted = base;
            adjusted.require_self_employment_history();
            assert!(adjusted.employment_requirement_months >= base.employment_requirement_months);
            assert_eq!(adjusted.employment_requirement_months, 24);
        }
    }

    #[test]
    fn first_time_buyer_bonus_is_additive_and_exact() {
        for tier in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            let base = UnderwritingTerms::for_tier(tier);
            let mut adjusted = base;
            adjusted.apply_first_time_buyer_bonus();
            assert_eq!(adjusted.dti_limit, base.dti_limit + 0.05);
            assert!(adjusted.dti_limit > base.dti_limit);
            assert_eq!(adjusted.max_loan, base.max_loan);
        }
    }
}
