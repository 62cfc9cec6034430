use super::common::*;

use crate::workflows::underwriting::evaluation::policy::tier_for_credit_score;
use crate::workflows::underwriting::{ApplicationRecord, RiskLevel};

const CREDIT_SCORES: [i64; 8] = [600, 640, 649, 650, 700, 719, 720, 810];
const INCOMES: [f64; 4] = [35_000.0, 90_000.0, 150_000.0, 240_000.0];
const MONTHLY_DEBTS: [f64; 4] = [0.0, 900.0, 2_500.0, 4_000.0];
const EMPLOYMENT_MONTHS: [u64; 5] = [6, 12, 18, 24, 36];
const REQUESTED_AMOUNTS: [f64; 4] = [100_000.0, 250_000.0, 400_000.0, 600_000.0];

fn grid() -> Vec<ApplicationRecord> {
    let mut records = Vec::new();
    for &credit_score in &CREDIT_SCORES {
        for &annual_income in &INCOMES {
            for &monthly_debt in &MONTHLY_DEBTS {
                for &employment_months in &EMPLOYMENT_MONTHS {
                    for &requested_amount in &REQUESTED_AMOUNTS {
                        records.push(ApplicationRecord {
                            annual_income,
                            credit_score,
                            monthly_debt,
                            employment_months,
                            is_first_time_buyer: false,
                            is_self_employed: false,
                            requested_amount,
                        });
                    }
                }
            }
        }
    }
    records
}

#[test]
fn income_below_floor_is_always_denied_high() {
    let evaluator = evaluator();
    for mut record in grid() {
        for income in [0.0, 12_500.0, 34_999.99] {
            record.annual_income = income;
            record.is_first_time_buyer = record.employment_months % 12 == 0;
            record.is_self_employed = record.credit_score > 700;

            let decision = evaluator.evaluate_record(&record);

            assert!(!decision.is_approved(), "{record:?}");
            assert_eq!(decision.risk_level, RiskLevel::High, "{record:?}");
            assert_eq!(decision.reasoning.len(), 1);
        }
    }
}

#[test]
fn risk_level_depends_only_on_credit_score_once_floors_pass() {
    let evaluator = evaluator();
    for record in grid() {
        let decision = evaluator.evaluate_record(&record);
        assert_eq!(
            decision.risk_level,
            tier_for_credit_score(record.credit_score),
            "{record:?}"
        );
    }
}

#[test]
fn self_employment_never_turns_a_denial_into_an_approval() {
    let evaluator = evaluator();
    for record in grid() {
        let salaried = evaluator.evaluate_record(&record);
        let self_employed = evaluator.evaluate_record(&ApplicationRecord {
            is_self_employed: true,
            ..record
        });

        if self_employed.is_approved() {
            assert!(salaried.is_approved(), "{record:?}");
        }
        if record.employment_months < 24 {
            assert!(!self_employed.is_approved(), "{record:?}");
        }
    }
}

#[test]
fn first_time_buyer_status_never_turns_an_approval_into_a_denial() {
    let evaluator = evaluator();
    for record in grid() {
        let repeat_buyer = evaluator.evaluate_record(&record);
        let first_time = evaluator.evaluate_record(&ApplicationRecord {
            is_first_time_buyer: true,
            ..record
        });

        if repeat_buyer.is_approved() {
            assert!(first_time.is_approved(), "{record:?}");
        }
        assert_eq!(repeat_buyer.risk_level, first_time.risk_level);
    }
}

#[test]
fn combined_flags_keep_both_monotonicity_properties() {
    let evaluator = evaluator();
    for record in grid() {
        let first_time_only = evaluator.evaluate_record(&ApplicationRecord {
            is_first_time_buyer: true,
            ..record
        });
        let self_employed_only = evaluator.evaluate_record(&ApplicationRecord {
            is_self_employed: true,
            ..record
        });
        let both = evaluator.evaluate_record(&ApplicationRecord {
            is_first_time_buyer: true,
            is_self_employed: true,
            ..record
        });

        if self_employed_only.is_approved() {
            assert!(both.is_approved(), "{record:?}");
        }
        if both.is_approved() {
            assert!(first_time_only.is_approved(), "{record:?}");
        }
        if record.employment_months < 24 {
            assert!(!both.is_approved(), "{record:?}");
        }
        assert_eq!(
            both.risk_level,
            tier_for_credit_score(record.credit_score),
            "{record:?}"
        );

        let position = |prefix: &str| {
            both.reasoning
                .iter()
                .position(|line| line.starts_with(prefix))
        };
        if let (Some(self_employed), Some(first_time)) = (
            position("INFO: Applicant is self-employed"),
            position("INFO: First-time homebuyer"),
        ) {
            assert!(self_employed < first_time, "{record:?}");
        }
    }
}

#[test]
fn first_time_buyer_bonus_is_reported_as_five_points() {
    let evaluator = evaluator();
    for record in grid() {
        let decision = evaluator.evaluate_record(&ApplicationRecord {
            is_first_time_buyer: true,
            ..record
        });
        let Some(line) = decision
            .reasoning
            .iter()
            .find(|line| line.starts_with("INFO: First-time homebuyer"))
        else {
            continue;
        };

        let expected = match decision.risk_level {
            RiskLevel::Low => "from 40.0% to 45.0%.",
            RiskLevel::Medium => "from 30.0% to 35.0%.",
            RiskLevel::High => "from 25.0% to 30.0%.",
        };
        assert!(line.ends_with(expected), "{line}");
    }
}

#[test]
fn evaluation_is_idempotent() {
    let evaluator = evaluator();
    for record in grid() {
        let first = serde_json::to_string(&evaluator.evaluate_record(&record))
            .expect("decision serializes");
        let second = serde_json::to_string(&evaluator.evaluate_record(&record))
            .expect("decision serializes");
        assert_eq!(first, second);
    }
}

#[test]
fn reasoning_is_never_empty_and_denials_end_the_trail() {
    let evaluator = evaluator();
    for record in grid() {
        let decision = evaluator.evaluate_record(&record);
        assert!(!decision.reasoning.is_empty());

        if decision.is_approved() {
            assert_eq!(decision.reasoning[0], "APPROVED: Applicant meets all criteria.");
            assert!(decision.reasoning[1..]
                .iter()
                .all(|line| line.starts_with("INFO:") || line.starts_with("PASS:")));
        } else {
            let denials: Vec<_> = decision
                .reasoning
                .iter()
                .filter(|line| line.starts_with("DENIED:"))
                .collect();
            assert_eq!(denials.len(), 1, "{record:?}");
            assert!(decision
                .reasoning
                .last()
                .is_some_and(|line| line.starts_with("DENIED:")));
        }
    }
}
