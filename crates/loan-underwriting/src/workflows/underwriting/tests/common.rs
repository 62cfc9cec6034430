use axum::response::Response;
use serde_json::{json, Value};

use crate::workflows::underwriting::{ApplicationRecord, DecisionRecord, UnderwritingEvaluator};

/// Low-risk applicant that clears every stage.
pub(super) fn prime_document() -> Value {
    json!({
        "annualIncome": 100000,
        "creditScore": 740,
        "monthlyDebt": 1000,
        "employmentMonths": 24,
        "isFirstTimeBuyer": false,
        "isSelfEmployed": false,
        "requestedAmount": 200000
    })
}

/// High-risk score with income below the override threshold.
pub(super) fn thin_file_document() -> Value {
    json!({
        "annualIncome": 40000,
        "creditScore": 610,
        "monthlyDebt": 500,
        "employmentMonths": 30,
        "isFirstTimeBuyer": false,
        "isSelfEmployed": false,
        "requestedAmount": 50000
    })
}

/// High-risk score rescued by income, first-time buyer.
pub(super) fn high_earner_document() -> Value {
    json!({
        "annualIncome": 160000,
        "creditScore": 610,
        "monthlyDebt": 500,
        "employmentMonths": 30,
        "isFirstTimeBuyer": true,
        "isSelfEmployed": false,
        "requestedAmount": 190000
    })
}

pub(super) fn prime_record() -> ApplicationRecord {
    ApplicationRecord::from_value(&prime_document()).expect("prime fixture is complete")
}

pub(super) fn with_field(mut document: Value, key: &str, value: Value) -> Value {
    document[key] = value;
    document
}

pub(super) fn evaluator() -> UnderwritingEvaluator {
    UnderwritingEvaluator::new()
}

pub(super) fn denial_line(record: &DecisionRecord) -> &str {
    record
        .denial_reason()
        .unwrap_or_else(|| panic!("expected a denial, got {record:?}"))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
