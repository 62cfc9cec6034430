use axum::{extract::State, routing::post, Json, Router};
use serde_json::Value;

use super::domain::DecisionRecord;
use super::evaluation::UnderwritingEvaluator;

pub const EVALUATE_PATH: &str = "/api/v1/underwriting/evaluate";

/// Router exposing the evaluator over HTTP.
///
/// Any JSON body is accepted; incomplete applications come back as `200 OK` denials, the same
/// as the CLI.
pub fn underwriting_router() -> Router {
    Router::new()
        .route(EVALUATE_PATH, post(evaluate_handler))
        .with_state(UnderwritingEvaluator::new())
}

pub(crate) async fn evaluate_handler(
    State(evaluator): State<UnderwritingEvaluator>,
    Json(document): Json<Value>,
) -> Json<DecisionRecord> {
    Json(evaluator.evaluate(&document))
}
