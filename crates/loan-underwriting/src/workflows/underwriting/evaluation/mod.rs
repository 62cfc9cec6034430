mod format;
pub mod policy;
mod rules;

pub use policy::UnderwritingTerms;

use super::domain::{ApplicationRecord, DecisionRecord, RiskLevel};
use serde_json::Value;
use tracing::{info, warn};

/// Stateless evaluator applying the fixed underwriting policy.
///
/// Total over its input: malformed documents and rule failures both come back as denied
/// [`DecisionRecord`]s, never as errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnderwritingEvaluator;

impl UnderwritingEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a decoded JSON document. Any value is accepted.
    pub fn evaluate(&self, document: &Value) -> DecisionRecord {
        match ApplicationRecord::from_value(document) {
            Ok(application) => self.evaluate_record(&application),
            Err(rejection) => {
                warn!(field = rejection.field().key(), "application rejected at intake");
                DecisionRecord::denied(vec![rejection.to_string()], RiskLevel::High)
            }
        }
    }

    pub fn evaluate_record(&self, application: &ApplicationRecord) -> DecisionRecord {
        let record = rules::underwrite(application);
        info!(
            decision = record.decision.label(),
            risk_level = record.risk_level.label(),
            credit_score = application.credit_score,
            "application evaluated"
        );
        record
    }
}

/// Shorthand for [`UnderwritingEvaluator::evaluate`].
pub fn evaluate(document: &Value) -> DecisionRecord {
    UnderwritingEvaluator::new().evaluate(document)
}
