//! Loan underwriting workflow: intake of application documents, rule evaluation, and the
//! HTTP route that exposes it.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{ApplicationRecord, Decision, DecisionRecord, RequiredField, RiskLevel};
pub use evaluation::{evaluate, UnderwritingEvaluator, UnderwritingTerms};
pub use intake::{load_application, IntakeError, IntakeRejection};
pub use router::underwriting_router;
