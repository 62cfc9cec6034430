//! Loan underwriting: maps an application record to an approve/deny decision, a risk tier,
//! and the ordered reasoning trail that explains how the decision was reached.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

pub use workflows::underwriting::{
    evaluate, underwriting_router, ApplicationRecord, Decision, DecisionRecord, RiskLevel,
    UnderwritingEvaluator,
};
