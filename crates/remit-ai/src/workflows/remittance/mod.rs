//! Remittance preparation: fraud screening, the demo-only envelope, history
//! records, and the impact score derived from them.

pub mod domain;
pub mod envelope;
pub mod fraud;
pub mod impact;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    RemittanceId, RemittanceReceipt, RemittanceRecord, RemittanceRecordSubmission,
    RemittanceRequest,
};
pub use envelope::{EnvelopeError, SealedEnvelope};
pub use fraud::{detect_fraud_risk, FraudRisk};
pub use impact::{calculate_impact_score, ImpactSummary};
pub use repository::{RemittanceRepository, RemittanceRepositoryError};
pub use router::remittance_router;
pub use service::{RemittanceService, RemittanceServiceError};
