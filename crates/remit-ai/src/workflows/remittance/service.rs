use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{
    RemittanceId, RemittanceReceipt, RemittanceRecord, RemittanceRecordSubmission,
    RemittanceRequest,
};
use super::envelope::{self, EnvelopeError};
use super::fraud::detect_fraud_risk;
use super::impact::ImpactSummary;
use super::repository::{RemittanceRepository, RemittanceRepositoryError};
use crate::workflows::domain::UserId;

static REMITTANCE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_remittance_id() -> RemittanceId {
    let id = REMITTANCE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RemittanceId(format!("rem-{id:06}"))
}

/// Service composing validation, fraud screening, envelope construction, and
/// history reads/writes.
pub struct RemittanceService<R> {
    history: Arc<R>,
}

impl<R> RemittanceService<R>
where
    R: RemittanceRepository + 'static,
{
    pub fn new(history: Arc<R>) -> Self {
        Self { history }
    }

    /// Validate a transfer request, screen it for fraud signals, and build
    /// the display envelope. Nothing is persisted here; the UI records the
    /// transfer separately once it completes.
    pub fn prepare(
        &self,
        request: &RemittanceRequest,
    ) -> Result<RemittanceReceipt, RemittanceServiceError> {
        validate_request(request)?;

        let fraud_risk = detect_fraud_risk(request.amount, &request.recipient);
        let sealed = envelope::seal(request.amount, &request.recipient, Utc::now())?;

        Ok(RemittanceReceipt {
            public_key: sealed.public_key,
            encrypted_data: sealed.encrypted_data,
            amount: request.amount,
            recipient: request.recipient.clone(),
            fraud_risk,
        })
    }

    /// Record a completed transfer in the sender's history.
    pub fn record(
        &self,
        user_id: UserId,
        submission: RemittanceRecordSubmission,
    ) -> Result<RemittanceRecord, RemittanceServiceError> {
        validate_request(&RemittanceRequest {
            amount: submission.amount,
            recipient: submission.recipient.clone(),
        })?;

        let record = RemittanceRecord {
            id: next_remittance_id(),
            user_id,
            amount: submission.amount,
            recipient: submission.recipient,
            encrypted_data: submission.encrypted_data,
            created_at: Utc::now(),
        };

        Ok(self.history.insert(record)?)
    }

    pub fn history(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<RemittanceRecord>, RemittanceServiceError> {
        Ok(self.history.list_for_user(user_id)?)
    }

    /// Impact snapshot over everything recorded for the sender so far.
    pub fn impact(&self, user_id: &UserId) -> Result<ImpactSummary, RemittanceServiceError> {
        let records = self.history.list_for_user(user_id)?;
        Ok(ImpactSummary::from_records(&records))
    }
}

fn validate_request(request: &RemittanceRequest) -> Result<(), RemittanceServiceError> {
    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(RemittanceServiceError::InvalidAmount);
    }
    if request.recipient.trim().is_empty() {
        return Err(RemittanceServiceError::MissingRecipient);
    }
    Ok(())
}

/// Error raised by the remittance service.
#[derive(Debug, thiserror::Error)]
pub enum RemittanceServiceError {
    #[error("amount must be a positive number")]
    InvalidAmount,
    #[error("recipient is required")]
    MissingRecipient,
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
    #[error(transparent)]
    Repository(#[from] RemittanceRepositoryError),
}

impl RemittanceServiceError {
    /// Validation errors are the caller's fault and map to 4xx responses.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RemittanceServiceError::InvalidAmount | RemittanceServiceError::MissingRecipient
        )
    }
}
