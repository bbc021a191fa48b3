use super::domain::RemittanceRecord;
use crate::workflows::domain::UserId;

/// Storage abstraction over the external remittance history collaborator.
/// Inserts happen only after the UI confirms a completed transfer.
pub trait RemittanceRepository: Send + Sync {
    fn insert(&self, record: RemittanceRecord) -> Result<RemittanceRecord, RemittanceRepositoryError>;
    fn list_for_user(&self, user_id: &UserId)
        -> Result<Vec<RemittanceRecord>, RemittanceRepositoryError>;
}

/// Error enumeration for history store failures.
#[derive(Debug, thiserror::Error)]
pub enum RemittanceRepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("remittance store unavailable: {0}")]
    Unavailable(String),
}
