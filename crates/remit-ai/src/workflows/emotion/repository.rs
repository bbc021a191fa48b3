use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EmotionVector;
use crate::workflows::domain::UserId;

/// Stored sender profile: the bio text and the latest emotion vector.
///
/// Each new analysis overwrites the vector wholesale; no history of past
/// vectors is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: UserId,
    pub bio: String,
    pub emotions: EmotionVector,
    pub updated_at: DateTime<Utc>,
}

/// Storage abstraction over the external profile collaborator.
pub trait ProfileRepository: Send + Sync {
    fn upsert(&self, record: ProfileRecord) -> Result<ProfileRecord, ProfileRepositoryError>;
    fn fetch(&self, user_id: &UserId) -> Result<Option<ProfileRecord>, ProfileRepositoryError>;
}

/// Error enumeration for profile store failures.
#[derive(Debug, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}
