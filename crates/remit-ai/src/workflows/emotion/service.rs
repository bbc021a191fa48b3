use std::sync::Arc;

use chrono::Utc;

use super::remote::{AnalysisOutcome, EmotionAnalyzer};
use super::repository::{ProfileRecord, ProfileRepository, ProfileRepositoryError};
use super::EmotionVector;
use crate::workflows::domain::UserId;

/// Upper bound on analyzable text, matching the UI-side bio limit.
pub const MAX_ANALYSIS_TEXT_CHARS: usize = 5000;

/// Service composing input validation, analyzer delegation, and profile
/// persistence.
pub struct AnalysisService<P> {
    analyzer: EmotionAnalyzer,
    profiles: Arc<P>,
}

impl<P> AnalysisService<P>
where
    P: ProfileRepository + 'static,
{
    pub fn new(analyzer: EmotionAnalyzer, profiles: Arc<P>) -> Self {
        Self { analyzer, profiles }
    }

    /// Validate and score a text. Delegation failures never surface here;
    /// the worst case is the keyword fallback's output.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisOutcome, AnalysisError> {
        validate_text(text)?;
        Ok(self.analyzer.analyze(text).await)
    }

    /// Store the bio and its vector wholesale, replacing any prior profile.
    pub fn save_profile(
        &self,
        user_id: UserId,
        bio: String,
        emotions: EmotionVector,
    ) -> Result<ProfileRecord, AnalysisError> {
        validate_text(&bio)?;
        let record = ProfileRecord {
            user_id,
            bio,
            emotions: emotions.clamped(),
            updated_at: Utc::now(),
        };
        Ok(self.profiles.upsert(record)?)
    }

    pub fn profile(&self, user_id: &UserId) -> Result<Option<ProfileRecord>, AnalysisError> {
        Ok(self.profiles.fetch(user_id)?)
    }
}

fn validate_text(text: &str) -> Result<(), AnalysisError> {
    if text.is_empty() {
        return Err(AnalysisError::EmptyText);
    }
    let length = text.chars().count();
    if length > MAX_ANALYSIS_TEXT_CHARS {
        return Err(AnalysisError::TextTooLong { length });
    }
    Ok(())
}

/// Error raised by the analysis service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("text field is required")]
    EmptyText,
    #[error("text is too long ({length} characters, max {MAX_ANALYSIS_TEXT_CHARS})")]
    TextTooLong { length: usize },
    #[error(transparent)]
    Profile(#[from] ProfileRepositoryError),
}

impl AnalysisError {
    /// Validation errors are the caller's fault and map to 4xx responses.
    pub fn is_validation(&self) -> bool {
        matches!(self, AnalysisError::EmptyText | AnalysisError::TextTooLong { .. })
    }
}
