use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::workflows::domain::UserId;
use crate::workflows::emotion::repository::{
    ProfileRecord, ProfileRepository, ProfileRepositoryError,
};
use crate::workflows::emotion::{analysis_router, AnalysisService, EmotionAnalyzer};

#[derive(Default, Clone)]
pub(super) struct MemoryProfiles {
    records: Arc<Mutex<HashMap<UserId, ProfileRecord>>>,
}

impl ProfileRepository for MemoryProfiles {
    fn upsert(&self, record: ProfileRecord) -> Result<ProfileRecord, ProfileRepositoryError> {
        let mut guard = self.records.lock().expect("profile mutex poisoned");
        guard.insert(record.user_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, user_id: &UserId) -> Result<Option<ProfileRecord>, ProfileRepositoryError> {
        let guard = self.records.lock().expect("profile mutex poisoned");
        Ok(guard.get(user_id).cloned())
    }
}

pub(super) struct UnavailableProfiles;

impl ProfileRepository for UnavailableProfiles {
    fn upsert(&self, _record: ProfileRecord) -> Result<ProfileRecord, ProfileRepositoryError> {
        Err(ProfileRepositoryError::Unavailable(
            "database offline".to_string(),
        ))
    }

    fn fetch(&self, _user_id: &UserId) -> Result<Option<ProfileRecord>, ProfileRepositoryError> {
        Err(ProfileRepositoryError::Unavailable(
            "database offline".to_string(),
        ))
    }
}

pub(super) fn build_service() -> (AnalysisService<MemoryProfiles>, Arc<MemoryProfiles>) {
    let profiles = Arc::new(MemoryProfiles::default());
    let service = AnalysisService::new(EmotionAnalyzer::local_only(), profiles.clone());
    (service, profiles)
}

pub(super) fn build_router() -> axum::Router {
    let (service, _) = build_service();
    analysis_router(Arc::new(service))
}

pub(super) const HOPEFUL_BIO: &str = "I hope my children achieve a better future. \
    Education will improve their tomorrow. I believe in their potential.";
