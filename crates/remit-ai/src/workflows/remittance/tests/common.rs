use std::sync::{Arc, Mutex};

use crate::workflows::domain::UserId;
use crate::workflows::remittance::domain::{RemittanceRecord, RemittanceRecordSubmission};
use crate::workflows::remittance::repository::{
    RemittanceRepository, RemittanceRepositoryError,
};
use crate::workflows::remittance::{remittance_router, RemittanceService};

#[derive(Default, Clone)]
pub(super) struct MemoryHistory {
    records: Arc<Mutex<Vec<RemittanceRecord>>>,
}

impl RemittanceRepository for MemoryHistory {
    fn insert(&self, record: RemittanceRecord) -> Result<RemittanceRecord, RemittanceRepositoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RemittanceRepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<RemittanceRecord>, RemittanceRepositoryError> {
        let guard = self.records.lock().expect("history mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect())
    }
}

pub(super) fn build_service() -> (RemittanceService<MemoryHistory>, Arc<MemoryHistory>) {
    let history = Arc::new(MemoryHistory::default());
    let service = RemittanceService::new(history.clone());
    (service, history)
}

pub(super) fn build_router() -> axum::Router {
    let (service, _) = build_service();
    remittance_router(Arc::new(service))
}

pub(super) fn submission(amount: f64) -> RemittanceRecordSubmission {
    RemittanceRecordSubmission {
        amount,
        recipient: "Rahim in Dhaka".to_string(),
        encrypted_data: "ZGVtbyBjaXBoZXJ0ZXh0".to_string(),
    }
}
