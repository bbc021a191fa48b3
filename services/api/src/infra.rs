use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use remit_ai::workflows::domain::UserId;
use remit_ai::workflows::emotion::{ProfileRecord, ProfileRepository, ProfileRepositoryError};
use remit_ai::workflows::remittance::{
    RemittanceRecord, RemittanceRepository, RemittanceRepositoryError,
};
use remit_ai::workflows::vaults::{CatalogError, Vault, VaultCatalog, VaultId};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<HashMap<UserId, ProfileRecord>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
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

#[derive(Default, Clone)]
pub(crate) struct InMemoryRemittanceRepository {
    records: Arc<Mutex<Vec<RemittanceRecord>>>,
}

impl RemittanceRepository for InMemoryRemittanceRepository {
    fn insert(
        &self,
        record: RemittanceRecord,
    ) -> Result<RemittanceRecord, RemittanceRepositoryError> {
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

/// Fixed catalog standing in for the external vault collaborator.
#[derive(Clone)]
pub(crate) struct StaticVaultCatalog {
    vaults: Vec<Vault>,
}

impl Default for StaticVaultCatalog {
    fn default() -> Self {
        Self {
            vaults: default_vaults(),
        }
    }
}

impl VaultCatalog for StaticVaultCatalog {
    fn vaults(&self) -> Result<Vec<Vault>, CatalogError> {
        Ok(self.vaults.clone())
    }
}

pub(crate) fn default_vaults() -> Vec<Vault> {
    [
        (
            "vault-education",
            "education",
            "Scholarships, digital literacy, and rural school infrastructure",
        ),
        (
            "vault-healthcare",
            "healthcare",
            "Mobile clinics and maternal care for home communities",
        ),
        (
            "vault-water",
            "water",
            "Clean water wells, purification plants, and tube well installation",
        ),
        (
            "vault-agriculture",
            "agriculture",
            "Farmer training, seed distribution, and sustainable cultivation",
        ),
        (
            "vault-solar",
            "solar_energy",
            "Household solar installation and community micro-grids",
        ),
        (
            "vault-livelihood",
            "livelihood",
            "Microfinance and skills training for small businesses",
        ),
        (
            "vault-relief",
            "disaster_relief",
            "Emergency relief and flood recovery funds",
        ),
    ]
    .into_iter()
    .map(|(id, kind, description)| Vault {
        id: VaultId(id.to_string()),
        kind: kind.to_string(),
        description: description.to_string(),
    })
    .collect()
}
