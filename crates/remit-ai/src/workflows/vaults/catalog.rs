use super::domain::Vault;

/// Read-only view of the external vault catalog. The core never mutates the
/// catalog; additions and retirements are the collaborator's responsibility.
pub trait VaultCatalog: Send + Sync {
    fn vaults(&self) -> Result<Vec<Vault>, CatalogError>;
}

/// Error enumeration for catalog lookups.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("vault catalog unavailable: {0}")]
    Unavailable(String),
}
