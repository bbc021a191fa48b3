//! Impact vault catalog types and the emotion-driven recommender.

pub mod catalog;
pub mod domain;
mod preferences;
pub mod recommender;
pub mod router;

pub use catalog::{CatalogError, VaultCatalog};
pub use domain::{DiasporaLocation, Vault, VaultId};
pub use recommender::{recommend, RankedVault, RecommendationSet};
pub use router::vault_router;
