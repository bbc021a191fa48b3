pub mod domain;
pub mod emotion;
pub mod remittance;
pub mod vaults;
