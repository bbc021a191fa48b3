use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog vaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VaultId(pub String);

/// One entry of the externally supplied impact vault catalog. Read-only to
/// this service; `kind` is the category tag recommendations join on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vault {
    pub id: VaultId,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Where the sender lives. Unrecognized tags parse to `Other`, which shares
/// the US preference rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum DiasporaLocation {
    #[serde(rename = "US")]
    UnitedStates,
    #[serde(rename = "UAE")]
    UnitedArabEmirates,
    #[serde(rename = "UK")]
    UnitedKingdom,
    Canada,
    Australia,
    #[default]
    Other,
}

impl DiasporaLocation {
    pub const fn label(self) -> &'static str {
        match self {
            DiasporaLocation::UnitedStates => "US",
            DiasporaLocation::UnitedArabEmirates => "UAE",
            DiasporaLocation::UnitedKingdom => "UK",
            DiasporaLocation::Canada => "Canada",
            DiasporaLocation::Australia => "Australia",
            DiasporaLocation::Other => "Other",
        }
    }

    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "US" => DiasporaLocation::UnitedStates,
            "UAE" => DiasporaLocation::UnitedArabEmirates,
            "UK" => DiasporaLocation::UnitedKingdom,
            "CANADA" => DiasporaLocation::Canada,
            "AUSTRALIA" => DiasporaLocation::Australia,
            _ => DiasporaLocation::Other,
        }
    }
}

impl From<String> for DiasporaLocation {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}
