use serde::{Deserialize, Serialize};

/// Identifier wrapper for authenticated senders.
///
/// Issued by the external auth collaborator; the core treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);
