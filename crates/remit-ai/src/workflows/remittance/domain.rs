use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fraud::FraudRisk;
use crate::workflows::domain::UserId;

/// Identifier wrapper for recorded remittances.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemittanceId(pub String);

/// Inbound transfer request. Both fields are required; deserialization
/// rejects payloads where either is missing or null.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemittanceRequest {
    pub amount: f64,
    pub recipient: String,
}

/// What the caller gets back from preparing a transfer: the display-only
/// envelope plus the fraud screening verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemittanceReceipt {
    pub public_key: String,
    pub encrypted_data: String,
    pub amount: f64,
    pub recipient: String,
    pub fraud_risk: FraudRisk,
}

/// History row shape shared with the external store. Written only after the
/// UI confirms a completed transfer; read back for impact scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemittanceRecord {
    pub id: RemittanceId,
    pub user_id: UserId,
    pub amount: f64,
    pub recipient: String,
    pub encrypted_data: String,
    pub created_at: DateTime<Utc>,
}

/// UI-supplied payload for recording a completed transfer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemittanceRecordSubmission {
    pub amount: f64,
    pub recipient: String,
    pub encrypted_data: String,
}
