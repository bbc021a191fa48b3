use serde::{Deserialize, Serialize};

/// Transfers above this amount contribute to the risk score.
const HIGH_AMOUNT_THRESHOLD: f64 = 50_000.0;

/// Scam vocabulary screened as case-insensitive substrings. Each term counts
/// at most once regardless of how often it occurs.
const FRAUD_KEYWORDS: &[&str] = &[
    "agent",
    "visa",
    "job",
    "urgent",
    "emergency",
    "wire",
    "western",
    "verify",
    "account",
    "bank",
    "tax",
    "irs",
    "accident",
    "hospital",
    "police",
];

/// Risk tier for one (amount, message) pair. Never persisted; the UI
/// recomputes it whenever either input changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FraudRisk {
    None,
    Low,
    Medium,
    High,
}

impl FraudRisk {
    pub const fn label(self) -> &'static str {
        match self {
            FraudRisk::None => "none",
            FraudRisk::Low => "low",
            FraudRisk::Medium => "medium",
            FraudRisk::High => "high",
        }
    }
}

/// Score the pair: +2 for a high amount, +2 for two or more distinct keyword
/// hits, +1 for exactly one. Totals map 0/1/2/3+ to none/low/medium/high.
pub fn detect_fraud_risk(amount: f64, message: &str) -> FraudRisk {
    let mut risk_score = 0u8;

    if amount > HIGH_AMOUNT_THRESHOLD {
        risk_score += 2;
    }

    let content = message.to_lowercase();
    let keyword_matches = FRAUD_KEYWORDS
        .iter()
        .filter(|keyword| content.contains(*keyword))
        .count();

    risk_score += match keyword_matches {
        0 => 0,
        1 => 1,
        _ => 2,
    };

    match risk_score {
        0 => FraudRisk::None,
        1 => FraudRisk::Low,
        2 => FraudRisk::Medium,
        _ => FraudRisk::High,
    }
}
