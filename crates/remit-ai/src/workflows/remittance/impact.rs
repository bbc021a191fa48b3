use serde::Serialize;

use super::domain::RemittanceRecord;

/// Allocation percentages are capped here before scoring.
pub const MAX_ALLOCATION_PERCENT: f64 = 30.0;

const COUNT_SCORE_CAP: f64 = 50.0;
const REMITTANCES_PER_STEP: f64 = 5.0;
const POINTS_PER_STEP: f64 = 10.0;
const MAX_IMPACT_SCORE: f64 = 100.0;

/// Gamification score in 0..=100: up to 50 points from transfer count
/// (10 points per 5 transfers) and up to 50 from the average vault
/// allocation percentage.
pub fn calculate_impact_score(remittance_count: u32, avg_allocation_percent: f64) -> u8 {
    let count_score =
        ((remittance_count as f64 / REMITTANCES_PER_STEP) * POINTS_PER_STEP).min(COUNT_SCORE_CAP);
    let allocation_score = (avg_allocation_percent / MAX_ALLOCATION_PERCENT) * 50.0;
    let total = (count_score + allocation_score).round();
    total.min(MAX_IMPACT_SCORE) as u8
}

/// Impact snapshot derived from a sender's remittance history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactSummary {
    pub remittance_count: u32,
    pub avg_allocation_percent: f64,
    pub impact_score: u8,
}

impl ImpactSummary {
    /// Every record counts toward the transfer tally; the allocation
    /// percentage is the mean positive transfer amount scaled by 1/10000
    /// into a percentage, capped at [`MAX_ALLOCATION_PERCENT`].
    pub fn from_records(records: &[RemittanceRecord]) -> Self {
        let remittance_count = records.len() as u32;

        let positive: Vec<f64> = records
            .iter()
            .map(|record| record.amount)
            .filter(|amount| *amount > 0.0)
            .collect();

        let avg_allocation_percent = if positive.is_empty() {
            0.0
        } else {
            let mean = positive.iter().sum::<f64>() / positive.len() as f64;
            ((mean / 10_000.0) * 100.0).round().min(MAX_ALLOCATION_PERCENT)
        };

        Self {
            remittance_count,
            avg_allocation_percent,
            impact_score: calculate_impact_score(remittance_count, avg_allocation_percent),
        }
    }
}
