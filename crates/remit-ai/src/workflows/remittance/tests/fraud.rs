use crate::workflows::remittance::{detect_fraud_risk, FraudRisk};

#[test]
fn zero_amount_and_empty_message_is_clean() {
    assert_eq!(detect_fraud_risk(0.0, ""), FraudRisk::None);
}

#[test]
fn high_amount_alone_scores_medium() {
    // The amount factor contributes two points on its own.
    assert_eq!(detect_fraud_risk(60_000.0, ""), FraudRisk::Medium);
    assert_eq!(detect_fraud_risk(50_000.0, ""), FraudRisk::None);
}

#[test]
fn high_amount_with_two_keywords_is_high() {
    assert_eq!(
        detect_fraud_risk(60_000.0, "urgent wire transfer"),
        FraudRisk::High
    );
}

#[test]
fn two_keywords_without_high_amount_is_medium() {
    assert_eq!(
        detect_fraud_risk(1_000.0, "verify your account"),
        FraudRisk::Medium
    );
}

#[test]
fn single_keyword_is_low() {
    assert_eq!(detect_fraud_risk(100.0, "urgent help needed"), FraudRisk::Low);
}

#[test]
fn repeated_keyword_counts_once() {
    assert_eq!(
        detect_fraud_risk(100.0, "urgent urgent urgent"),
        FraudRisk::Low
    );
}

#[test]
fn keyword_matching_is_case_insensitive_substring() {
    // "BANKING" still contains "bank"; matching is substring, not whole-word.
    assert_eq!(
        detect_fraud_risk(100.0, "URGENT BANKING issue"),
        FraudRisk::Medium
    );
}

#[test]
fn risk_labels_are_lowercase() {
    assert_eq!(FraudRisk::None.label(), "none");
    assert_eq!(FraudRisk::Low.label(), "low");
    assert_eq!(FraudRisk::Medium.label(), "medium");
    assert_eq!(FraudRisk::High.label(), "high");
}
