use super::*;

#[test]
fn eighty_and_above_is_high() {
    assert_eq!(SeverityBand::from_score(80.0), SeverityBand::High);
    assert_eq!(SeverityBand::from_score(100.0), SeverityBand::High);
}

#[test]
fn just_below_eighty_is_medium() {
    assert_eq!(SeverityBand::from_score(79.9), SeverityBand::Medium);
}

#[test]
fn fifty_is_medium() {
    assert_eq!(SeverityBand::from_score(50.0), SeverityBand::Medium);
}

#[test]
fn below_fifty_is_low() {
    assert_eq!(SeverityBand::from_score(49.9), SeverityBand::Low);
    assert_eq!(SeverityBand::from_score(0.0), SeverityBand::Low);
}

#[test]
fn labels() {
    assert_eq!(SeverityBand::High.as_str(), "high");
    assert_eq!(SeverityBand::Medium.as_str(), "medium");
    assert_eq!(SeverityBand::Low.as_str(), "low");
}

#[test]
fn display_uses_label() {
    assert_eq!(SeverityBand::Medium.to_string(), "medium");
}

#[test]
fn serializes_snake_case() {
    let value = serde_json::to_value(SeverityBand::High).unwrap();
    assert_eq!(value, serde_json::json!("high"));
}
