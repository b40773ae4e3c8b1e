use super::*;

fn sample() -> Vec<BestMatch> {
    vec![
        BestMatch {
            file: "a.py".to_string(),
            matched_with: "b.py".to_string(),
            similarity: 85.0,
        },
        BestMatch {
            file: "c.py".to_string(),
            matched_with: "a.py".to_string(),
            similarity: 55.0,
        },
    ]
}

#[test]
fn print_report_does_not_panic() {
    print_report(&sample());
}

#[test]
fn print_report_empty() {
    print_report(&[]);
}

#[test]
fn print_json_does_not_panic() {
    print_json(&sample()).unwrap();
}

#[test]
fn json_includes_severity() {
    let matches = sample();
    let entries: Vec<JsonEntry> = matches
        .iter()
        .map(|m| JsonEntry {
            file: &m.file,
            matched_with: &m.matched_with,
            similarity: m.similarity,
            severity: SeverityBand::from_score(m.similarity),
        })
        .collect();
    let value = serde_json::to_value(&entries).unwrap();
    assert_eq!(value[0]["severity"], "high");
    assert_eq!(value[1]["severity"], "medium");
}
