use super::*;
use std::fs;

fn rec(file1: &str, file2: &str, similarity: f64) -> SimilarityRecord {
    SimilarityRecord {
        file1: file1.to_string(),
        file2: file2.to_string(),
        similarity,
    }
}

#[test]
fn every_file_gets_its_highest_match() {
    let matches = best_matches(&[
        rec("a.py", "b.py", 85.0),
        rec("a.py", "c.py", 55.0),
        rec("b.py", "c.py", 30.0),
    ]);
    assert_eq!(matches.len(), 3);

    // Sorted descending: a and b share the 85 pair, then c's best is 55.
    assert_eq!(matches[0].file, "a.py");
    assert_eq!(matches[0].matched_with, "b.py");
    assert_eq!(matches[0].similarity, 85.0);
    assert_eq!(matches[1].file, "b.py");
    assert_eq!(matches[1].matched_with, "a.py");
    assert_eq!(matches[2].file, "c.py");
    assert_eq!(matches[2].matched_with, "a.py");
    assert_eq!(matches[2].similarity, 55.0);
}

#[test]
fn second_column_files_are_counted() {
    let matches = best_matches(&[rec("a.py", "b.py", 40.0)]);
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().any(|m| m.file == "b.py" && m.matched_with == "a.py"));
}

#[test]
fn ties_keep_the_first_pair_seen() {
    let matches = best_matches(&[rec("a.py", "b.py", 50.0), rec("a.py", "c.py", 50.0)]);
    let a = matches.iter().find(|m| m.file == "a.py").unwrap();
    assert_eq!(a.matched_with, "b.py");
}

#[test]
fn higher_score_replaces_earlier_match() {
    let matches = best_matches(&[rec("a.py", "b.py", 50.0), rec("a.py", "c.py", 90.0)]);
    let a = matches.iter().find(|m| m.file == "a.py").unwrap();
    assert_eq!(a.matched_with, "c.py");
    assert_eq!(a.similarity, 90.0);
}

#[test]
fn empty_table_yields_no_matches() {
    assert!(best_matches(&[]).is_empty());
}

#[test]
fn run_table_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    fs::write(&path, "File 1,File 2,Similarity %\na.py,b.py,85\n").unwrap();
    run(&path, false).unwrap();
    run(&path, true).unwrap();
}

#[test]
fn run_missing_input_fails() {
    assert!(run(Path::new("no_such_results.csv"), false).is_err());
}
