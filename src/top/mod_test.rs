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
fn top_pairs_sorted_descending() {
    let pairs = top_pairs(
        &[
            rec("a.py", "b.py", 30.0),
            rec("a.py", "c.py", 85.0),
            rec("b.py", "c.py", 55.0),
        ],
        10,
    );
    let scores: Vec<f64> = pairs.iter().map(|p| p.similarity).collect();
    assert_eq!(scores, [85.0, 55.0, 30.0]);
}

#[test]
fn top_pairs_truncates() {
    let pairs = top_pairs(
        &[
            rec("a.py", "b.py", 30.0),
            rec("a.py", "c.py", 85.0),
            rec("b.py", "c.py", 55.0),
        ],
        2,
    );
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].similarity, 85.0);
}

#[test]
fn top_pairs_ties_keep_input_order() {
    let pairs = top_pairs(
        &[rec("a.py", "b.py", 50.0), rec("a.py", "c.py", 50.0)],
        10,
    );
    assert_eq!(pairs[0].file2, "b.py");
    assert_eq!(pairs[1].file2, "c.py");
}

#[test]
fn top_pairs_count_larger_than_table() {
    let pairs = top_pairs(&[rec("a.py", "b.py", 30.0)], 10);
    assert_eq!(pairs.len(), 1);
}

#[test]
fn run_table_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    fs::write(&path, "File 1,File 2,Similarity %\na.py,b.py,85\nb.py,c.py,30\n").unwrap();
    run(&path, 1, false).unwrap();
    run(&path, 10, true).unwrap();
}

#[test]
fn run_missing_input_fails() {
    assert!(run(Path::new("no_such_results.csv"), 10, false).is_err());
}
