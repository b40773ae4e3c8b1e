use super::*;
use std::fs;

const HEADER: &str = "File 1,File 2,Similarity %\n";

fn write_results(dir: &tempfile::TempDir, rows: &str) -> std::path::PathBuf {
    let path = dir.path().join("results.csv");
    fs::write(&path, format!("{HEADER}{rows}")).unwrap();
    path
}

#[test]
fn load_valid_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_results(&dir, "a.py,b.py,85.5\nb.py,c.py,30\n");
    let records = load_csv(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].file1, "a.py");
    assert_eq!(records[0].file2, "b.py");
    assert_eq!(records[0].similarity, 85.5);
    assert_eq!(records[1].similarity, 30.0);
}

#[test]
fn load_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_results(&dir, "");
    assert!(load_csv(&path).unwrap().is_empty());
}

#[test]
fn load_missing_file_fails() {
    assert!(load_csv(Path::new("no_such_results.csv")).is_err());
}

#[test]
fn rejects_score_above_100() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_results(&dir, "a.py,b.py,140\n");
    let err = load_csv(&path).unwrap_err().to_string();
    assert!(err.contains("line 2"));
    assert!(err.contains("140"));
}

#[test]
fn rejects_negative_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_results(&dir, "a.py,b.py,-5\n");
    assert!(load_csv(&path).is_err());
}

#[test]
fn rejects_nan_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_results(&dir, "a.py,b.py,NaN\n");
    assert!(load_csv(&path).is_err());
}

#[test]
fn rejects_empty_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_results(&dir, ",b.py,50\n");
    let err = load_csv(&path).unwrap_err().to_string();
    assert!(err.contains("empty file name"));
}

#[test]
fn rejects_non_numeric_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_results(&dir, "a.py,b.py,very\n");
    assert!(load_csv(&path).is_err());
}

#[test]
fn error_names_the_offending_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_results(&dir, "a.py,b.py,50\nc.py,d.py,101\n");
    let err = load_csv(&path).unwrap_err().to_string();
    assert!(err.contains("line 3"));
}

#[test]
fn write_csv_uses_upstream_header() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("export.csv");
    let records = vec![SimilarityRecord {
        file1: "a.py".to_string(),
        file2: "b.py".to_string(),
        similarity: 85.5,
    }];
    write_csv(&out, &records).unwrap();
    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("File 1,File 2,Similarity %"));
    assert!(content.contains("a.py,b.py,85.5"));
}

#[test]
fn exported_records_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("export.csv");
    let records = vec![
        SimilarityRecord {
            file1: "a.py".to_string(),
            file2: "b.py".to_string(),
            similarity: 85.5,
        },
        SimilarityRecord {
            file1: "b.py".to_string(),
            file2: "c.py".to_string(),
            similarity: 30.0,
        },
    ];
    write_csv(&out, &records).unwrap();
    assert_eq!(load_csv(&out).unwrap(), records);
}
