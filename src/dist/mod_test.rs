use super::*;
use std::fs;

const CSV: &str = "File 1,File 2,Similarity %\na.py,b.py,85\na.py,c.py,55\nb.py,c.py,30\n";

#[test]
fn run_table_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    fs::write(&path, CSV).unwrap();
    run(&path, false).unwrap();
}

#[test]
fn run_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    fs::write(&path, CSV).unwrap();
    run(&path, true).unwrap();
}

#[test]
fn run_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    fs::write(&path, "File 1,File 2,Similarity %\n").unwrap();
    run(&path, false).unwrap();
}

#[test]
fn run_missing_input_fails() {
    assert!(run(Path::new("no_such_results.csv"), false).is_err());
}
