//! Shared test fixtures

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small quality-inspection dataset with known characteristics:
/// - `status`: categorical with nulls (8 non-null: 5 pass, 2 fail, 1 hold)
/// - `batch`: integer identifiers
/// - `weight`: clean numeric column
#[allow(dead_code)]
pub fn inspection_dataframe() -> DataFrame {
    df! {
        "status" => [
            Some("pass"), Some("fail"), Some("pass"), None, Some("pass"),
            Some("hold"), Some("pass"), Some("fail"), None, Some("pass"),
        ],
        "batch" => [1i32, 1, 2, 2, 3, 3, 4, 4, 5, 5],
        "weight" => [9.8f64, 10.1, 10.0, 9.9, 10.2, 9.7, 10.0, 10.3, 9.9, 10.1],
    }
    .unwrap()
}

/// Write the inspection dataset as a CSV file in a temp directory.
///
/// Returns the directory guard together with the file path; keep the guard
/// alive for the duration of the test.
#[allow(dead_code)]
pub fn write_inspection_csv() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inspection.csv");

    let csv = "\
status,batch,weight
pass,1,9.8
fail,1,10.1
pass,2,10.0
,2,9.9
pass,3,10.2
hold,3,9.7
pass,4,10.0
fail,4,10.3
,5,9.9
pass,5,10.1
";
    std::fs::write(&path, csv).unwrap();

    (dir, path)
}

/// A wide status column with a controlled pass rate, for stress tests.
#[allow(dead_code)]
pub fn random_status_values(rows: usize, pass_rate: f64) -> Vec<Option<String>> {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    (0..rows)
        .map(|_| {
            if rng.gen::<f64>() < 0.02 {
                None
            } else if rng.gen::<f64>() < pass_rate {
                Some("pass".to_string())
            } else {
                Some("fail".to_string())
            }
        })
        .collect()
}
