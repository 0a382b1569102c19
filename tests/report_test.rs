//! Report ordering and serialization tests over synthetic samples

use lapse::{BenchmarkReport, BenchmarkSample, LapseResult, TaskFailure};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn sample(label: &str, nanos: u64) -> BenchmarkSample {
    BenchmarkSample::without_result(label, 100, Duration::from_nanos(nanos))
}

#[test]
fn test_ordering_by_ascending_median() {
    // Medians per label: A = 5, B = 1, C = 3
    let samples = vec![
        sample("A", 4),
        sample("A", 5),
        sample("A", 6),
        sample("B", 1),
        sample("B", 1),
        sample("B", 2),
        sample("C", 3),
        sample("C", 2),
        sample("C", 9),
    ];
    let report = BenchmarkReport::from_samples(&samples, &[]);
    let labels: Vec<&str> = report.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["B", "C", "A"]);
}

#[test]
fn test_median_ties_break_lexicographically() {
    let samples = vec![sample("zeta", 10), sample("eta", 10), sample("theta", 10)];
    let report = BenchmarkReport::from_samples(&samples, &[]);
    let labels: Vec<&str> = report.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["eta", "theta", "zeta"]);
}

#[test]
fn test_failed_rows_follow_successful_rows() {
    let samples = vec![sample("ok", 50)];
    let failures = vec![
        TaskFailure {
            label: "b_failed".to_string(),
            input: 93,
            error: "overflow".to_string(),
        },
        TaskFailure {
            label: "a_failed".to_string(),
            input: 93,
            error: "overflow".to_string(),
        },
    ];
    let report = BenchmarkReport::from_samples(&samples, &failures);
    let labels: Vec<&str> = report.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["ok", "a_failed", "b_failed"]);
}

#[test]
fn test_report_json_shape_round_trips() -> LapseResult<()> {
    let samples = vec![sample("pi", 120), sample("pi", 80)];
    let report = BenchmarkReport::from_samples(&samples, &[]);

    let json = report.to_json_string()?;
    let parsed: BenchmarkReport = serde_json::from_str(&json)?;
    assert_eq!(parsed, report);

    let row = &parsed.rows[0];
    assert_eq!(row.label, "pi");
    assert_eq!(row.n_samples, 2);
    assert_eq!(row.min_ns, 80.0);
    assert_eq!(row.median_ns, 100.0);
    assert_eq!(row.max_ns, 120.0);
    Ok(())
}

#[test]
fn test_table_rendering_marks_failures() {
    let failures = vec![TaskFailure {
        label: "broken".to_string(),
        input: 93,
        error: "fibonacci overflows i64".to_string(),
    }];
    let report = BenchmarkReport::from_samples(&[sample("ok", 10)], &failures);
    let table = report.to_table_string();
    assert!(table.contains("ok"));
    assert!(table.contains("FAILED: fibonacci overflows i64"));
}
