//! Benchmark report derivation and rendering
//!
//! A report aggregates samples by task label into comparative timing
//! statistics. Reports are immutable once computed; taking new measurements
//! means deriving a new report, not mutating an old one.

use crate::common::constants::{NANOS_PER_MILLI, NANOS_PER_SEC};
use crate::harness::sample::{BenchmarkSample, TaskFailure};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated statistics for one task
///
/// Durations are in nanoseconds. Failed rows carry the error text and no
/// timing numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Display label of the task
    pub label: String,
    /// The input size the task was bound to
    pub input: i64,
    /// Number of completed samples
    pub n_samples: usize,
    /// Minimum elapsed time in nanoseconds
    pub min_ns: f64,
    /// Median elapsed time in nanoseconds
    pub median_ns: f64,
    /// Mean elapsed time in nanoseconds
    pub mean_ns: f64,
    /// Maximum elapsed time in nanoseconds
    pub max_ns: f64,
    /// Whether every captured result for this task was equal
    ///
    /// `None` when no results were captured for comparison.
    pub all_results_equal: Option<bool>,
    /// Whether the task errored during the run
    pub failed: bool,
    /// The rendered error for a failed task
    pub error: Option<String>,
}

impl TaskSummary {
    fn from_task_samples(label: &str, input: i64, samples: &[&BenchmarkSample]) -> Self {
        let mut nanos: Vec<f64> = samples.iter().map(|s| s.elapsed.as_nanos() as f64).collect();
        nanos.sort_by(f64::total_cmp);

        let n = nanos.len();
        let min_ns = nanos[0];
        let max_ns = nanos[n - 1];
        let mean_ns = nanos.iter().sum::<f64>() / n as f64;
        let median_ns = if n % 2 == 1 {
            nanos[n / 2]
        } else {
            (nanos[n / 2 - 1] + nanos[n / 2]) / 2.0
        };

        let captured: Vec<_> = samples.iter().filter_map(|s| s.result.as_ref()).collect();
        let all_results_equal = if captured.is_empty() {
            None
        } else {
            Some(captured.windows(2).all(|w| w[0] == w[1]))
        };

        TaskSummary {
            label: label.to_string(),
            input,
            n_samples: n,
            min_ns,
            median_ns,
            mean_ns,
            max_ns,
            all_results_equal,
            failed: false,
            error: None,
        }
    }

    fn from_failure(failure: &TaskFailure) -> Self {
        TaskSummary {
            label: failure.label.clone(),
            input: failure.input,
            n_samples: 0,
            min_ns: 0.0,
            median_ns: 0.0,
            mean_ns: 0.0,
            max_ns: 0.0,
            all_results_equal: None,
            failed: true,
            error: Some(failure.error.clone()),
        }
    }
}

/// Comparative timing report over a set of benchmark samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// When the report was derived
    pub generated_at: DateTime<Utc>,
    /// Per-task rows, successful rows first in ascending median order
    pub rows: Vec<TaskSummary>,
}

impl BenchmarkReport {
    /// Derive a report from a sample set and the failures recorded alongside it
    ///
    /// Successful rows are sorted by ascending median duration with ties
    /// broken by label, so "task X is fastest" is a reproducible claim.
    /// Failed rows have no median and sort after all successful rows,
    /// by label. A task appears exactly once: if it failed, its row is the
    /// failure marker and any samples it produced before failing are left
    /// out of the report (they remain available through the raw export).
    pub fn from_samples(samples: &[BenchmarkSample], failures: &[TaskFailure]) -> Self {
        let mut rows = Vec::new();

        let failed_labels: Vec<&str> = failures.iter().map(|f| f.label.as_str()).collect();

        // Group by label, preserving first-seen input per label
        let mut seen: Vec<&str> = Vec::new();
        for sample in samples {
            if !seen.contains(&sample.label.as_str()) {
                seen.push(&sample.label);
            }
        }
        for label in seen {
            if failed_labels.contains(&label) {
                continue;
            }
            let task_samples: Vec<&BenchmarkSample> =
                samples.iter().filter(|s| s.label == label).collect();
            let input = task_samples[0].input;
            rows.push(TaskSummary::from_task_samples(label, input, &task_samples));
        }

        for failure in failures {
            rows.push(TaskSummary::from_failure(failure));
        }

        rows.sort_by(|a, b| {
            a.failed
                .cmp(&b.failed)
                .then_with(|| a.median_ns.total_cmp(&b.median_ns))
                .then_with(|| a.label.cmp(&b.label))
        });

        BenchmarkReport {
            generated_at: Utc::now(),
            rows,
        }
    }

    /// Number of rows in the report
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render the report as an ASCII table
    pub fn to_table_string(&self) -> String {
        if self.rows.is_empty() {
            return "(no rows)".to_string();
        }

        let mut result = String::new();
        result.push_str("label | n | samples | min | median | mean | max | consistent | status\n");
        for row in &self.rows {
            if row.failed {
                result.push_str(&format!(
                    "{} | {} | 0 | - | - | - | - | - | FAILED: {}\n",
                    row.label,
                    row.input,
                    row.error.as_deref().unwrap_or("unknown error")
                ));
            } else {
                result.push_str(&format!(
                    "{} | {} | {} | {} | {} | {} | {} | {} | ok\n",
                    row.label,
                    row.input,
                    row.n_samples,
                    format_nanos(row.min_ns),
                    format_nanos(row.median_ns),
                    format_nanos(row.mean_ns),
                    format_nanos(row.max_ns),
                    match row.all_results_equal {
                        Some(true) => "yes",
                        Some(false) => "NO",
                        None => "-",
                    }
                ));
            }
        }
        result
    }

    /// Serialize the report to pretty-printed JSON
    pub fn to_json_string(&self) -> crate::common::error::LapseResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Format a nanosecond value with a unit suited to its magnitude
pub fn format_nanos(ns: f64) -> String {
    if ns >= NANOS_PER_SEC {
        format!("{:.3}s", ns / NANOS_PER_SEC)
    } else if ns >= NANOS_PER_MILLI {
        format!("{:.3}ms", ns / NANOS_PER_MILLI)
    } else if ns >= 1_000.0 {
        format!("{:.3}us", ns / 1_000.0)
    } else {
        format!("{:.0}ns", ns)
    }
}
