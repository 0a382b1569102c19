//! Benchmark sample records

use crate::tasks::TaskOutput;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One measured task execution
///
/// Samples for the same task are independent trials. Their order does not
/// matter for statistics, but insertion order is preserved for raw-data
/// export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSample {
    /// Display label of the task that produced this sample
    pub label: String,
    /// The input size the task was bound to
    pub input: i64,
    /// Wall-clock time from just before invocation to just after return
    pub elapsed: Duration,
    /// The captured result, used for cross-run consistency checking
    pub result: Option<TaskOutput>,
}

impl BenchmarkSample {
    /// Create a sample with a captured result
    pub fn new(label: impl Into<String>, input: i64, elapsed: Duration, result: TaskOutput) -> Self {
        Self {
            label: label.into(),
            input,
            elapsed,
            result: Some(result),
        }
    }

    /// Create a sample without retaining the result
    pub fn without_result(label: impl Into<String>, input: i64, elapsed: Duration) -> Self {
        Self {
            label: label.into(),
            input,
            elapsed,
            result: None,
        }
    }

    /// Elapsed time in whole nanoseconds
    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }
}

/// A task execution that errored during a run
///
/// Failures are recorded against the task's entry instead of aborting the
/// batch; the report marks the row as failed rather than supplying timing
/// numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskFailure {
    /// Display label of the failed task
    pub label: String,
    /// The input size the task was bound to
    pub input: i64,
    /// The rendered error
    pub error: String,
}
