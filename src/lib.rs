//! Lapse - Sequential Numeric Micro-Benchmark Harness
//!
//! Lapse runs pure numeric workloads under timed repetition, collects
//! wall-clock timing samples, and reports comparative statistics. Execution
//! is single-threaded and strictly sequential so that one task's timing is
//! never skewed by another task running at the same instant.
//!
pub mod common;
pub mod harness;
pub mod tasks;

// Re-export common types for convenience
pub use common::{LapseError, LapseResult};

// Re-export the harness for convenience
pub use harness::{builtin_harness, BenchmarkReport, BenchmarkSample, Harness, TaskFailure, TaskSummary};

// Re-export the workloads for convenience
pub use tasks::{fibonacci_sequence, leibniz_pi, FibonacciMemo, TaskOutput};

#[cfg(test)]
mod tests {

    #[test]
    fn it_works() {
        let result = 2 + 2;
        assert_eq!(result, 4);
    }
}
