//! The benchmark harness runner
//!
//! Owns the registered task set and the samples collected from running it.
//! Execution is single-threaded and strictly sequential: benchmark fairness
//! depends on one task's timing never being skewed by another task running
//! at the same instant.

use crate::common::error::LapseResult;
use crate::harness::report::BenchmarkReport;
use crate::harness::sample::{BenchmarkSample, TaskFailure};
use crate::common::error::LapseError;
use crate::invalid_argument_err;
use crate::tasks::TaskOutput;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, warn};

type TaskFn = Box<dyn Fn() -> LapseResult<TaskOutput>>;

struct RegisteredTask {
    label: String,
    input: i64,
    task: TaskFn,
}

/// A benchmark harness instance
///
/// The harness owns its registered-task collection and sample state; there
/// is no ambient global. Timing is wall-clock from just before invocation
/// to just after return, applied uniformly to every task: what is compared
/// is the cost of calling each function from the host, including intrinsic
/// call overhead, not the algorithm in isolation.
#[derive(Default)]
pub struct Harness {
    tasks: Vec<RegisteredTask>,
    samples: Vec<BenchmarkSample>,
    failures: Vec<TaskFailure>,
}

impl Harness {
    /// Create an empty harness
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task under a display label, bound to one input
    ///
    /// Labels identify rows in the report and must be unique within a run;
    /// registering a duplicate label is a configuration error.
    pub fn register<F>(&mut self, label: &str, input: i64, task: F) -> LapseResult<()>
    where
        F: Fn() -> LapseResult<TaskOutput> + 'static,
    {
        if self.tasks.iter().any(|t| t.label == label) {
            return Err(LapseError::Configuration(format!(
                "duplicate task label '{}'",
                label
            )));
        }
        self.tasks.push(RegisteredTask {
            label: label.to_string(),
            input,
            task: Box::new(task),
        });
        Ok(())
    }

    /// Number of registered tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Collected samples in insertion order
    pub fn samples(&self) -> &[BenchmarkSample] {
        &self.samples
    }

    /// Failures recorded during the last run
    pub fn failures(&self) -> &[TaskFailure] {
        &self.failures
    }

    /// Execute every registered task `repetitions` times, sequentially
    ///
    /// Each run is a fresh batch: samples from a previous run are discarded.
    /// A task that errors is recorded as failed and skipped for its
    /// remaining repetitions; the rest of the batch continues. Failures are
    /// not retried, since a benchmark failure indicates a logic bug rather
    /// than transient unavailability.
    pub fn run(&mut self, repetitions: usize) -> LapseResult<()> {
        if repetitions == 0 {
            return Err(invalid_argument_err!(
                "repetitions must be a positive integer, got 0"
            ));
        }

        self.samples.clear();
        self.failures.clear();

        for entry in &self.tasks {
            debug!(label = %entry.label, input = entry.input, repetitions, "running task");
            for _ in 0..repetitions {
                let start = Instant::now();
                let outcome = (entry.task)();
                let elapsed = start.elapsed();

                match outcome {
                    Ok(result) => {
                        self.samples.push(BenchmarkSample::new(
                            entry.label.clone(),
                            entry.input,
                            elapsed,
                            result,
                        ));
                    }
                    Err(e) => {
                        warn!(label = %entry.label, error = %e, "task failed");
                        self.failures.push(TaskFailure {
                            label: entry.label.clone(),
                            input: entry.input,
                            error: e.to_string(),
                        });
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Derive a comparative report from the collected samples
    pub fn report(&self) -> BenchmarkReport {
        BenchmarkReport::from_samples(&self.samples, &self.failures)
    }

    /// Export the raw samples as CSV, in insertion order
    ///
    /// One row per sample: label, input, elapsed nanoseconds, and the
    /// captured result rendered as text. This is the data surface an
    /// external presentation layer (table renderer, plotting tool)
    /// consumes.
    pub fn export_samples_csv<W: Write>(&self, writer: W) -> LapseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["label", "input", "elapsed_ns", "result"])?;
        for sample in &self.samples {
            csv_writer.write_record([
                sample.label.as_str(),
                &sample.input.to_string(),
                &sample.elapsed_nanos().to_string(),
                &sample
                    .result
                    .as_ref()
                    .map(|r| r.to_string())
                    .unwrap_or_default(),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Build a harness pre-loaded with the built-in numeric workloads
///
/// Registers the Leibniz pi approximation and both Fibonacci variants under
/// their canonical labels. Inputs are validated eagerly so a bad input
/// surfaces at registration time rather than mid-run.
pub fn builtin_harness(pi_terms: i64, fib_index: i64) -> LapseResult<Harness> {
    if pi_terms < 0 {
        return Err(invalid_argument_err!(
            "pi term count must be non-negative, got {}",
            pi_terms
        ));
    }
    if fib_index < 0 {
        return Err(invalid_argument_err!(
            "fibonacci index must be non-negative, got {}",
            fib_index
        ));
    }

    let mut harness = Harness::new();
    harness.register("pi_leibniz", pi_terms, move || {
        crate::tasks::leibniz_pi(pi_terms).map(TaskOutput::Scalar)
    })?;
    harness.register("fib_iterative", fib_index, move || {
        crate::tasks::fibonacci_sequence(fib_index).map(TaskOutput::Sequence)
    })?;
    harness.register("fib_memoized", fib_index, move || {
        // A fresh cache per invocation keeps trials independent
        let mut memo = crate::tasks::FibonacciMemo::new();
        memo.sequence(fib_index).map(TaskOutput::Sequence)
    })?;
    Ok(harness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computation_err;

    #[test]
    fn test_duplicate_label_rejected() {
        let mut harness = Harness::new();
        harness
            .register("same", 1, || Ok(TaskOutput::Scalar(1.0)))
            .unwrap();
        let err = harness
            .register("same", 2, || Ok(TaskOutput::Scalar(2.0)))
            .unwrap_err();
        assert!(matches!(err, LapseError::Configuration(_)));
    }

    #[test]
    fn test_zero_repetitions_rejected() {
        let mut harness = Harness::new();
        let err = harness.run(0).unwrap_err();
        assert!(matches!(err, LapseError::InvalidArgument(_)));
    }

    #[test]
    fn test_sample_per_repetition() {
        let mut harness = Harness::new();
        harness
            .register("ok", 5, || Ok(TaskOutput::Scalar(1.0)))
            .unwrap();
        harness.run(4).unwrap();
        assert_eq!(harness.samples().len(), 4);
        assert!(harness.failures().is_empty());
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let mut harness = Harness::new();
        harness
            .register("bad", 1, || Err(computation_err!("boom")))
            .unwrap();
        harness
            .register("good", 1, || Ok(TaskOutput::Scalar(1.0)))
            .unwrap();
        harness.run(3).unwrap();

        // The failed task is not re-invoked; the good task completes fully
        assert_eq!(harness.failures().len(), 1);
        assert_eq!(harness.samples().len(), 3);
        assert!(harness.samples().iter().all(|s| s.label == "good"));
    }

    #[test]
    fn test_rerun_replaces_samples() {
        let mut harness = Harness::new();
        harness
            .register("ok", 5, || Ok(TaskOutput::Scalar(1.0)))
            .unwrap();
        harness.run(2).unwrap();
        harness.run(3).unwrap();
        assert_eq!(harness.samples().len(), 3);
    }

    #[test]
    fn test_builtin_harness_registers_three_tasks() {
        let harness = builtin_harness(100, 10).unwrap();
        assert_eq!(harness.task_count(), 3);
    }

    #[test]
    fn test_builtin_harness_rejects_negative_inputs() {
        assert!(builtin_harness(-1, 10).is_err());
        assert!(builtin_harness(100, -1).is_err());
    }
}
