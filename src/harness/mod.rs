//! The benchmark harness: timed repetition, sample collection, reporting

pub mod report;
pub mod runner;
pub mod sample;

pub use report::{format_nanos, BenchmarkReport, TaskSummary};
pub use runner::{builtin_harness, Harness};
pub use sample::{BenchmarkSample, TaskFailure};
