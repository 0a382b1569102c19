//! Constants used throughout lapse

/// Default number of timed repetitions per task
pub const DEFAULT_REPETITIONS: usize = 1;

/// Default number of Leibniz series terms for the built-in pi task
pub const DEFAULT_PI_TERMS: i64 = 100_000;

/// Default Fibonacci index for the built-in fibonacci tasks
pub const DEFAULT_FIB_INDEX: i64 = 41;

/// Largest Fibonacci index whose value fits in a signed 64-bit integer
pub const MAX_FIB_INDEX_I64: i64 = 92;

/// Nanoseconds per second, for duration formatting
pub const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Nanoseconds per millisecond, for duration formatting
pub const NANOS_PER_MILLI: f64 = 1_000_000.0;
