//! Computation functions: the numeric workloads under test
//!
//! Each workload is a pure function from one integer input to a numeric
//! result. Workloads are deterministic: the same input always yields a
//! bit-identical result within one process.

pub mod fib;
pub mod pi;

pub use fib::{fibonacci_sequence, FibonacciMemo};
pub use pi::leibniz_pi;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of one computation task execution
///
/// All workloads produce one of these shapes, so the harness can capture and
/// cross-check outputs without knowing which task produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskOutput {
    /// A floating-point scalar (pi approximation)
    Scalar(f64),
    /// An ordered sequence of integers (Fibonacci)
    Sequence(Vec<i64>),
}

impl fmt::Display for TaskOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskOutput::Scalar(v) => write!(f, "{}", v),
            TaskOutput::Sequence(seq) => {
                if seq.len() <= 8 {
                    write!(f, "{:?}", seq)
                } else {
                    // Long sequences are abbreviated for display
                    write!(
                        f,
                        "[{}, {}, .., {}] ({} values)",
                        seq[0],
                        seq[1],
                        seq[seq.len() - 1],
                        seq.len()
                    )
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalar() {
        assert_eq!(TaskOutput::Scalar(4.0).to_string(), "4");
    }

    #[test]
    fn test_display_short_sequence() {
        let out = TaskOutput::Sequence(vec![0, 1, 1, 2]);
        assert_eq!(out.to_string(), "[0, 1, 1, 2]");
    }

    #[test]
    fn test_display_long_sequence_abbreviated() {
        let out = TaskOutput::Sequence((0..20).collect());
        assert_eq!(out.to_string(), "[0, 1, .., 19] (20 values)");
    }

    #[test]
    fn test_output_equality() {
        assert_eq!(TaskOutput::Scalar(3.5), TaskOutput::Scalar(3.5));
        assert_ne!(
            TaskOutput::Scalar(3.5),
            TaskOutput::Sequence(vec![3])
        );
    }
}
