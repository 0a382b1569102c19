//! Leibniz series approximation of pi
//!
//! Computes the partial sum `4 * sum_{i=1..n} (-1)^(i+1) / (2i - 1)`.
//! The series is intentionally naive; it exists as a numeric workload for
//! the benchmark harness, not as a serious way to compute pi.

use crate::common::error::LapseResult;
use crate::invalid_argument_err;

/// Compute the first `n` terms of the Leibniz series for pi
///
/// Terms are accumulated left to right in a fixed order, so repeated calls
/// with the same `n` produce a bit-identical result. `n = 0` yields `0.0`.
/// The absolute error of the partial sum is bounded by `4 / (2n + 1)`.
pub fn leibniz_pi(n: i64) -> LapseResult<f64> {
    if n < 0 {
        return Err(invalid_argument_err!(
            "leibniz_pi requires a non-negative term count, got {}",
            n
        ));
    }

    let mut sum = 0.0_f64;
    let mut sign = 1.0_f64;
    for i in 1..=n {
        sum += sign / (2 * i - 1) as f64;
        sign = -sign;
    }
    Ok(4.0 * sum)
}
