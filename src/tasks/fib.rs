//! Fibonacci sequence generation
//!
//! Produces the ordered sequence `F[0..n]` with `F[0] = 0`, `F[1] = 1`.
//! Two variants are provided: a plain iterative builder and a memoized
//! builder with an explicit cache. Both produce identical output for the
//! same input.

use crate::common::constants::MAX_FIB_INDEX_I64;
use crate::common::error::LapseResult;
use crate::{computation_err, invalid_argument_err};
use std::collections::HashMap;

/// Build the Fibonacci sequence `F[0..n]` iteratively
///
/// Runs in O(n) time and O(n) space with no recursion, so it is safe for
/// any input the integer type can represent. Additions are checked: values
/// past `F[92]` do not fit in an `i64` and yield a computation failure
/// instead of wrapping.
pub fn fibonacci_sequence(n: i64) -> LapseResult<Vec<i64>> {
    if n < 0 {
        return Err(invalid_argument_err!(
            "fibonacci_sequence requires a non-negative index, got {}",
            n
        ));
    }
    // Reject before allocating: the sequence can never be built past F[92],
    // and a huge index must not translate into a huge capacity request.
    if n > MAX_FIB_INDEX_I64 {
        return Err(computation_err!(
            "fibonacci overflows i64 at index {} (maximum representable index is {})",
            MAX_FIB_INDEX_I64 + 1,
            MAX_FIB_INDEX_I64
        ));
    }

    let len = n as usize + 1;
    let mut seq = Vec::with_capacity(len);
    seq.push(0_i64);
    if n >= 1 {
        seq.push(1_i64);
    }
    for i in 2..len {
        let next = seq[i - 1].checked_add(seq[i - 2]).ok_or_else(|| {
            computation_err!(
                "fibonacci overflows i64 at index {} (maximum representable index is {})",
                i,
                MAX_FIB_INDEX_I64
            )
        })?;
        seq.push(next);
    }
    Ok(seq)
}

/// Memoized Fibonacci builder with an explicit cache
///
/// The cache is a plain map from index to value, populated bottom-up. This
/// keeps the memoized strategy free of call-stack recursion while preserving
/// the property that cached and uncached calls return identical sequences.
#[derive(Debug, Default)]
pub struct FibonacciMemo {
    cache: HashMap<i64, i64>,
}

impl FibonacciMemo {
    /// Create a memoized builder with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized entries
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Build the sequence `F[0..n]`, reusing cached values where present
    pub fn sequence(&mut self, n: i64) -> LapseResult<Vec<i64>> {
        if n < 0 {
            return Err(invalid_argument_err!(
                "fibonacci sequence requires a non-negative index, got {}",
                n
            ));
        }

        self.fill_to(n)?;

        let mut seq = Vec::with_capacity(n as usize + 1);
        for i in 0..=n {
            // fill_to guarantees presence for every index up to n
            let value = *self
                .cache
                .get(&i)
                .ok_or_else(|| computation_err!("memo cache missing index {}", i))?;
            seq.push(value);
        }
        Ok(seq)
    }

    /// Populate the cache for all indices up to `n`, bottom-up
    fn fill_to(&mut self, n: i64) -> LapseResult<()> {
        self.cache.entry(0).or_insert(0);
        if n >= 1 {
            self.cache.entry(1).or_insert(1);
        }
        for i in 2..=n {
            if self.cache.contains_key(&i) {
                continue;
            }
            let a = self.cache[&(i - 1)];
            let b = self.cache[&(i - 2)];
            let next = a.checked_add(b).ok_or_else(|| {
                computation_err!(
                    "fibonacci overflows i64 at index {} (maximum representable index is {})",
                    i,
                    MAX_FIB_INDEX_I64
                )
            })?;
            self.cache.insert(i, next);
        }
        Ok(())
    }
}
