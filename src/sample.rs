//! Uniform sampling without replacement.
//!
//! Draws `k` items from a slice so that every size-`k` subset is equally likely and
//! every ordering of a chosen subset is equally likely.
//!
//! Uses a **partial Fisher–Yates shuffle** (Durstenfeld, 1964): only the last `k`
//! positions of a working copy are shuffled, so the cost is O(n) for the copy plus
//! O(k) RNG calls.
//!
//! ## References
//!
//! - Fisher & Yates (1938): the original shuffle.
//! - Durstenfeld (1964): the in-place, swap-based variant.
//! - Knuth, TAOCP Vol. 2, §3.4.2 (Algorithm P).
//!
//! Notes:
//! - `*_with_rng` entrypoints exist for deterministic testing/benchmarking.
//! - The caller's slice is never mutated.

use rand::prelude::*;
use thiserror::Error;

/// Errors for sampling requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The requested count was negative.
    #[error("sample count must be >= 0 (got {0})")]
    NegativeCount(i64),
}

/// Validate a signed count.
///
/// # Errors
///
/// Returns [`SampleError::NegativeCount`] if `k < 0`.
pub fn checked_count(k: i64) -> Result<usize, SampleError> {
    // Counts beyond usize can only mean "everything".
    usize::try_from(k).or_else(|_| {
        if k < 0 {
            Err(SampleError::NegativeCount(k))
        } else {
            Ok(usize::MAX)
        }
    })
}

/// Sample `k` items without replacement.
///
/// If `k >= items.len()`, returns every item (shuffled).
pub fn sample<T: Clone>(items: &[T], k: usize) -> Vec<T> {
    let mut rng = rand::rng();
    sample_with_rng(items, k, &mut rng)
}

/// Sampling with a caller-supplied RNG.
pub fn sample_with_rng<T: Clone, R: Rng + ?Sized>(items: &[T], k: usize, rng: &mut R) -> Vec<T> {
    let mut pool = items.to_vec();
    let n = pool.len();
    let k = k.min(n);

    // Positions n-1 ..= n-k each receive a uniform pick from what is still unplaced.
    for i in (n - k..n).rev() {
        let j = rng.random_range(0..=i);
        pool.swap(i, j);
    }

    pool.split_off(n - k)
}

/// Sample with a signed count, rejecting negative values.
///
/// # Errors
///
/// Returns [`SampleError::NegativeCount`] if `k < 0`.
pub fn try_sample<T: Clone>(items: &[T], k: i64) -> Result<Vec<T>, SampleError> {
    let mut rng = rand::rng();
    try_sample_with_rng(items, k, &mut rng)
}

/// [`try_sample`] with a caller-supplied RNG.
///
/// # Errors
///
/// Returns [`SampleError::NegativeCount`] if `k < 0`.
pub fn try_sample_with_rng<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    k: i64,
    rng: &mut R,
) -> Result<Vec<T>, SampleError> {
    let k = checked_count(k)?;
    Ok(sample_with_rng(items, k, rng))
}

/// Pick a single item uniformly. `None` if `items` is empty.
pub fn choose_with_rng<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.random_range(0..items.len())])
}
