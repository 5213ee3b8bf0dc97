//! Distance metrics for integer feature vectors.
//!
//! The whole crate ranks neighbors by L1 (Manhattan) distance: raster
//! features are small non-negative intensities, and the sum of absolute
//! pixel differences is both cheap and a true metric (symmetric, zero
//! iff equal, triangle inequality). Distances accumulate in `u64` so no
//! realistic vector length can overflow.

use crate::error::{IndexError, Result};

/// L1 (Manhattan) distance between two equal-length vectors.
///
/// Fails with [`IndexError::DimensionMismatch`] if the lengths differ.
#[inline]
pub fn l1_distance(a: &[u16], b: &[u16]) -> Result<u64> {
    if a.len() != b.len() {
        return Err(IndexError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| u64::from(x.abs_diff(y)))
        .sum())
}
