//! Hamming distance implementation
//!
//! Counts positions where elements differ.
//! Only defined for sequences of equal length.
//!
//! # Length Mismatch Behavior
//!
//! - **`FallibleEditDistance`** and the free functions: return
//!   `SimilarityError::LengthMismatch` for unequal lengths
//! - **`Similarity`**: returns `0.0` for unequal lengths
//!
//! If you need Hamming-like behavior on unequal sequences, use
//! `hamming_distance_padded()`, which counts every missing position as a
//! mismatch.
//!
//! # Complexity
//! - Time: O(n)
//! - Space: O(1)

use super::{FallibleEditDistance, Similarity};
use crate::error::{Result, SimilarityError};

/// Hamming distance calculator
///
/// Stateless calculator - all instances are equivalent.
///
/// ```
/// use seqsim::algorithms::{FallibleEditDistance, Hamming};
///
/// let h = Hamming::new();
/// assert_eq!(FallibleEditDistance::distance(&h, &[1, 2, 3], &[1, 9, 3]), Ok(1));
/// assert!(FallibleEditDistance::distance(&h, &[1, 2, 3], &[1, 2]).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Hamming {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: PartialEq> FallibleEditDistance<T> for Hamming {
    fn distance(&self, a: &[T], b: &[T]) -> Result<usize> {
        hamming_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

impl<T: PartialEq> Similarity<T> for Hamming {
    fn similarity(&self, a: &[T], b: &[T]) -> f64 {
        FallibleEditDistance::similarity(self, a, b).unwrap_or(0.0)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Number of positions holding unequal elements.
///
/// # Errors
/// Returns `LengthMismatch` when the sequences differ in length.
#[inline]
pub fn hamming_distance<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize> {
    hamming_distance_by(a, b, |x, y| x == y)
}

/// Hamming distance with a custom element equality.
pub fn hamming_distance_by<T, F>(a: &[T], b: &[T], mut eq: F) -> Result<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    if a.len() != b.len() {
        return Err(SimilarityError::LengthMismatch {
            source_len: a.len(),
            target_len: b.len(),
        });
    }

    Ok(a.iter().zip(b).filter(|(x, y)| !eq(*x, *y)).count())
}

/// Hamming distance where positions past the shorter sequence count as
/// mismatches.
#[must_use]
pub fn hamming_distance_padded<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let shared = a.iter().zip(b).filter(|(x, y)| x != y).count();
    shared + a.len().abs_diff(b.len())
}

/// Normalized Hamming similarity (0.0 to 1.0). Two empty sequences are identical.
///
/// # Errors
/// Returns `LengthMismatch` when the sequences differ in length.
pub fn hamming_similarity<T: PartialEq>(a: &[T], b: &[T]) -> Result<f64> {
    let dist = hamming_distance(a, b)?;
    if a.is_empty() {
        Ok(1.0)
    } else {
        Ok(1.0 - dist as f64 / a.len() as f64)
    }
}
