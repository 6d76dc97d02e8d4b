//! Sequence similarity and edit-distance algorithms
//!
//! Each algorithm is implemented as a standalone generic function over slices,
//! plus a trait-based interface for extensibility. Functions with a `_by`
//! suffix take a caller-supplied comparer instead of `PartialEq`/`Ord`.

pub mod affix;
pub mod costs;
pub mod damerau;
pub mod hamming;
pub mod jaro;
pub mod lcs;
pub mod levenshtein;
pub mod metric;
pub mod set_similarity;
pub mod subsequence;

pub use affix::*;
pub use costs::*;
pub use damerau::*;
pub use hamming::*;
pub use jaro::*;
pub use lcs::*;
pub use levenshtein::*;
pub use metric::*;
pub use set_similarity::*;
pub use subsequence::*;

use crate::error::Result;

/// Trait for all similarity metrics.
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
pub trait Similarity<T>: Send + Sync {
    fn similarity(&self, a: &[T], b: &[T]) -> f64;

    /// Convenience method for distance (1.0 - similarity)
    fn distance(&self, a: &[T], b: &[T]) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Trait for edit distance algorithms that return integer distances
pub trait EditDistance<T>: Send + Sync {
    fn distance(&self, a: &[T], b: &[T]) -> usize;

    /// Convert to normalized similarity score (0.0 to 1.0)
    fn similarity(&self, a: &[T], b: &[T]) -> f64 {
        normalized_similarity(self.distance(a, b), a.len(), b.len())
    }

    fn name(&self) -> &'static str;
}

/// Trait for edit distance algorithms that may fail.
///
/// Some algorithms have constraints (e.g., Hamming requires equal-length
/// sequences), so the distance is returned as a `Result`.
pub trait FallibleEditDistance<T>: Send + Sync {
    /// Compute distance, returning an error if the operation is undefined
    fn distance(&self, a: &[T], b: &[T]) -> Result<usize>;

    /// Convert to normalized similarity score (0.0 to 1.0)
    fn similarity(&self, a: &[T], b: &[T]) -> Result<f64> {
        self.distance(a, b)
            .map(|dist| normalized_similarity(dist, a.len(), b.len()))
    }

    fn name(&self) -> &'static str;
}

/// `1 - distance / max(len_a, len_b)`, with two empty inputs counted as identical.
#[inline]
#[must_use]
pub fn normalized_similarity(distance: usize, len_a: usize, len_b: usize) -> f64 {
    1.0 - normalized_distance(distance, len_a, len_b)
}

/// `distance / max(len_a, len_b)`, 0.0 when both inputs are empty.
#[inline]
#[must_use]
pub fn normalized_distance(distance: usize, len_a: usize, len_b: usize) -> f64 {
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        0.0
    } else {
        distance as f64 / max_len as f64
    }
}
