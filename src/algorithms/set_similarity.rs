//! Set-based similarity coefficients
//!
//! Each sequence is reduced to the set of its distinct elements, so
//! repetitions do not count. Two empty sequences are identical (1.0);
//! exactly one empty sequence shares nothing (0.0).

use super::Similarity;
use ahash::AHashSet;
use std::hash::Hash;

/// Distinct-element counts of two sequences and of their intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SetSizes {
    source: usize,
    target: usize,
    intersection: usize,
}

impl SetSizes {
    fn of<K, I, J>(a: I, b: J) -> Self
    where
        K: Eq + Hash,
        I: IntoIterator<Item = K>,
        J: IntoIterator<Item = K>,
    {
        let a_set: AHashSet<K> = a.into_iter().collect();
        let b_set: AHashSet<K> = b.into_iter().collect();

        let (small, large) = if a_set.len() <= b_set.len() {
            (&a_set, &b_set)
        } else {
            (&b_set, &a_set)
        };
        let intersection = small.iter().filter(|k| large.contains(*k)).count();

        Self {
            source: a_set.len(),
            target: b_set.len(),
            intersection,
        }
    }

    fn union(&self) -> usize {
        self.source + self.target - self.intersection
    }

    /// Shared edge cases: `Some` when either set is empty.
    fn empty_case(&self) -> Option<f64> {
        match (self.source, self.target) {
            (0, 0) => Some(1.0),
            (0, _) | (_, 0) => Some(0.0),
            _ => None,
        }
    }

    fn dice(&self) -> f64 {
        self.empty_case().unwrap_or_else(|| {
            2.0 * self.intersection as f64 / (self.source + self.target) as f64
        })
    }

    fn jaccard(&self) -> f64 {
        self.empty_case()
            .unwrap_or_else(|| self.intersection as f64 / self.union() as f64)
    }

    fn overlap(&self) -> f64 {
        self.empty_case().unwrap_or_else(|| {
            self.intersection as f64 / self.source.min(self.target) as f64
        })
    }
}

/// Dice-Sørensen coefficient: `2|A∩B| / (|A| + |B|)`.
///
/// ```
/// use seqsim::algorithms::set_similarity::dice_coefficient;
///
/// let a: Vec<char> = "night".chars().collect();
/// let b: Vec<char> = "nacht".chars().collect();
/// assert_eq!(dice_coefficient(&a, &b), 0.6);
/// ```
#[must_use]
pub fn dice_coefficient<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    SetSizes::of(a, b).dice()
}

/// Dice-Sørensen coefficient over derived keys.
#[must_use]
pub fn dice_coefficient_by_key<T, K, F>(a: &[T], b: &[T], mut key: F) -> f64
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let a_keys: Vec<K> = a.iter().map(&mut key).collect();
    SetSizes::of(a_keys, b.iter().map(key)).dice()
}

/// Jaccard index: `|A∩B| / |A∪B|`.
#[must_use]
pub fn jaccard_index<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    SetSizes::of(a, b).jaccard()
}

/// Jaccard index over derived keys.
#[must_use]
pub fn jaccard_index_by_key<T, K, F>(a: &[T], b: &[T], mut key: F) -> f64
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let a_keys: Vec<K> = a.iter().map(&mut key).collect();
    SetSizes::of(a_keys, b.iter().map(key)).jaccard()
}

/// Jaccard distance: `1 - jaccard_index`.
#[inline]
#[must_use]
pub fn jaccard_distance<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    1.0 - jaccard_index(a, b)
}

/// Overlap (Szymkiewicz-Simpson) coefficient: `|A∩B| / min(|A|, |B|)`.
#[must_use]
pub fn overlap_coefficient<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    SetSizes::of(a, b).overlap()
}

/// Overlap coefficient over derived keys.
#[must_use]
pub fn overlap_coefficient_by_key<T, K, F>(a: &[T], b: &[T], mut key: F) -> f64
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let a_keys: Vec<K> = a.iter().map(&mut key).collect();
    SetSizes::of(a_keys, b.iter().map(key)).overlap()
}

/// Dice-Sørensen similarity calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dice;

impl<T: Eq + Hash> Similarity<T> for Dice {
    fn similarity(&self, a: &[T], b: &[T]) -> f64 {
        dice_coefficient(a, b)
    }

    fn name(&self) -> &'static str {
        "dice"
    }
}

/// Jaccard similarity calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaccard;

impl<T: Eq + Hash> Similarity<T> for Jaccard {
    fn similarity(&self, a: &[T], b: &[T]) -> f64 {
        jaccard_index(a, b)
    }

    fn name(&self) -> &'static str {
        "jaccard"
    }
}

/// Overlap coefficient calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlap;

impl<T: Eq + Hash> Similarity<T> for Overlap {
    fn similarity(&self, a: &[T], b: &[T]) -> f64 {
        overlap_coefficient(a, b)
    }

    fn name(&self) -> &'static str {
        "overlap"
    }
}
