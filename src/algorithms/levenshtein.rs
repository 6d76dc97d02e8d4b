//! Levenshtein (edit) distance implementation
//!
//! Optimized with:
//! - Common prefix/suffix trimming before any DP work
//! - Two rolling rows sized by the shorter input (O(min(m,n)) space)
//! - Early termination with max distance threshold
//! - Myers bit-parallel algorithm for hashable elements (O(⌈m/64⌉n) time)

use super::affix::trim_common_ends_by;
use super::costs::EditCosts;
use super::{normalized_distance, normalized_similarity, EditDistance, Similarity};
use crate::error::Result;
use ahash::AHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

/// Maximum pattern length for Myers bit-parallel algorithm (64 bits per block)
const MYERS_BLOCK_SIZE: usize = 64;

// ============================================================================
// Myers Bit-Parallel Algorithm
// ============================================================================

/// Myers bit-parallel Levenshtein distance for patterns up to 64 elements.
///
/// For patterns <= 64 elements the whole pattern fits in a single 64-bit word.
/// Longer patterns fall back to the row DP.
///
/// Based on: Myers, G. (1999). "A fast bit-vector algorithm for approximate string matching"
#[inline]
fn myers_64<T: Eq + Hash>(pattern: &[T], text: &[T]) -> usize {
    let m = pattern.len();
    let n = text.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }
    if m > MYERS_BLOCK_SIZE {
        return dp_distance(text, pattern, |x: &T, y: &T| x == y);
    }

    // Peq[c] has bit i set if pattern[i] == c
    let mut peq: AHashMap<&T, u64> = AHashMap::with_capacity(m);
    for (i, c) in pattern.iter().enumerate() {
        *peq.entry(c).or_insert(0) |= 1u64 << i;
    }

    // Vp = all 1s (every vertical step increases by 1), Vn = no decreases
    let mut vp: u64 = !0u64;
    let mut vn: u64 = 0u64;
    let mut score = m;

    let mask = 1u64 << (m - 1);

    for tc in text {
        let eq = peq.get(tc).copied().unwrap_or(0);

        let xv = eq | vn;
        let eq_and_vp = eq & vp;
        let xh = ((eq_and_vp.wrapping_add(vp)) ^ vp) | eq;

        let hp = vn | !(xh | vp);
        let hn = vp & xh;

        if (hp & mask) != 0 {
            score += 1;
        } else if (hn & mask) != 0 {
            score -= 1;
        }

        // First row is 0,1,2,... so bit 0 of the shifted hp is always set
        let hp_shifted = (hp << 1) | 1;
        let hn_shifted = hn << 1;

        vp = hn_shifted | !(xv | hp_shifted);
        vn = hp_shifted & xv;
    }

    score
}

// ============================================================================
// Rolling-row DP
// ============================================================================

/// Two-row Wagner-Fischer DP. `b` is the row axis, so pass the shorter input there.
#[inline]
fn dp_distance<T, F>(a: &[T], b: &[T], mut eq: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let n = b.len();

    let mut prev: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for (i, x) in a.iter().enumerate() {
        curr[0] = i + 1;

        for (j, y) in b.iter().enumerate() {
            let cost = usize::from(!eq(x, y));
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Two-row DP with max_distance threshold
#[inline]
fn dp_distance_bounded<T, F>(a: &[T], b: &[T], max_distance: usize, mut eq: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let n = b.len();

    let mut prev: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for (i, x) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for (j, y) in b.iter().enumerate() {
            let cost = usize::from(!eq(x, y));
            let cell = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
            curr[j + 1] = cell;
            row_min = row_min.min(cell);
        }

        // Values along a row never drop below the row minimum in later rows
        if row_min > max_distance {
            return None;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let result = prev[n];
    (result <= max_distance).then_some(result)
}

/// Two-row DP with per-operation costs. `a` is the source, `b` the target.
fn weighted_dp_distance<T, F>(a: &[T], b: &[T], costs: &EditCosts, mut eq: F) -> f64
where
    F: FnMut(&T, &T) -> bool,
{
    let n = b.len();

    let mut prev: SmallVec<[f64; 64]> = (0..=n).map(|j| j as f64 * costs.insertion).collect();
    let mut curr: SmallVec<[f64; 64]> = smallvec::smallvec![0.0; n + 1];

    for (i, x) in a.iter().enumerate() {
        curr[0] = (i + 1) as f64 * costs.deletion;

        for (j, y) in b.iter().enumerate() {
            let substitution = if eq(x, y) { 0.0 } else { costs.substitution };
            curr[j + 1] = (prev[j + 1] + costs.deletion)
                .min(curr[j] + costs.insertion)
                .min(prev[j] + substitution);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

// ============================================================================
// Public API
// ============================================================================

/// Levenshtein distance calculator with optional early termination
///
/// # Complexity
/// - Time: O(m*n) where m and n are sequence lengths
/// - Space: O(min(m,n)) using rolling-row DP
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein {
    /// Maximum distance to compute (for early termination)
    pub max_distance: Option<usize>,
}

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self { max_distance: None }
    }

    #[must_use]
    pub fn with_max_distance(max_distance: usize) -> Self {
        Self {
            max_distance: Some(max_distance),
        }
    }

    /// Returns `None` if the distance exceeds the `max_distance` threshold.
    #[must_use]
    pub fn compute<T: PartialEq>(&self, a: &[T], b: &[T]) -> Option<usize> {
        match self.max_distance {
            Some(max_d) => levenshtein_bounded(a, b, max_d),
            None => Some(levenshtein(a, b)),
        }
    }
}

impl<T: PartialEq> EditDistance<T> for Levenshtein {
    fn distance(&self, a: &[T], b: &[T]) -> usize {
        // Exceeding the threshold reports max_distance + 1
        match self.max_distance {
            Some(max_d) => levenshtein_bounded(a, b, max_d).unwrap_or(max_d.saturating_add(1)),
            None => levenshtein(a, b),
        }
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

impl<T: PartialEq> Similarity<T> for Levenshtein {
    fn similarity(&self, a: &[T], b: &[T]) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Levenshtein distance: minimum number of insertions, deletions and
/// substitutions turning `a` into `b`.
///
/// # Example
/// ```
/// use seqsim::algorithms::levenshtein::levenshtein;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(levenshtein(&a, &b), 3);
/// assert_eq!(levenshtein(&[1, 2, 3], &[1, 3]), 1);
/// ```
#[inline]
#[must_use]
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    levenshtein_by(a, b, |x, y| x == y)
}

/// Levenshtein distance with a custom element equality.
#[must_use]
pub fn levenshtein_by<T, F>(a: &[T], b: &[T], mut eq: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let trimmed = trim_common_ends_by(a, b, &mut eq);
    let (source, target) = (trimmed.source, trimmed.target);

    if source.is_empty() {
        return target.len();
    }
    if target.is_empty() {
        return source.len();
    }

    if source.len() < target.len() {
        dp_distance(target, source, |x: &T, y: &T| eq(y, x))
    } else {
        dp_distance(source, target, eq)
    }
}

/// Compute Levenshtein distance with a max threshold.
///
/// Returns `None` if distance exceeds `max_distance` (early termination).
///
/// # Example
/// ```
/// use seqsim::algorithms::levenshtein::levenshtein_bounded;
///
/// let a: Vec<char> = "abcdef".chars().collect();
/// let b: Vec<char> = "ghijkl".chars().collect();
/// assert_eq!(levenshtein_bounded(&a, &b, 3), None);
/// assert_eq!(levenshtein_bounded(&a, &a, 0), Some(0));
/// ```
#[inline]
#[must_use]
pub fn levenshtein_bounded<T: PartialEq>(a: &[T], b: &[T], max_distance: usize) -> Option<usize> {
    levenshtein_bounded_by(a, b, max_distance, |x, y| x == y)
}

/// Bounded Levenshtein distance with a custom element equality.
#[must_use]
pub fn levenshtein_bounded_by<T, F>(
    a: &[T],
    b: &[T],
    max_distance: usize,
    mut eq: F,
) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    // Early exit if length difference exceeds threshold
    if a.len().abs_diff(b.len()) > max_distance {
        return None;
    }

    let trimmed = trim_common_ends_by(a, b, &mut eq);
    let (source, target) = (trimmed.source, trimmed.target);

    if source.is_empty() || target.is_empty() {
        let dist = source.len().max(target.len());
        return (dist <= max_distance).then_some(dist);
    }

    if source.len() < target.len() {
        dp_distance_bounded(target, source, max_distance, |x: &T, y: &T| eq(y, x))
    } else {
        dp_distance_bounded(source, target, max_distance, eq)
    }
}

/// Levenshtein distance using Myers' bit-parallel algorithm.
///
/// Same result as [`levenshtein`], faster when the shorter input has at most
/// 64 elements after trimming. Requires hashable elements for the pattern
/// match masks.
#[must_use]
pub fn levenshtein_bit_parallel<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
    let trimmed = trim_common_ends_by(a, b, |x, y| x == y);
    let (source, target) = (trimmed.source, trimmed.target);

    // Shorter input is the pattern: O(⌈m/64⌉n)
    if source.len() <= target.len() {
        myers_64(source, target)
    } else {
        myers_64(target, source)
    }
}

/// Levenshtein distance with custom per-operation costs.
///
/// # Errors
/// Returns `InvalidCost` if any cost is negative or not finite.
///
/// # Example
/// ```
/// use seqsim::algorithms::costs::EditCosts;
/// use seqsim::algorithms::levenshtein::levenshtein_weighted;
///
/// let costs = EditCosts::new().with_deletion(2.0);
/// assert_eq!(levenshtein_weighted(&[1, 2, 3], &[], &costs), Ok(6.0));
/// ```
pub fn levenshtein_weighted<T: PartialEq>(a: &[T], b: &[T], costs: &EditCosts) -> Result<f64> {
    levenshtein_weighted_by(a, b, costs, |x, y| x == y)
}

/// Weighted Levenshtein distance with a custom element equality.
pub fn levenshtein_weighted_by<T, F>(a: &[T], b: &[T], costs: &EditCosts, mut eq: F) -> Result<f64>
where
    F: FnMut(&T, &T) -> bool,
{
    costs.validate()?;

    let trimmed = trim_common_ends_by(a, b, &mut eq);
    let (source, target) = (trimmed.source, trimmed.target);

    // Keep the shorter input on the row axis; deleting from one side is
    // inserting into the other, so the costs are mirrored as well.
    let distance = if source.len() < target.len() {
        weighted_dp_distance(target, source, &costs.mirrored(), |x: &T, y: &T| eq(y, x))
    } else {
        weighted_dp_distance(source, target, costs, eq)
    };

    Ok(distance)
}

/// Normalized similarity (0.0 to 1.0): `1 - distance / max(len)`
#[inline]
#[must_use]
pub fn levenshtein_similarity<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    normalized_similarity(levenshtein(a, b), a.len(), b.len())
}

/// Normalized distance (0.0 to 1.0): `distance / max(len)`
#[inline]
#[must_use]
pub fn levenshtein_normalized_distance<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    normalized_distance(levenshtein(a, b), a.len(), b.len())
}
