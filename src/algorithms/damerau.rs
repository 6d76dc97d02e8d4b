//! Damerau-Levenshtein distance implementations
//!
//! Extends Levenshtein with transposition operations. Two variants:
//!
//! - **Optimal String Alignment** (restricted Damerau-Levenshtein): adjacent
//!   transpositions, but a transposed pair is never edited again. Runs in
//!   three rolling rows. Not a metric: the triangle inequality can fail.
//! - **True Damerau-Levenshtein** (Lowrance-Wagner): transpositions across
//!   arbitrary gaps. Needs the full `(m+2)×(n+2)` matrix and a last-seen map
//!   keyed by element, so elements must be hashable.
//!
//! # Length Limits
//!
//! The true variant allocates O(m*n) memory. `damerau_levenshtein_checked`
//! refuses inputs whose trimmed length exceeds [`MAX_QUADRATIC_LEN`].

use super::affix::trim_common_ends_by;
use super::costs::EditCosts;
use super::{normalized_distance, normalized_similarity, EditDistance, Similarity};
use crate::error::{Result, SimilarityError};
use ahash::AHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

/// Maximum sequence length accepted by `damerau_levenshtein_checked`.
pub const MAX_QUADRATIC_LEN: usize = 10_000;

// ============================================================================
// Optimal String Alignment
// ============================================================================

/// OSA distance calculator
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(min(m,n)) with three rolling rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimalStringAlignment {
    /// Maximum distance for early termination
    pub max_distance: Option<usize>,
}

impl OptimalStringAlignment {
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
            Some(max_d) => optimal_string_alignment_bounded(a, b, max_d),
            None => Some(optimal_string_alignment(a, b)),
        }
    }
}

impl<T: PartialEq> EditDistance<T> for OptimalStringAlignment {
    fn distance(&self, a: &[T], b: &[T]) -> usize {
        match self.max_distance {
            Some(max_d) => {
                optimal_string_alignment_bounded(a, b, max_d).unwrap_or(max_d.saturating_add(1))
            }
            None => optimal_string_alignment(a, b),
        }
    }

    fn name(&self) -> &'static str {
        "optimal_string_alignment"
    }
}

impl<T: PartialEq> Similarity<T> for OptimalStringAlignment {
    fn similarity(&self, a: &[T], b: &[T]) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        "optimal_string_alignment"
    }
}

/// Three-row OSA DP. `b` is the row axis.
fn osa_rows<T, F>(a: &[T], b: &[T], mut eq: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let m = a.len();
    let n = b.len();

    let mut prev2_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut prev_row: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(!eq(&a[i - 1], &b[j - 1]));

            let mut cell = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            if i > 1 && j > 1 && eq(&a[i - 1], &b[j - 2]) && eq(&a[i - 2], &b[j - 1]) {
                cell = cell.min(prev2_row[j - 2] + 1);
            }

            curr_row[j] = cell;
        }

        std::mem::swap(&mut prev2_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Three-row OSA DP that stops once every cell in a row exceeds `max_distance`.
fn osa_rows_bounded<T, F>(a: &[T], b: &[T], max_distance: usize, mut eq: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let m = a.len();
    let n = b.len();

    let mut prev2_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut prev_row: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;
        let mut row_min = i;

        for j in 1..=n {
            let cost = usize::from(!eq(&a[i - 1], &b[j - 1]));

            let mut cell = (prev_row[j] + 1)
                .min(curr_row[j - 1] + 1)
                .min(prev_row[j - 1] + cost);

            if i > 1 && j > 1 && eq(&a[i - 1], &b[j - 2]) && eq(&a[i - 2], &b[j - 1]) {
                cell = cell.min(prev2_row[j - 2] + 1);
            }

            curr_row[j] = cell;
            row_min = row_min.min(cell);
        }

        if row_min > max_distance {
            return None;
        }

        std::mem::swap(&mut prev2_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let result = prev_row[n];
    (result <= max_distance).then_some(result)
}

/// Three-row OSA DP with per-operation costs. `a` is the source.
fn weighted_osa_rows<T, F>(a: &[T], b: &[T], costs: &EditCosts, mut eq: F) -> f64
where
    F: FnMut(&T, &T) -> bool,
{
    let m = a.len();
    let n = b.len();

    let mut prev2_row: SmallVec<[f64; 64]> = smallvec::smallvec![0.0; n + 1];
    let mut prev_row: SmallVec<[f64; 64]> = (0..=n).map(|j| j as f64 * costs.insertion).collect();
    let mut curr_row: SmallVec<[f64; 64]> = smallvec::smallvec![0.0; n + 1];

    for i in 1..=m {
        curr_row[0] = i as f64 * costs.deletion;

        for j in 1..=n {
            let substitution = if eq(&a[i - 1], &b[j - 1]) {
                0.0
            } else {
                costs.substitution
            };

            let mut cell = (prev_row[j] + costs.deletion)
                .min(curr_row[j - 1] + costs.insertion)
                .min(prev_row[j - 1] + substitution);

            if i > 1 && j > 1 && eq(&a[i - 1], &b[j - 2]) && eq(&a[i - 2], &b[j - 1]) {
                cell = cell.min(prev2_row[j - 2] + costs.transposition);
            }

            curr_row[j] = cell;
        }

        std::mem::swap(&mut prev2_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Optimal string alignment distance (restricted Damerau-Levenshtein).
///
/// Example where OSA differs from true Damerau-Levenshtein:
/// "CA" -> "ABC": OSA = 3, true DL = 2 (transpose CA->AC, insert B).
///
/// ```
/// use seqsim::algorithms::damerau::optimal_string_alignment;
///
/// let a: Vec<char> = "ca".chars().collect();
/// let b: Vec<char> = "abc".chars().collect();
/// assert_eq!(optimal_string_alignment(&a, &b), 3);
/// ```
#[inline]
#[must_use]
pub fn optimal_string_alignment<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    optimal_string_alignment_by(a, b, |x, y| x == y)
}

/// OSA distance with a custom element equality.
#[must_use]
pub fn optimal_string_alignment_by<T, F>(a: &[T], b: &[T], mut eq: F) -> usize
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
        osa_rows(target, source, |x: &T, y: &T| eq(y, x))
    } else {
        osa_rows(source, target, eq)
    }
}

/// OSA distance with a max threshold.
///
/// Returns `None` if distance exceeds `max_distance` (early termination).
#[inline]
#[must_use]
pub fn optimal_string_alignment_bounded<T: PartialEq>(
    a: &[T],
    b: &[T],
    max_distance: usize,
) -> Option<usize> {
    optimal_string_alignment_bounded_by(a, b, max_distance, |x, y| x == y)
}

/// Bounded OSA distance with a custom element equality.
#[must_use]
pub fn optimal_string_alignment_bounded_by<T, F>(
    a: &[T],
    b: &[T],
    max_distance: usize,
    mut eq: F,
) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
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
        osa_rows_bounded(target, source, max_distance, |x: &T, y: &T| eq(y, x))
    } else {
        osa_rows_bounded(source, target, max_distance, eq)
    }
}

/// OSA distance with custom per-operation costs.
///
/// # Errors
/// Returns `InvalidCost` if any cost is negative or not finite.
pub fn optimal_string_alignment_weighted<T: PartialEq>(
    a: &[T],
    b: &[T],
    costs: &EditCosts,
) -> Result<f64> {
    optimal_string_alignment_weighted_by(a, b, costs, |x, y| x == y)
}

/// Weighted OSA distance with a custom element equality.
pub fn optimal_string_alignment_weighted_by<T, F>(
    a: &[T],
    b: &[T],
    costs: &EditCosts,
    mut eq: F,
) -> Result<f64>
where
    F: FnMut(&T, &T) -> bool,
{
    costs.validate()?;

    let trimmed = trim_common_ends_by(a, b, &mut eq);
    let (source, target) = (trimmed.source, trimmed.target);

    let distance = if source.len() < target.len() {
        weighted_osa_rows(target, source, &costs.mirrored(), |x: &T, y: &T| eq(y, x))
    } else {
        weighted_osa_rows(source, target, costs, eq)
    };

    Ok(distance)
}

/// Normalized similarity (0.0 to 1.0) using OSA.
#[inline]
#[must_use]
pub fn optimal_string_alignment_similarity<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    normalized_similarity(optimal_string_alignment(a, b), a.len(), b.len())
}

/// Normalized distance (0.0 to 1.0) using OSA.
#[inline]
#[must_use]
pub fn optimal_string_alignment_normalized_distance<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    normalized_distance(optimal_string_alignment(a, b), a.len(), b.len())
}

// ============================================================================
// True Damerau-Levenshtein
// ============================================================================

/// True Damerau-Levenshtein distance calculator
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(m*n) for the full matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein;

impl DamerauLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: Eq + Hash> EditDistance<T> for DamerauLevenshtein {
    fn distance(&self, a: &[T], b: &[T]) -> usize {
        damerau_levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}

impl<T: Eq + Hash> Similarity<T> for DamerauLevenshtein {
    fn similarity(&self, a: &[T], b: &[T]) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}

/// Lowrance-Wagner DP over non-empty inputs.
fn true_damerau_matrix<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();
    let max_dist = m + n;

    log::debug!(
        "true Damerau-Levenshtein: allocating {}x{} matrix",
        m + 2,
        n + 2
    );

    // Last row (1-based) in which each element of `a` was seen
    let mut last_row: AHashMap<&T, usize> = AHashMap::new();

    // DP matrix with extra sentinel row and column
    let mut d: Vec<Vec<usize>> = vec![vec![0; n + 2]; m + 2];

    d[0][0] = max_dist;
    for i in 0..=m {
        d[i + 1][0] = max_dist;
        d[i + 1][1] = i;
    }
    for j in 0..=n {
        d[0][j + 1] = max_dist;
        d[1][j + 1] = j;
    }

    for i in 1..=m {
        let mut db = 0usize;

        for j in 1..=n {
            let i1 = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let j1 = db;

            let cost = if a[i - 1] == b[j - 1] {
                db = j;
                0
            } else {
                1
            };

            d[i + 1][j + 1] = (d[i][j] + cost) // substitution
                .min(d[i + 1][j] + 1) // insertion
                .min(d[i][j + 1] + 1) // deletion
                .min(d[i1][j1] + (i - i1 - 1) + 1 + (j - j1 - 1)); // transposition
        }

        last_row.insert(&a[i - 1], i);
    }

    d[m + 1][n + 1]
}

/// Lowrance-Wagner DP with per-operation costs. Handles empty inputs.
fn weighted_true_damerau_matrix<T: Eq + Hash>(a: &[T], b: &[T], costs: &EditCosts) -> f64 {
    let m = a.len();
    let n = b.len();

    let mut last_row: AHashMap<&T, usize> = AHashMap::new();
    let mut d: Vec<Vec<f64>> = vec![vec![0.0; n + 2]; m + 2];

    d[0][0] = f64::INFINITY;
    for i in 0..=m {
        d[i + 1][0] = f64::INFINITY;
        d[i + 1][1] = i as f64 * costs.deletion;
    }
    for j in 0..=n {
        d[0][j + 1] = f64::INFINITY;
        d[1][j + 1] = j as f64 * costs.insertion;
    }

    for i in 1..=m {
        let mut db = 0usize;

        for j in 1..=n {
            let i1 = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let j1 = db;

            let substitution = if a[i - 1] == b[j - 1] {
                db = j;
                0.0
            } else {
                costs.substitution
            };

            let transposition = d[i1][j1]
                + (i - i1 - 1) as f64 * costs.deletion
                + costs.transposition
                + (j - j1 - 1) as f64 * costs.insertion;

            d[i + 1][j + 1] = (d[i][j] + substitution)
                .min(d[i + 1][j] + costs.insertion)
                .min(d[i][j + 1] + costs.deletion)
                .min(transposition);
        }

        last_row.insert(&a[i - 1], i);
    }

    d[m + 1][n + 1]
}

/// True Damerau-Levenshtein distance, allowing transpositions across
/// arbitrary gaps (a transposed pair may be edited further).
///
/// ```
/// use seqsim::algorithms::damerau::damerau_levenshtein;
///
/// let a: Vec<char> = "ca".chars().collect();
/// let b: Vec<char> = "abc".chars().collect();
/// assert_eq!(damerau_levenshtein(&a, &b), 2);
/// ```
#[must_use]
pub fn damerau_levenshtein<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
    let trimmed = trim_common_ends_by(a, b, |x, y| x == y);
    let (source, target) = (trimmed.source, trimmed.target);

    if source.is_empty() {
        return target.len();
    }
    if target.is_empty() {
        return source.len();
    }

    true_damerau_matrix(source, target)
}

/// True Damerau-Levenshtein comparing elements through a derived key.
///
/// Two elements are equal when their keys are equal, e.g. case-folded chars.
#[must_use]
pub fn damerau_levenshtein_by_key<T, K, F>(a: &[T], b: &[T], mut key: F) -> usize
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let a_keys: Vec<K> = a.iter().map(&mut key).collect();
    let b_keys: Vec<K> = b.iter().map(&mut key).collect();
    damerau_levenshtein(&a_keys, &b_keys)
}

/// True Damerau-Levenshtein with explicit error handling for long inputs.
///
/// # Errors
///
/// Returns `TooLong` if either input, after trimming the common prefix and
/// suffix, exceeds [`MAX_QUADRATIC_LEN`] elements.
///
/// ```
/// use seqsim::algorithms::damerau::damerau_levenshtein_checked;
///
/// let long = vec!['a'; 15_000];
/// let test: Vec<char> = "test".chars().collect();
/// assert!(damerau_levenshtein_checked(&long, &test).is_err());
/// ```
pub fn damerau_levenshtein_checked<T: Eq + Hash>(a: &[T], b: &[T]) -> Result<usize> {
    let trimmed = trim_common_ends_by(a, b, |x, y| x == y);
    let (source, target) = (trimmed.source, trimmed.target);

    if source.is_empty() {
        return Ok(target.len());
    }
    if target.is_empty() {
        return Ok(source.len());
    }

    if source.len() > MAX_QUADRATIC_LEN || target.len() > MAX_QUADRATIC_LEN {
        return Err(SimilarityError::TooLong {
            source_len: source.len(),
            target_len: target.len(),
            max_len: MAX_QUADRATIC_LEN,
        });
    }

    Ok(true_damerau_matrix(source, target))
}

/// True Damerau-Levenshtein with custom per-operation costs.
///
/// The result is optimal when `2 * transposition >= insertion + deletion`.
///
/// # Errors
/// Returns `InvalidCost` if any cost is negative or not finite.
pub fn damerau_levenshtein_weighted<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    costs: &EditCosts,
) -> Result<f64> {
    costs.validate()?;
    Ok(weighted_true_damerau_matrix(a, b, costs))
}

/// Normalized similarity (0.0 to 1.0) using true Damerau-Levenshtein.
#[inline]
#[must_use]
pub fn damerau_levenshtein_similarity<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    normalized_similarity(damerau_levenshtein(a, b), a.len(), b.len())
}

/// Normalized distance (0.0 to 1.0) using true Damerau-Levenshtein.
#[inline]
#[must_use]
pub fn damerau_levenshtein_normalized_distance<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    normalized_distance(damerau_levenshtein(a, b), a.len(), b.len())
}
