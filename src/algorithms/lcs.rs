//! Longest Common Subsequence (LCS) and related problems
//!
//! Finds the longest subsequence present in both sequences, the longest
//! contiguous run they share, and the shortest sequence containing both.
//!
//! # Complexity
//! - Time: O(m*n) for every operation
//! - Space: O(min(m,n)) for lengths, O(m*n) when a sequence is materialized

use super::affix::trim_common_ends_by;
use super::Similarity;
use smallvec::SmallVec;

/// LCS-based similarity calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lcs;

impl Lcs {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: PartialEq> Similarity<T> for Lcs {
    fn similarity(&self, a: &[T], b: &[T]) -> f64 {
        lcs_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "lcs"
    }
}

/// Two rolling rows filled from the end of both sequences. `b` is the row axis.
fn lcs_rows<T, F>(a: &[T], b: &[T], mut eq: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let n = b.len();
    let mut next: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut curr: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for x in a.iter().rev() {
        curr[n] = 0;
        for j in (0..n).rev() {
            curr[j] = if eq(x, &b[j]) {
                next[j + 1] + 1
            } else {
                next[j].max(curr[j + 1])
            };
        }
        std::mem::swap(&mut next, &mut curr);
    }

    next[0]
}

/// Length of the Longest Common Subsequence.
///
/// ```
/// use seqsim::algorithms::lcs::lcs_length;
///
/// let a: Vec<char> = "ABCBDAB".chars().collect();
/// let b: Vec<char> = "BDCABA".chars().collect();
/// assert_eq!(lcs_length(&a, &b), 4);
/// ```
#[inline]
#[must_use]
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    lcs_length_by(a, b, |x, y| x == y)
}

/// LCS length with a custom element equality.
#[must_use]
pub fn lcs_length_by<T, F>(a: &[T], b: &[T], mut eq: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let trimmed = trim_common_ends_by(a, b, &mut eq);
    let (source, target) = (trimmed.source, trimmed.target);

    if trimmed.has_empty_side() {
        return trimmed.trimmed_len();
    }

    let middle = if source.len() < target.len() {
        lcs_rows(target, source, |x: &T, y: &T| eq(y, x))
    } else {
        lcs_rows(source, target, eq)
    };

    middle + trimmed.trimmed_len()
}

/// Insert/delete-only edit distance: `n + m - 2 * lcs_length`.
#[inline]
#[must_use]
pub fn lcs_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.len() + b.len() - 2 * lcs_length(a, b)
}

/// LCS-based similarity (0.0 to 1.0).
/// Uses the formula: 2 * LCS_length / (len(a) + len(b))
#[must_use]
pub fn lcs_similarity<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    (2.0 * lcs_length(a, b) as f64) / total as f64
}

/// `lcs_distance / (len(a) + len(b))`, 0.0 when both are empty.
#[must_use]
pub fn lcs_normalized_distance<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    lcs_distance(a, b) as f64 / total as f64
}

/// One Longest Common Subsequence, materialized.
///
/// When several exist, ties are broken towards advancing in `a`.
#[inline]
#[must_use]
pub fn longest_common_subsequence<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    longest_common_subsequence_by(a, b, |x, y| x == y)
}

/// Materialized LCS with a custom element equality. Elements are taken from `a`.
#[must_use]
pub fn longest_common_subsequence_by<T, F>(a: &[T], b: &[T], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let trimmed = trim_common_ends_by(a, b, &mut eq);
    let (source, target) = (trimmed.source, trimmed.target);
    let m = source.len();
    let n = target.len();

    // d[i][j] = LCS length of source[i..] and target[j..]
    let mut d: Vec<Vec<usize>> = vec![vec![0; n + 1]; m + 1];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            d[i][j] = if eq(&source[i], &target[j]) {
                d[i + 1][j + 1] + 1
            } else {
                d[i + 1][j].max(d[i][j + 1])
            };
        }
    }

    let mut result = Vec::with_capacity(d[0][0] + trimmed.trimmed_len());
    result.extend_from_slice(&a[..trimmed.prefix]);

    let (mut i, mut j) = (0, 0);
    while i < m && j < n {
        if eq(&source[i], &target[j]) {
            result.push(source[i].clone());
            i += 1;
            j += 1;
        } else if d[i + 1][j] >= d[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }

    result.extend_from_slice(&a[a.len() - trimmed.suffix..]);
    result
}

/// Length of the longest contiguous run shared by both sequences.
#[inline]
#[must_use]
pub fn longest_common_substring_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    longest_common_substring_length_by(a, b, |x, y| x == y)
}

/// Longest common substring length with a custom element equality.
#[must_use]
pub fn longest_common_substring_length_by<T, F>(a: &[T], b: &[T], eq: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    longest_common_substring_by(a, b, eq).len()
}

/// Longest contiguous run shared by both sequences, as a slice of `a`.
///
/// The earliest run in `a` wins ties.
///
/// ```
/// use seqsim::algorithms::lcs::longest_common_substring;
///
/// let a: Vec<char> = "abcdef".chars().collect();
/// let b: Vec<char> = "zbcdf".chars().collect();
/// assert_eq!(longest_common_substring(&a, &b), &['b', 'c', 'd']);
/// ```
#[inline]
#[must_use]
pub fn longest_common_substring<'a, T: PartialEq>(a: &'a [T], b: &[T]) -> &'a [T] {
    longest_common_substring_by(a, b, |x, y| x == y)
}

/// Longest common substring with a custom element equality.
#[must_use]
pub fn longest_common_substring_by<'a, T, F>(a: &'a [T], b: &[T], mut eq: F) -> &'a [T]
where
    F: FnMut(&T, &T) -> bool,
{
    let n = b.len();
    if a.is_empty() || n == 0 {
        return &a[..0];
    }

    let mut prev: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut curr: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut max_len = 0;
    let mut end_idx = 0;

    for (i, x) in a.iter().enumerate() {
        curr[0] = 0;
        for j in 1..=n {
            if eq(x, &b[j - 1]) {
                curr[j] = prev[j - 1] + 1;
                if curr[j] > max_len {
                    max_len = curr[j];
                    end_idx = i + 1;
                }
            } else {
                curr[j] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    &a[end_idx - max_len..end_idx]
}

/// Length of the shortest sequence having both inputs as subsequences.
#[inline]
#[must_use]
pub fn shortest_common_supersequence_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.len() + b.len() - lcs_length(a, b)
}

/// Shortest sequence having both `a` and `b` as subsequences.
///
/// Shared elements appear once. When both sides lead to an equally short
/// result, the element from `b` is placed last.
///
/// ```
/// use seqsim::algorithms::lcs::shortest_common_supersequence;
///
/// let a: Vec<char> = "abac".chars().collect();
/// let b: Vec<char> = "cab".chars().collect();
/// let scs: String = shortest_common_supersequence(&a, &b).into_iter().collect();
/// assert_eq!(scs, "cabac");
/// ```
#[inline]
#[must_use]
pub fn shortest_common_supersequence<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    shortest_common_supersequence_by(a, b, |x, y| x == y)
}

/// Shortest common supersequence with a custom element equality.
#[must_use]
pub fn shortest_common_supersequence_by<T, F>(a: &[T], b: &[T], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let m = a.len();
    let n = b.len();

    // d[i][j] = SCS length of a[..i] and b[..j]
    let mut d: Vec<Vec<usize>> = vec![vec![0; n + 1]; m + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        d[0][j] = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            d[i][j] = if eq(&a[i - 1], &b[j - 1]) {
                d[i - 1][j - 1] + 1
            } else {
                d[i - 1][j].min(d[i][j - 1]) + 1
            };
        }
    }

    let mut result = Vec::with_capacity(d[m][n]);
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        if eq(&a[i - 1], &b[j - 1]) {
            result.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if d[i - 1][j] < d[i][j - 1] {
            result.push(a[i - 1].clone());
            i -= 1;
        } else {
            result.push(b[j - 1].clone());
            j -= 1;
        }
    }
    result.extend(a[..i].iter().rev().cloned());
    result.extend(b[..j].iter().rev().cloned());

    result.reverse();
    result
}
