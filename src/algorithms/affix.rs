//! Common prefix/suffix trimming
//!
//! Edit distances, OSA, true Damerau-Levenshtein and LCS are all unchanged
//! by removing a shared prefix and suffix, so the O(n*m) algorithms run on
//! the trimmed middle only.

/// Two sequences with their shared prefix and suffix removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trimmed<'a, T> {
    /// Number of leading elements shared by both inputs
    pub prefix: usize,
    /// Number of trailing elements shared by both inputs (never overlaps `prefix`)
    pub suffix: usize,
    /// Source without the shared prefix and suffix
    pub source: &'a [T],
    /// Target without the shared prefix and suffix
    pub target: &'a [T],
}

impl<'a, T> Trimmed<'a, T> {
    /// Total number of elements removed from each input
    #[inline]
    #[must_use]
    pub fn trimmed_len(&self) -> usize {
        self.prefix + self.suffix
    }

    /// True when either side is empty after trimming
    #[inline]
    #[must_use]
    pub fn has_empty_side(&self) -> bool {
        self.source.is_empty() || self.target.is_empty()
    }
}

/// Length of the longest shared prefix.
#[inline]
#[must_use]
pub fn common_prefix_len_by<T, F>(a: &[T], b: &[T], mut eq: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    a.iter().zip(b).take_while(|(x, y)| eq(*x, *y)).count()
}

/// Length of the longest shared suffix.
#[inline]
#[must_use]
pub fn common_suffix_len_by<T, F>(a: &[T], b: &[T], mut eq: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| eq(*x, *y))
        .count()
}

/// Strip the shared prefix and suffix using `PartialEq`.
///
/// # Example
/// ```
/// use seqsim::algorithms::affix::trim_common_ends;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "knitting".chars().collect();
/// let trimmed = trim_common_ends(&a, &b);
/// assert_eq!(trimmed.prefix, 1);
/// assert_eq!(trimmed.suffix, 0);
/// assert_eq!(trimmed.source.len(), 5);
/// ```
#[inline]
#[must_use]
pub fn trim_common_ends<'a, T: PartialEq>(a: &'a [T], b: &'a [T]) -> Trimmed<'a, T> {
    trim_common_ends_by(a, b, |x, y| x == y)
}

/// Strip the shared prefix and suffix using a custom equality.
#[must_use]
pub fn trim_common_ends_by<'a, T, F>(a: &'a [T], b: &'a [T], mut eq: F) -> Trimmed<'a, T>
where
    F: FnMut(&T, &T) -> bool,
{
    let prefix = common_prefix_len_by(a, b, &mut eq);
    let a_rest = &a[prefix..];
    let b_rest = &b[prefix..];
    let suffix = common_suffix_len_by(a_rest, b_rest, &mut eq);

    Trimmed {
        prefix,
        suffix,
        source: &a_rest[..a_rest.len() - suffix],
        target: &b_rest[..b_rest.len() - suffix],
    }
}
