//! Knuth-Morris-Pratt search
//!
//! # Complexity
//! - Time: O(n + m)
//! - Space: O(m) for the failure table

/// Failure table for `pattern`, with `table[0] = -1` and length `m + 1`.
///
/// `table[i]` is where matching resumes in the pattern after a mismatch at
/// `pattern[i]`; `-1` means advance past the current text element.
/// `table[m]` is the resume position after a full match.
///
/// ```
/// use seqsim::search::kmp::kmp_table;
///
/// let pattern: Vec<char> = "ABCDABD".chars().collect();
/// assert_eq!(kmp_table(&pattern), vec![-1, 0, 0, 0, -1, 0, 2, 0]);
/// ```
#[inline]
#[must_use]
pub fn kmp_table<T: PartialEq>(pattern: &[T]) -> Vec<isize> {
    kmp_table_by(pattern, |x, y| x == y)
}

/// Failure table with a custom element equality.
#[must_use]
pub fn kmp_table_by<T, F>(pattern: &[T], mut eq: F) -> Vec<isize>
where
    F: FnMut(&T, &T) -> bool,
{
    let m = pattern.len();
    let mut table = vec![0isize; m + 1];
    table[0] = -1;
    if m == 0 {
        return table;
    }

    let mut pos = 1usize;
    let mut cnd = 0isize;

    while pos < m {
        if eq(&pattern[pos], &pattern[cnd as usize]) {
            table[pos] = table[cnd as usize];
        } else {
            table[pos] = cnd;
            while cnd >= 0 && !eq(&pattern[pos], &pattern[cnd as usize]) {
                cnd = table[cnd as usize];
            }
        }
        pos += 1;
        cnd += 1;
    }

    table[m] = cnd;
    table
}

/// Start indices of every occurrence of `pattern` in `text`.
///
/// ```
/// use seqsim::search::kmp::knuth_morris_pratt;
///
/// let text: Vec<char> = "ABABDABACDABABCABAB".chars().collect();
/// let pattern: Vec<char> = "ABABCABAB".chars().collect();
/// assert_eq!(knuth_morris_pratt(&text, &pattern), vec![10]);
/// ```
#[inline]
#[must_use]
pub fn knuth_morris_pratt<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    knuth_morris_pratt_by(text, pattern, |x, y| x == y)
}

/// KMP search with a custom equality. The comparer receives
/// `(text_element, pattern_element)`, except while building the table where
/// both come from the pattern.
#[must_use]
pub fn knuth_morris_pratt_by<T, F>(text: &[T], pattern: &[T], mut eq: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let m = pattern.len();
    if m == 0 || m > text.len() {
        return Vec::new();
    }

    let table = kmp_table_by(pattern, &mut eq);
    let mut matches = Vec::new();

    let mut j = 0usize; // position in text
    let mut k = 0isize; // position in pattern

    while j < text.len() {
        if eq(&text[j], &pattern[k as usize]) {
            j += 1;
            k += 1;
            if k as usize == m {
                matches.push(j - m);
                k = table[m];
            }
        } else {
            k = table[k as usize];
            if k < 0 {
                j += 1;
                k += 1;
            }
        }
    }

    matches
}
