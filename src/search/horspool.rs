//! Boyer-Moore-Horspool search
//!
//! Compares each window right to left and, on completion or mismatch, shifts
//! by the bad-element distance of the window's last element.
//!
//! # Complexity
//! - Time: O(n * m) worst case, sublinear on typical inputs
//! - Space: O(distinct pattern elements) for the skip table

use ahash::AHashMap;
use std::hash::Hash;

/// Bad-element skip table: every pattern element except the last maps to its
/// distance from the end of the pattern (rightmost occurrence wins). Elements
/// absent from the table shift by the full pattern length.
fn skip_table<T: Eq + Hash>(pattern: &[T]) -> AHashMap<&T, usize> {
    let m = pattern.len();
    let mut table = AHashMap::with_capacity(m);
    for (i, element) in pattern[..m - 1].iter().enumerate() {
        table.insert(element, m - 1 - i);
    }
    table
}

/// Start indices of every occurrence of `pattern` in `text`.
///
/// ```
/// use seqsim::search::horspool::boyer_moore_horspool;
///
/// let text: Vec<char> = "here is a simple example".chars().collect();
/// let pattern: Vec<char> = "example".chars().collect();
/// assert_eq!(boyer_moore_horspool(&text, &pattern), vec![17]);
/// ```
#[must_use]
pub fn boyer_moore_horspool<T: Eq + Hash>(text: &[T], pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let n = text.len();
    if m == 0 || m > n {
        return Vec::new();
    }

    let skip = skip_table(pattern);
    let mut matches = Vec::new();
    let mut pos = 0usize;

    while pos + m <= n {
        let window = &text[pos..pos + m];
        if window.iter().rev().zip(pattern.iter().rev()).all(|(x, y)| x == y) {
            matches.push(pos);
        }
        pos += skip.get(&window[m - 1]).copied().unwrap_or(m);
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::naive_search;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_skip_table() {
        let pattern = chars("abcab");
        let table = skip_table(&pattern);
        assert_eq!(table.get(&'a'), Some(&1));
        assert_eq!(table.get(&'b'), Some(&3));
        assert_eq!(table.get(&'c'), Some(&2));
        assert_eq!(table.get(&'z'), None);
    }

    #[test]
    fn test_horspool_search() {
        let text = chars("ABABDABACDABABCABAB");
        assert_eq!(boyer_moore_horspool(&text, &chars("ABABCABAB")), vec![10]);
    }

    #[test]
    fn test_horspool_overlapping() {
        assert_eq!(boyer_moore_horspool(&chars("aaaa"), &chars("aa")), vec![0, 1, 2]);
        assert_eq!(boyer_moore_horspool(&chars("abababa"), &chars("aba")), vec![0, 2, 4]);
    }

    #[test]
    fn test_horspool_edge_cases() {
        assert!(boyer_moore_horspool(&chars("abc"), &[]).is_empty());
        assert!(boyer_moore_horspool(&chars("ab"), &chars("abc")).is_empty());
        assert_eq!(boyer_moore_horspool(&chars("x"), &chars("x")), vec![0]);
    }

    #[test]
    fn test_horspool_matches_naive() {
        let text: Vec<u8> = b"GCATCGCAGAGAGTATACAGTACGGCAGAGAG".to_vec();
        for pattern in [&b"GCAGAGAG"[..], b"AG", b"TAC", b"G", b"CCC"] {
            assert_eq!(
                boyer_moore_horspool(&text, pattern),
                naive_search(&text, pattern)
            );
        }
    }
}
