//! Pattern search and single-sequence structure
//!
//! The three searchers (`knuth_morris_pratt`, `boyer_moore_horspool`,
//! `rabin_karp`) agree exactly: every occurrence of the pattern, overlapping
//! ones included, in ascending order of start index. An empty pattern, or a
//! pattern longer than the text, has no occurrences.

pub mod borders;
pub mod horspool;
pub mod kmp;
pub mod rabin_karp;
pub mod repetitions;
pub mod rotation;

pub use borders::*;
pub use horspool::*;
pub use kmp::*;
pub use rabin_karp::*;
pub use repetitions::*;
pub use rotation::*;

/// Brute-force occurrence list used to cross-check the searchers.
#[cfg(test)]
pub(crate) fn naive_search<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}
