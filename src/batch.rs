//! One-to-many and many-to-many scoring
//!
//! Inputs of at least [`PARALLEL_THRESHOLD`] items are scored on rayon's
//! global pool; smaller inputs stay on the calling thread. Both paths return
//! identical results in input order.

use crate::algorithms::metric::Metric;
use crate::error::{validate_unit_interval, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::Hash;

/// Minimum number of items before scoring switches to rayon.
pub const PARALLEL_THRESHOLD: usize = 100;

/// A scored candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Position of the candidate in the input
    pub index: usize,
    /// Similarity to the query in [0.0, 1.0]
    pub score: f64,
}

/// Higher score first, then lower index.
fn rank(a: &Match, b: &Match) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then(a.index.cmp(&b.index))
}

/// Similarity of `query` to every candidate, in candidate order.
///
/// # Errors
/// Returns the first error reported by the metric (invalid configuration,
/// Hamming length mismatch).
///
/// ```
/// use seqsim::algorithms::metric::Metric;
/// use seqsim::batch::score_all;
///
/// let query: Vec<char> = "apple".chars().collect();
/// let candidates: Vec<Vec<char>> = ["apple", "apply", "grape"]
///     .iter()
///     .map(|s| s.chars().collect())
///     .collect();
/// let scores = score_all(&Metric::Levenshtein, &query, &candidates).unwrap();
/// assert_eq!(scores[0], 1.0);
/// assert!(scores[1] > scores[2]);
/// ```
pub fn score_all<T, C>(metric: &Metric, query: &[T], candidates: &[C]) -> Result<Vec<f64>>
where
    T: Eq + Hash + Sync,
    C: AsRef<[T]> + Sync,
{
    metric.validate()?;

    if candidates.len() >= PARALLEL_THRESHOLD {
        log::debug!(
            "{}: scoring {} candidates in parallel",
            metric,
            candidates.len()
        );
        candidates
            .par_iter()
            .map(|c| metric.similarity(query, c.as_ref()))
            .collect()
    } else {
        log::trace!(
            "{}: scoring {} candidates sequentially",
            metric,
            candidates.len()
        );
        candidates
            .iter()
            .map(|c| metric.similarity(query, c.as_ref()))
            .collect()
    }
}

/// The candidate most similar to `query` with a score of at least
/// `min_similarity`. Ties go to the earliest candidate.
///
/// # Errors
/// Returns `InvalidParameter` if `min_similarity` is outside [0.0, 1.0], or
/// any error reported by the metric.
pub fn best_match<T, C>(
    metric: &Metric,
    query: &[T],
    candidates: &[C],
    min_similarity: f64,
) -> Result<Option<Match>>
where
    T: Eq + Hash + Sync,
    C: AsRef<[T]> + Sync,
{
    validate_unit_interval(min_similarity, "min_similarity")?;

    let best = score_all(metric, query, candidates)?
        .into_iter()
        .enumerate()
        .map(|(index, score)| Match { index, score })
        .filter(|m| m.score >= min_similarity)
        .min_by(rank);

    Ok(best)
}

/// Up to `limit` candidates scoring at least `min_similarity`, best first.
///
/// # Errors
/// Returns `InvalidParameter` if `min_similarity` is outside [0.0, 1.0], or
/// any error reported by the metric.
pub fn top_matches<T, C>(
    metric: &Metric,
    query: &[T],
    candidates: &[C],
    limit: usize,
    min_similarity: f64,
) -> Result<Vec<Match>>
where
    T: Eq + Hash + Sync,
    C: AsRef<[T]> + Sync,
{
    validate_unit_interval(min_similarity, "min_similarity")?;

    let mut matches: Vec<Match> = score_all(metric, query, candidates)?
        .into_iter()
        .enumerate()
        .map(|(index, score)| Match { index, score })
        .filter(|m| m.score >= min_similarity)
        .collect();

    matches.sort_by(rank);
    matches.truncate(limit);
    Ok(matches)
}

/// `matrix[i][j]` is the similarity of `items[i]` to `items[j]`.
///
/// # Errors
/// Returns the first error reported by the metric.
pub fn similarity_matrix<T, C>(metric: &Metric, items: &[C]) -> Result<Vec<Vec<f64>>>
where
    T: Eq + Hash + Sync,
    C: AsRef<[T]> + Sync,
{
    metric.validate()?;

    let row = |a: &C| -> Result<Vec<f64>> {
        items
            .iter()
            .map(|b| metric.similarity(a.as_ref(), b.as_ref()))
            .collect()
    };

    if items.len() >= PARALLEL_THRESHOLD {
        log::debug!(
            "{}: building {}x{} matrix in parallel",
            metric,
            items.len(),
            items.len()
        );
        items.par_iter().map(row).collect()
    } else {
        items.iter().map(row).collect()
    }
}
