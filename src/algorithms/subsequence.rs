//! Single-sequence subsequence problems
//!
//! - Longest strictly increasing subsequence in O(n log n)
//! - Longest alternating (zig-zag) subsequence in O(n²)
//!
//! Both come in three flavours: natural `Ord`, a custom comparer, and an
//! index-returning form for callers that need positions rather than values.

use std::cmp::Ordering;

/// Longest strictly increasing subsequence.
///
/// Among subsequences of maximal length, the one ending in the smallest
/// possible tail is returned.
///
/// ```
/// use seqsim::algorithms::subsequence::longest_increasing_subsequence;
///
/// assert_eq!(longest_increasing_subsequence(&[3, 10, 2, 1, 20]), vec![3, 10, 20]);
/// ```
#[inline]
#[must_use]
pub fn longest_increasing_subsequence<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    longest_increasing_subsequence_by(seq, T::cmp)
}

/// Longest increasing subsequence under a custom ordering.
#[must_use]
pub fn longest_increasing_subsequence_by<T, F>(seq: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    longest_increasing_subsequence_indices_by(seq, cmp)
        .into_iter()
        .map(|i| seq[i].clone())
        .collect()
}

/// Indices of the longest increasing subsequence, in ascending order.
///
/// Patience sorting: `tails[k]` holds the index of the smallest element that
/// ends an increasing subsequence of length `k + 1`, and `prev` links each
/// element to its predecessor.
#[must_use]
pub fn longest_increasing_subsequence_indices_by<T, F>(seq: &[T], mut cmp: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut tails: Vec<usize> = Vec::new();
    let mut prev: Vec<Option<usize>> = vec![None; seq.len()];

    for (i, item) in seq.iter().enumerate() {
        let pos = tails.partition_point(|&t| cmp(&seq[t], item) == Ordering::Less);

        if pos > 0 {
            prev[i] = Some(tails[pos - 1]);
        }
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }

    let mut indices = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        indices.push(i);
        cursor = prev[i];
    }
    indices.reverse();
    indices
}

/// Longest subsequence whose consecutive differences strictly alternate in sign.
///
/// Equal neighbours never count as a step. A single element is alternating.
///
/// ```
/// use seqsim::algorithms::subsequence::longest_alternating_subsequence;
///
/// assert_eq!(longest_alternating_subsequence(&[1, 5, 4]), vec![1, 5, 4]);
/// assert_eq!(longest_alternating_subsequence(&[1, 2, 3, 4]).len(), 2);
/// ```
#[inline]
#[must_use]
pub fn longest_alternating_subsequence<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    longest_alternating_subsequence_by(seq, T::cmp)
}

/// Longest alternating subsequence under a custom ordering.
#[must_use]
pub fn longest_alternating_subsequence_by<T, F>(seq: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    longest_alternating_subsequence_indices_by(seq, cmp)
        .into_iter()
        .map(|i| seq[i].clone())
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Up,
    Down,
}

/// Indices of the longest alternating subsequence, in ascending order.
///
/// `up[i]` / `down[i]` are the lengths of the longest alternating
/// subsequences ending at `i` whose last step rises / falls. Each keeps its
/// own predecessor, so reconstruction always alternates.
#[must_use]
pub fn longest_alternating_subsequence_indices_by<T, F>(seq: &[T], mut cmp: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = seq.len();
    if n == 0 {
        return Vec::new();
    }

    let mut up = vec![1usize; n];
    let mut down = vec![1usize; n];
    let mut up_prev: Vec<Option<usize>> = vec![None; n];
    let mut down_prev: Vec<Option<usize>> = vec![None; n];

    for i in 1..n {
        for j in 0..i {
            match cmp(&seq[j], &seq[i]) {
                Ordering::Less if down[j] + 1 > up[i] => {
                    up[i] = down[j] + 1;
                    up_prev[i] = Some(j);
                }
                Ordering::Greater if up[j] + 1 > down[i] => {
                    down[i] = up[j] + 1;
                    down_prev[i] = Some(j);
                }
                _ => {}
            }
        }
    }

    let mut best = 0;
    for i in 1..n {
        if up[i].max(down[i]) > up[best].max(down[best]) {
            best = i;
        }
    }

    let mut step = if up[best] >= down[best] {
        Step::Up
    } else {
        Step::Down
    };
    let mut indices = Vec::with_capacity(up[best].max(down[best]));
    let mut cursor = Some(best);
    while let Some(i) = cursor {
        indices.push(i);
        let (next, flipped) = match step {
            Step::Up => (up_prev[i], Step::Down),
            Step::Down => (down_prev[i], Step::Up),
        };
        cursor = next;
        step = flipped;
    }
    indices.reverse();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_alternating(values: &[i32]) -> bool {
        values
            .windows(3)
            .all(|w| (w[1] - w[0]).signum() * (w[2] - w[1]).signum() == -1)
            && values.windows(2).all(|w| w[0] != w[1])
    }

    #[test]
    fn test_lis_classic() {
        let seq = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];
        assert_eq!(
            longest_increasing_subsequence(&seq),
            vec![0, 2, 6, 9, 11, 15]
        );
    }

    #[test]
    fn test_lis_strict() {
        assert_eq!(longest_increasing_subsequence(&[5, 5, 5]), vec![5]);
        assert_eq!(longest_increasing_subsequence(&[3, 10, 2, 1, 20]), vec![3, 10, 20]);
        assert!(longest_increasing_subsequence::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_lis_custom_order() {
        // Decreasing by reversing the comparer
        let seq = [3, 10, 2, 1, 20];
        let lds = longest_increasing_subsequence_by(&seq, |a, b| b.cmp(a));
        assert_eq!(lds, vec![10, 2, 1]);
    }

    #[test]
    fn test_lis_indices() {
        let seq = ["b", "a", "c"];
        let indices = longest_increasing_subsequence_indices_by(&seq, |a, b| a.cmp(b));
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_las_basic() {
        assert_eq!(longest_alternating_subsequence(&[1, 5, 4]), vec![1, 5, 4]);
        assert_eq!(longest_alternating_subsequence(&[1, 2, 3, 4]), vec![1, 2]);
        assert_eq!(longest_alternating_subsequence(&[7]), vec![7]);
        assert!(longest_alternating_subsequence::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_las_long() {
        let seq = [1, 17, 5, 10, 13, 15, 10, 5, 16, 8];
        let las = longest_alternating_subsequence(&seq);
        assert_eq!(las.len(), 7);
        assert!(is_alternating(&las));
    }

    #[test]
    fn test_las_equal_elements() {
        let las = longest_alternating_subsequence(&[4, 4, 4]);
        assert_eq!(las, vec![4]);
    }

    #[test]
    fn test_las_indices_ascending() {
        let seq = [10, 22, 9, 33, 49, 50, 31, 60];
        let indices = longest_alternating_subsequence_indices_by(&seq, |a, b| a.cmp(b));
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        let values: Vec<i32> = indices.iter().map(|&i| seq[i]).collect();
        assert!(is_alternating(&values));
        assert_eq!(values.len(), 6);
    }
}
