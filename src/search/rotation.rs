//! Lexicographically minimal rotation (Booth's algorithm)

use std::cmp::Ordering;

/// Start index of the lexicographically least rotation of `seq`.
///
/// Among equal least rotations (periodic input) the smallest index is
/// returned. Empty input yields 0.
///
/// ```
/// use seqsim::search::rotation::minimal_rotation;
///
/// let s: Vec<char> = "cabbage".chars().collect();
/// assert_eq!(minimal_rotation(&s), 1); // "abbagec"
/// ```
#[inline]
#[must_use]
pub fn minimal_rotation<T: Ord>(seq: &[T]) -> usize {
    minimal_rotation_by(seq, T::cmp)
}

/// Booth's algorithm under a custom ordering. O(n) time and space.
#[must_use]
pub fn minimal_rotation_by<T, F>(seq: &[T], mut cmp: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = seq.len();
    if n == 0 {
        return 0;
    }

    // Failure function over the doubled sequence, relative to candidate k
    let mut failure = vec![-1isize; 2 * n];
    let mut k = 0usize;

    for j in 1..2 * n {
        let current = &seq[j % n];
        let mut i = failure[j - k - 1];

        loop {
            let ord = cmp(current, &seq[(k as isize + i + 1) as usize % n]);
            if ord == Ordering::Equal {
                failure[j - k] = i + 1;
                break;
            }
            if i == -1 {
                if ord == Ordering::Less {
                    k = j;
                }
                failure[j - k] = -1;
                break;
            }
            if ord == Ordering::Less {
                k = j - i as usize - 1;
            }
            i = failure[i as usize];
        }
    }

    k % n
}

/// The least rotation itself.
#[must_use]
pub fn rotate_to_minimal<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    let start = minimal_rotation(seq);
    seq[start..].iter().chain(&seq[..start]).cloned().collect()
}
