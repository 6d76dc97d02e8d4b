//! Tandem repeats via the Main-Lorentz algorithm
//!
//! A tandem repeat is a run `w w` of two equal adjacent halves. The sequence
//! is split in half; repeats inside each half are found recursively, and the
//! ones crossing the split are counted from Z-functions of the halves joined
//! by a separator that matches nothing.
//!
//! # Complexity
//! - Time: O(n log n) plus the size of the output
//! - Space: O(n) per recursion level

use super::borders::z_function_by;
use std::iter;
use std::ops::Range;

/// Every tandem repeat in `seq`, as `start..start + 2 * half_len`,
/// sorted by start then end. Each repeat is reported once.
///
/// ```
/// use seqsim::search::repetitions::main_lorentz;
///
/// let s: Vec<char> = "abaaba".chars().collect();
/// assert_eq!(main_lorentz(&s), vec![0..6, 2..4]);
/// ```
#[inline]
#[must_use]
pub fn main_lorentz<T: PartialEq>(seq: &[T]) -> Vec<Range<usize>> {
    main_lorentz_by(seq, |x, y| x == y)
}

/// Main-Lorentz with a custom element equality.
#[must_use]
pub fn main_lorentz_by<T, F>(seq: &[T], mut eq: F) -> Vec<Range<usize>>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut repeats = Vec::new();
    find_repetitions(seq, 0, &mut eq, &mut repeats);
    repeats.sort_by_key(|r| (r.start, r.end));
    repeats
}

/// Z-function over elements joined with `None` separators.
fn separated_z<T, F>(seq: &[Option<&T>], eq: &mut F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    z_function_by(seq, |x, y| match (x, y) {
        (Some(a), Some(b)) => eq(*a, *b),
        _ => false,
    })
}

#[inline]
fn z_at(z: &[usize], i: usize) -> usize {
    z.get(i).copied().unwrap_or(0)
}

fn find_repetitions<T, F>(seq: &[T], shift: usize, eq: &mut F, out: &mut Vec<Range<usize>>)
where
    F: FnMut(&T, &T) -> bool,
{
    let n = seq.len();
    if n <= 1 {
        return;
    }

    let nu = n / 2;
    let nv = n - nu;
    let (u, v) = seq.split_at(nu);

    find_repetitions(u, shift, eq, out);
    find_repetitions(v, shift + nu, eq, out);

    let ru: Vec<Option<&T>> = u.iter().rev().map(Some).collect();
    let fv: Vec<Option<&T>> = v.iter().map(Some).collect();

    let v_sep_u: Vec<Option<&T>> = fv
        .iter()
        .copied()
        .chain(iter::once(None))
        .chain(u.iter().map(Some))
        .collect();
    let ru_sep_rv: Vec<Option<&T>> = ru
        .iter()
        .copied()
        .chain(iter::once(None))
        .chain(v.iter().rev().map(Some))
        .collect();

    let z1 = separated_z(&ru, eq);
    let z2 = separated_z(&v_sep_u, eq);
    let z3 = separated_z(&ru_sep_rv, eq);
    let z4 = separated_z(&fv, eq);

    for center in 0..n {
        let left = center < nu;
        let (len, k1, k2) = if left {
            (
                nu - center,
                z_at(&z1, nu - center),
                z_at(&z2, nv + 1 + center),
            )
        } else {
            (
                center - nu + 1,
                z_at(&z3, nu + nv - (center - nu)),
                z_at(&z4, center - nu + 1),
            )
        };

        if k1 + k2 >= len {
            push_repeats(shift, left, center, len, k1, k2, out);
        }
    }
}

/// Emit every repeat of half-length `len` anchored at `center`.
fn push_repeats(
    shift: usize,
    left: bool,
    center: usize,
    len: usize,
    k1: usize,
    k2: usize,
    out: &mut Vec<Range<usize>>,
) {
    let lo = len.saturating_sub(k2).max(1);
    let hi = len.min(k1);

    for l1 in lo..=hi {
        if left && l1 == len {
            break;
        }
        let start = if left {
            center - l1
        } else {
            center + 1 - len - l1
        };
        out.push(shift + start..shift + start + 2 * len);
    }
}
