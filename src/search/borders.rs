//! Z-function and prefix-function (border array)
//!
//! Both run in O(n) and describe how a sequence overlaps with its own prefixes.

/// `z[i]` is the length of the longest run starting at `i` that matches a
/// prefix of `seq`. By convention `z[0] = 0`.
///
/// ```
/// use seqsim::search::borders::z_function;
///
/// let s: Vec<char> = "aaabaab".chars().collect();
/// assert_eq!(z_function(&s), vec![0, 2, 1, 0, 2, 1, 0]);
/// ```
#[inline]
#[must_use]
pub fn z_function<T: PartialEq>(seq: &[T]) -> Vec<usize> {
    z_function_by(seq, |x, y| x == y)
}

/// Z-function with a custom element equality.
#[must_use]
pub fn z_function_by<T, F>(seq: &[T], mut eq: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let n = seq.len();
    let mut z = vec![0usize; n];

    // [l, r) is the rightmost window known to match a prefix
    let (mut l, mut r) = (0usize, 0usize);

    for i in 1..n {
        if i < r {
            z[i] = (r - i).min(z[i - l]);
        }
        while i + z[i] < n && eq(&seq[z[i]], &seq[i + z[i]]) {
            z[i] += 1;
        }
        if i + z[i] > r {
            l = i;
            r = i + z[i];
        }
    }

    z
}

/// `pi[i]` is the length of the longest proper prefix of `seq[..=i]` that is
/// also a suffix of it.
///
/// ```
/// use seqsim::search::borders::prefix_function;
///
/// let s: Vec<char> = "aabaaab".chars().collect();
/// assert_eq!(prefix_function(&s), vec![0, 1, 0, 1, 2, 2, 3]);
/// ```
#[inline]
#[must_use]
pub fn prefix_function<T: PartialEq>(seq: &[T]) -> Vec<usize> {
    prefix_function_by(seq, |x, y| x == y)
}

/// Prefix-function with a custom element equality.
#[must_use]
pub fn prefix_function_by<T, F>(seq: &[T], mut eq: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let n = seq.len();
    let mut pi = vec![0usize; n];

    for i in 1..n {
        let mut k = pi[i - 1];
        while k > 0 && !eq(&seq[i], &seq[k]) {
            k = pi[k - 1];
        }
        if eq(&seq[i], &seq[k]) {
            k += 1;
        }
        pi[i] = k;
    }

    pi
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Direct definition of z[i], quadratic.
    fn z_reference(s: &[char]) -> Vec<usize> {
        (0..s.len())
            .map(|i| {
                if i == 0 {
                    0
                } else {
                    s[i..].iter().zip(s).take_while(|(x, y)| x == y).count()
                }
            })
            .collect()
    }

    #[test]
    fn test_z_function() {
        assert_eq!(z_function(&chars("aaaaa")), vec![0, 4, 3, 2, 1]);
        assert_eq!(z_function(&chars("abacaba")), vec![0, 0, 1, 0, 3, 0, 1]);
        assert!(z_function::<char>(&[]).is_empty());
        assert_eq!(z_function(&chars("x")), vec![0]);
    }

    #[test]
    fn test_z_function_against_definition() {
        for s in ["abcabcabc", "aabxaabxcaabxaabxay", "zzzzyzzz", "abcdef"] {
            let s = chars(s);
            assert_eq!(z_function(&s), z_reference(&s));
        }
    }

    #[test]
    fn test_prefix_function() {
        assert_eq!(prefix_function(&chars("abcabcd")), vec![0, 0, 0, 1, 2, 3, 0]);
        assert!(prefix_function::<char>(&[]).is_empty());
        assert_eq!(prefix_function(&[7, 7, 7]), vec![0, 1, 2]);
    }

    #[test]
    fn test_custom_comparer() {
        let s = chars("aAaA");
        let z = z_function_by(&s, |x, y| x.eq_ignore_ascii_case(y));
        assert_eq!(z, vec![0, 3, 2, 1]);
        let pi = prefix_function_by(&s, |x, y| x.eq_ignore_ascii_case(y));
        assert_eq!(pi, vec![0, 1, 2, 3]);
    }
}
