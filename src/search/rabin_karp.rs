//! Rabin-Karp search with verified matches
//!
//! Elements are first hashed to `u64` with a fixed-seed hasher, then combined
//! into a polynomial rolling hash modulo the Mersenne prime `2^61 - 1`. Prefix
//! hashes of the text give each window's hash in O(1). A hash hit is always
//! confirmed element by element, so a collision costs time but never yields a
//! false match.

use crate::error::{Result, SimilarityError};
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

const MODULUS: u64 = (1 << 61) - 1;

/// Default polynomial base.
pub const DEFAULT_BASE: u64 = 1_000_003;

#[inline]
fn mul_mod(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) % MODULUS as u128) as u64
}

#[inline]
fn add_mod(a: u64, b: u64) -> u64 {
    (a + b) % MODULUS
}

#[inline]
fn sub_mod(a: u64, b: u64) -> u64 {
    (a + MODULUS - b) % MODULUS
}

/// Rabin-Karp configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RabinKarp {
    /// Polynomial base, in `[2, 2^61 - 1)`
    pub base: u64,
}

impl Default for RabinKarp {
    fn default() -> Self {
        Self { base: DEFAULT_BASE }
    }
}

impl RabinKarp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base(base: u64) -> Self {
        Self { base }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base < 2 || self.base >= MODULUS {
            return Err(SimilarityError::InvalidParameter {
                name: "base",
                reason: format!("must be in range [2, 2^61 - 1), got {}", self.base),
            });
        }
        Ok(())
    }

    /// Start indices of every occurrence of `pattern` in `text`.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if the base is out of range.
    pub fn find_all<T: Eq + Hash>(&self, text: &[T], pattern: &[T]) -> Result<Vec<usize>> {
        self.validate()?;
        Ok(self.search(text, pattern))
    }

    /// Search with an already validated base.
    fn search<T: Eq + Hash>(&self, text: &[T], pattern: &[T]) -> Vec<usize> {
        let m = pattern.len();
        let n = text.len();
        if m == 0 || m > n {
            return Vec::new();
        }

        let hasher = RandomState::with_seeds(
            0x243f_6a88_85a3_08d3,
            0x1319_8a2e_0370_7344,
            0xa409_3822_299f_31d0,
            0x082e_fa98_ec4e_6c89,
        );
        let element_hash = |x: &T| hasher.hash_one(x) % MODULUS;

        // prefix[i] = hash of text[..i]
        let mut prefix = Vec::with_capacity(n + 1);
        prefix.push(0u64);
        for x in text {
            let last = prefix[prefix.len() - 1];
            prefix.push(add_mod(mul_mod(last, self.base), element_hash(x)));
        }

        let pattern_hash = pattern
            .iter()
            .fold(0u64, |h, x| add_mod(mul_mod(h, self.base), element_hash(x)));

        let mut power = 1u64;
        for _ in 0..m {
            power = mul_mod(power, self.base);
        }

        let mut matches = Vec::new();
        for start in 0..=n - m {
            let window_hash = sub_mod(prefix[start + m], mul_mod(prefix[start], power));
            if window_hash != pattern_hash {
                continue;
            }
            if text[start..start + m] == *pattern {
                matches.push(start);
            } else {
                log::debug!("rabin-karp: rejected hash collision at index {}", start);
            }
        }

        matches
    }
}

/// Rabin-Karp search with the default base.
///
/// ```
/// use seqsim::search::rabin_karp::rabin_karp;
///
/// let text: Vec<char> = "abracadabra".chars().collect();
/// let pattern: Vec<char> = "abra".chars().collect();
/// assert_eq!(rabin_karp(&text, &pattern), vec![0, 7]);
/// ```
#[must_use]
pub fn rabin_karp<T: Eq + Hash>(text: &[T], pattern: &[T]) -> Vec<usize> {
    RabinKarp::default().search(text, pattern)
}
