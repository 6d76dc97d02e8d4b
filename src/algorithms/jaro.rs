//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for names and short sequences.
//! Jaro-Winkler gives extra weight to a common prefix.

use super::Similarity;
use crate::error::{validate_unit_interval, Result, SimilarityError};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// Public API
// ============================================================================

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m*n) for matching elements
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro;

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<T: PartialEq> Similarity<T> for Jaro {
    fn similarity(&self, a: &[T], b: &[T]) -> f64 {
        jaro_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Configuration for Jaro-Winkler similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaroWinklerConfig {
    /// The prefix boost is applied only when the Jaro score exceeds this value
    pub boost_threshold: f64,
    /// Maximum prefix length to consider (typically 4)
    pub prefix_size: usize,
    /// Prefix weight (typically 0.1, max 0.25)
    pub prefix_weight: f64,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl JaroWinklerConfig {
    /// Threshold 0.1, prefix size 4, prefix weight 0.1.
    pub const DEFAULT: Self = Self {
        boost_threshold: 0.1,
        prefix_size: 4,
        prefix_weight: 0.1,
    };

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_boost_threshold(mut self, threshold: f64) -> Self {
        self.boost_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_prefix_size(mut self, size: usize) -> Self {
        self.prefix_size = size;
        self
    }

    #[must_use]
    pub fn with_prefix_weight(mut self, weight: f64) -> Self {
        self.prefix_weight = weight;
        self
    }

    /// Check every parameter range.
    ///
    /// The boosted score stays within 1.0 only while
    /// `prefix_weight * prefix_size <= 1.0`.
    pub fn validate(&self) -> Result<()> {
        validate_unit_interval(self.boost_threshold, "boost_threshold")?;

        if self.prefix_size == 0 {
            return Err(SimilarityError::InvalidParameter {
                name: "prefix_size",
                reason: "must be positive".to_string(),
            });
        }

        if !self.prefix_weight.is_finite() || !(0.0..=0.25).contains(&self.prefix_weight) {
            return Err(SimilarityError::InvalidParameter {
                name: "prefix_weight",
                reason: format!("must be in range [0.0, 0.25], got {}", self.prefix_weight),
            });
        }

        if self.prefix_weight * self.prefix_size as f64 > 1.0 {
            return Err(SimilarityError::InvalidParameter {
                name: "prefix_weight",
                reason: format!(
                    "prefix_weight * prefix_size must not exceed 1.0, got {} * {}",
                    self.prefix_weight, self.prefix_size
                ),
            });
        }

        Ok(())
    }
}

/// Jaro-Winkler similarity calculator
///
/// Extends Jaro similarity by giving extra weight to common prefixes.
/// Best for names and short identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JaroWinkler {
    config: JaroWinklerConfig,
}

impl JaroWinkler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a validated configuration
    pub fn with_config(config: JaroWinklerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get current configuration
    #[must_use]
    pub fn config(&self) -> JaroWinklerConfig {
        self.config
    }
}

impl<T: PartialEq> Similarity<T> for JaroWinkler {
    fn similarity(&self, a: &[T], b: &[T]) -> f64 {
        winkler_boost(a, b, &self.config, |x, y| x == y)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

/// Jaro similarity between two sequences.
/// Returns a value between 0.0 and 1.0.
///
/// ```
/// use seqsim::algorithms::jaro::jaro_similarity;
///
/// let a: Vec<char> = "MARTHA".chars().collect();
/// let b: Vec<char> = "MARHTA".chars().collect();
/// assert!((jaro_similarity(&a, &b) - 0.9444).abs() < 1e-4);
/// ```
#[inline]
#[must_use]
pub fn jaro_similarity<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    jaro_similarity_by(a, b, |x, y| x == y)
}

/// Jaro similarity with a custom element equality.
#[must_use]
pub fn jaro_similarity_by<T, F>(a: &[T], b: &[T], mut eq: F) -> f64
where
    F: FnMut(&T, &T) -> bool,
{
    let a_len = a.len();
    let b_len = b.len();

    if a_len == 0 && b_len == 0 {
        return 1.0;
    }
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    // Match window
    let match_distance = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];

    let mut matches = 0usize;

    // Find matching elements
    for i in 0..a_len {
        let start = i.saturating_sub(match_distance);
        let end = (i + match_distance + 1).min(b_len);

        for j in start..end {
            if b_matched[j] || !eq(&a[i], &b[j]) {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Count transpositions: matched elements taken in order that disagree
    let mut transpositions = 0usize;
    let mut b_matched_positions = b_matched
        .iter()
        .enumerate()
        .filter_map(|(j, &matched)| matched.then_some(j));
    for i in (0..a_len).filter(|&i| a_matched[i]) {
        if let Some(k) = b_matched_positions.next() {
            if !eq(&a[i], &b[k]) {
                transpositions += 1;
            }
        }
    }

    let m = matches as f64;
    let t = transpositions as f64 / 2.0;
    (m / a_len as f64 + m / b_len as f64 + (m - t) / m) / 3.0
}

/// Distance version (1.0 - similarity)
#[inline]
#[must_use]
pub fn jaro_distance<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    1.0 - jaro_similarity(a, b)
}

/// Jaro score plus the Winkler prefix boost. The config is assumed valid.
fn winkler_boost<T, F>(a: &[T], b: &[T], config: &JaroWinklerConfig, mut eq: F) -> f64
where
    F: FnMut(&T, &T) -> bool,
{
    let jaro_sim = jaro_similarity_by(a, b, &mut eq);

    if jaro_sim <= config.boost_threshold {
        return jaro_sim;
    }

    let prefix_len = a
        .iter()
        .zip(b)
        .take(config.prefix_size)
        .take_while(|(x, y)| eq(*x, *y))
        .count();

    jaro_sim + config.prefix_weight * prefix_len as f64 * (1.0 - jaro_sim)
}

/// Jaro-Winkler similarity with default parameters
/// (threshold 0.1, prefix size 4, prefix weight 0.1).
///
/// ```
/// use seqsim::algorithms::jaro::jaro_winkler_similarity;
///
/// let a: Vec<char> = "MARTHA".chars().collect();
/// let b: Vec<char> = "MARHTA".chars().collect();
/// assert!((jaro_winkler_similarity(&a, &b) - 0.9611).abs() < 1e-4);
/// ```
#[inline]
#[must_use]
pub fn jaro_winkler_similarity<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    winkler_boost(a, b, &JaroWinklerConfig::default(), |x, y| x == y)
}

/// Jaro-Winkler similarity with custom parameters.
///
/// # Errors
/// Returns `InvalidParameter` if the configuration is out of range.
#[inline]
pub fn jaro_winkler_similarity_with<T: PartialEq>(
    a: &[T],
    b: &[T],
    config: &JaroWinklerConfig,
) -> Result<f64> {
    jaro_winkler_similarity_with_by(a, b, config, |x, y| x == y)
}

/// Jaro-Winkler similarity with custom parameters and element equality.
pub fn jaro_winkler_similarity_with_by<T, F>(
    a: &[T],
    b: &[T],
    config: &JaroWinklerConfig,
    eq: F,
) -> Result<f64>
where
    F: FnMut(&T, &T) -> bool,
{
    config.validate()?;
    Ok(winkler_boost(a, b, config, eq))
}

#[inline]
#[must_use]
pub fn jaro_winkler_distance<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    1.0 - jaro_winkler_similarity(a, b)
}
