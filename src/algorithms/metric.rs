//! Runtime metric selection
//!
//! `Metric` names one similarity algorithm (plus its configuration) so that
//! host applications can pick the algorithm from a config file or a string.

use super::damerau::{damerau_levenshtein_similarity, optimal_string_alignment_similarity};
use super::hamming::hamming_similarity;
use super::jaro::{jaro_similarity, jaro_winkler_similarity_with, JaroWinklerConfig};
use super::lcs::lcs_similarity;
use super::levenshtein::levenshtein_similarity;
use super::set_similarity::{dice_coefficient, jaccard_index, overlap_coefficient};
use crate::error::{Result, SimilarityError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// A similarity algorithm and its parameters.
///
/// Serialized with an internal `kind` tag:
///
/// ```
/// use seqsim::algorithms::metric::Metric;
///
/// let metric: Metric = serde_json::from_str(r#"{"kind": "jaro_winkler", "prefix_size": 2}"#).unwrap();
/// assert_eq!(metric.name(), "jaro_winkler");
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// let lev: Metric = "levenshtein".parse().unwrap();
/// assert!((lev.similarity(&a, &b).unwrap() - 4.0 / 7.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Levenshtein,
    OptimalStringAlignment,
    DamerauLevenshtein,
    Lcs,
    Jaro,
    JaroWinkler(JaroWinklerConfig),
    Dice,
    Jaccard,
    Overlap,
    Hamming,
}

impl Metric {
    /// Every metric with default parameters.
    pub const ALL: [Metric; 10] = [
        Metric::Levenshtein,
        Metric::OptimalStringAlignment,
        Metric::DamerauLevenshtein,
        Metric::Lcs,
        Metric::Jaro,
        Metric::JaroWinkler(JaroWinklerConfig::DEFAULT),
        Metric::Dice,
        Metric::Jaccard,
        Metric::Overlap,
        Metric::Hamming,
    ];

    /// Canonical snake_case name, as accepted by `FromStr`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Levenshtein => "levenshtein",
            Metric::OptimalStringAlignment => "optimal_string_alignment",
            Metric::DamerauLevenshtein => "damerau_levenshtein",
            Metric::Lcs => "lcs",
            Metric::Jaro => "jaro",
            Metric::JaroWinkler(_) => "jaro_winkler",
            Metric::Dice => "dice",
            Metric::Jaccard => "jaccard",
            Metric::Overlap => "overlap",
            Metric::Hamming => "hamming",
        }
    }

    /// Check the embedded configuration, if any.
    pub fn validate(&self) -> Result<()> {
        match self {
            Metric::JaroWinkler(config) => config.validate(),
            _ => Ok(()),
        }
    }

    /// Similarity in [0.0, 1.0] under this metric.
    ///
    /// # Errors
    /// Returns `InvalidParameter` for an invalid configuration, and
    /// `LengthMismatch` for Hamming on unequal lengths.
    pub fn similarity<T: Eq + Hash>(&self, a: &[T], b: &[T]) -> Result<f64> {
        self.validate()?;

        let score = match self {
            Metric::Levenshtein => levenshtein_similarity(a, b),
            Metric::OptimalStringAlignment => optimal_string_alignment_similarity(a, b),
            Metric::DamerauLevenshtein => damerau_levenshtein_similarity(a, b),
            Metric::Lcs => lcs_similarity(a, b),
            Metric::Jaro => jaro_similarity(a, b),
            Metric::JaroWinkler(config) => jaro_winkler_similarity_with(a, b, config)?,
            Metric::Dice => dice_coefficient(a, b),
            Metric::Jaccard => jaccard_index(a, b),
            Metric::Overlap => overlap_coefficient(a, b),
            Metric::Hamming => hamming_similarity(a, b)?,
        };

        Ok(score)
    }

    /// `1.0 - similarity`.
    pub fn distance<T: Eq + Hash>(&self, a: &[T], b: &[T]) -> Result<f64> {
        self.similarity(a, b).map(|s| 1.0 - s)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = SimilarityError;

    /// Case-insensitive; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "levenshtein" | "lev" => Ok(Metric::Levenshtein),
            "optimal_string_alignment" | "osa" => Ok(Metric::OptimalStringAlignment),
            "damerau_levenshtein" | "damerau" => Ok(Metric::DamerauLevenshtein),
            "lcs" => Ok(Metric::Lcs),
            "jaro" => Ok(Metric::Jaro),
            "jaro_winkler" | "jw" => Ok(Metric::JaroWinkler(JaroWinklerConfig::default())),
            "dice" | "sorensen_dice" => Ok(Metric::Dice),
            "jaccard" => Ok(Metric::Jaccard),
            "overlap" => Ok(Metric::Overlap),
            "hamming" => Ok(Metric::Hamming),
            _ => Err(SimilarityError::UnknownMetric(s.to_string())),
        }
    }
}
