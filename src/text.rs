//! String adapters
//!
//! Every algorithm in this crate works on `&[T]`. This module splits a `&str`
//! into comparison units (chars or extended grapheme clusters) and offers
//! the usual preprocessing steps applied before comparing text.

use crate::algorithms::metric::Metric;
use crate::error::{Result, SimilarityError};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// What counts as one element of a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextUnit {
    /// Unicode scalar values
    #[default]
    Char,
    /// Extended grapheme clusters, e.g. a family emoji or `e` + combining accent
    Grapheme,
}

/// Split `s` into units, each a subslice of `s`.
///
/// ```
/// use seqsim::text::{units, TextUnit};
///
/// let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
/// assert_eq!(units(family, TextUnit::Char).len(), 5);
/// assert_eq!(units(family, TextUnit::Grapheme).len(), 1);
/// ```
#[must_use]
pub fn units(s: &str, unit: TextUnit) -> SmallVec<[&str; 64]> {
    match unit {
        TextUnit::Char => s
            .char_indices()
            .map(|(i, c)| &s[i..i + c.len_utf8()])
            .collect(),
        TextUnit::Grapheme => s.graphemes(true).collect(),
    }
}

/// Normalization mode for string preprocessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Convert to lowercase only
    Lowercase,
    /// Apply Unicode NFKD normalization
    Nfkd,
    /// Remove ASCII punctuation characters
    RemovePunctuation,
    /// Remove all whitespace
    RemoveWhitespace,
    /// NFKD, lowercase, then strip punctuation and whitespace
    Strict,
}

impl FromStr for Normalization {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lowercase" => Ok(Normalization::Lowercase),
            "nfkd" | "unicode_nfkd" => Ok(Normalization::Nfkd),
            "remove_punctuation" => Ok(Normalization::RemovePunctuation),
            "remove_whitespace" => Ok(Normalization::RemoveWhitespace),
            "strict" => Ok(Normalization::Strict),
            _ => Err(SimilarityError::InvalidParameter {
                name: "normalization",
                reason: format!(
                    "unknown mode '{}', valid: lowercase, nfkd, remove_punctuation, remove_whitespace, strict",
                    s
                ),
            }),
        }
    }
}

/// Normalize a string according to the specified mode
#[must_use]
pub fn normalize(s: &str, mode: Normalization) -> String {
    match mode {
        Normalization::Lowercase => s.to_lowercase(),
        Normalization::Nfkd => s.nfkd().collect(),
        Normalization::RemovePunctuation => {
            s.chars().filter(|c| !c.is_ascii_punctuation()).collect()
        }
        Normalization::RemoveWhitespace => s.chars().filter(|c| !c.is_whitespace()).collect(),
        Normalization::Strict => s
            .nfkd()
            .collect::<String>()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_ascii_punctuation() && !c.is_whitespace())
            .collect(),
    }
}

/// Normalize both strings according to the specified mode
#[must_use]
pub fn normalize_pair(a: &str, b: &str, mode: Normalization) -> (String, String) {
    (normalize(a, mode), normalize(b, mode))
}

/// Score two strings with `metric`, splitting them into `unit`s first.
///
/// ```
/// use seqsim::algorithms::metric::Metric;
/// use seqsim::text::{similarity_str, TextUnit};
///
/// let score = similarity_str(&Metric::Levenshtein, "kitten", "sitting", TextUnit::Char).unwrap();
/// assert!((score - 4.0 / 7.0).abs() < 1e-9);
/// ```
///
/// # Errors
/// Propagates the metric's errors (invalid configuration, Hamming length mismatch).
pub fn similarity_str(metric: &Metric, a: &str, b: &str, unit: TextUnit) -> Result<f64> {
    let a_units = units(a, unit);
    let b_units = units(b, unit);
    metric.similarity(&a_units, &b_units)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_char_units() {
        let u = units("h\u{e9}llo", TextUnit::Char);
        assert_eq!(u.as_slice(), &["h", "\u{e9}", "l", "l", "o"]);
        assert!(units("", TextUnit::Grapheme).is_empty());
    }

    #[test]
    fn test_grapheme_units_combining_mark() {
        // "e" followed by a combining acute accent
        let s = "e\u{0301}x";
        assert_eq!(units(s, TextUnit::Char).len(), 3);
        assert_eq!(units(s, TextUnit::Grapheme).as_slice(), &["e\u{0301}", "x"]);
    }

    #[test]
    fn test_grapheme_levenshtein() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        let man = "\u{1F468}";
        let by_char = similarity_str(&Metric::Levenshtein, family, man, TextUnit::Char).unwrap();
        let by_grapheme =
            similarity_str(&Metric::Levenshtein, family, man, TextUnit::Grapheme).unwrap();
        assert!(approx_eq(by_char, 0.2));
        assert!(approx_eq(by_grapheme, 0.0));
    }

    #[test]
    fn test_nfkd_splits_graphemes_into_chars() {
        let decomposed = normalize("\u{e9}t\u{e9}", Normalization::Nfkd);
        assert_eq!(units(&decomposed, TextUnit::Char).len(), 5);
        assert_eq!(units(&decomposed, TextUnit::Grapheme).len(), 3);

        // A decomposed cluster is a different unit from its precomposed form
        let raw = similarity_str(
            &Metric::Levenshtein,
            &decomposed,
            "\u{e9}t\u{e9}",
            TextUnit::Grapheme,
        )
        .unwrap();
        assert!(approx_eq(raw, 1.0 / 3.0));
    }

    #[test]
    fn test_normalize_pair_before_scoring() {
        let (a, b) = normalize_pair("\u{e9}t\u{e9}", "e\u{301}te\u{301}", Normalization::Nfkd);
        assert_eq!(a, b);
        let score = similarity_str(&Metric::Levenshtein, &a, &b, TextUnit::Grapheme).unwrap();
        assert!(approx_eq(score, 1.0));
    }

    #[test]
    fn test_nfkd_decomposes() {
        assert_eq!(normalize("\u{e9}", Normalization::Nfkd), "e\u{0301}");
        assert_eq!(normalize("\u{fb01}", Normalization::Nfkd), "fi");
    }

    #[test]
    fn test_strict_equates_accent_forms() {
        let raw =
            similarity_str(&Metric::Levenshtein, "Caf\u{e9}!", "cafe\u{301}", TextUnit::Char)
                .unwrap();
        assert!(approx_eq(raw, 0.4));

        let (a, b) = normalize_pair("Caf\u{e9}!", "cafe\u{301}", Normalization::Strict);
        assert_eq!(a, "cafe\u{301}");
        let strict = similarity_str(&Metric::Levenshtein, &a, &b, TextUnit::Char).unwrap();
        assert!(approx_eq(strict, 1.0));
    }

    #[test]
    fn test_strict_expands_compatibility_forms() {
        assert_eq!(normalize("\u{fb01}le", Normalization::Strict), "file");
        assert_eq!(normalize("New\u{a0}York, NY", Normalization::Strict), "newyorkny");
    }

    #[test]
    fn test_only_ascii_punctuation_removed() {
        assert_eq!(
            normalize("\u{bf}Qu\u{e9}?", Normalization::RemovePunctuation),
            "\u{bf}Qu\u{e9}"
        );
        assert_eq!(
            normalize("New\u{a0}York", Normalization::RemoveWhitespace),
            "NewYork"
        );
    }

    #[test]
    fn test_parse_normalization() {
        assert_eq!("unicode_nfkd".parse::<Normalization>(), Ok(Normalization::Nfkd));
        assert_eq!(" Strict ".parse::<Normalization>(), Ok(Normalization::Strict));
        assert!("upper".parse::<Normalization>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let unit: TextUnit = serde_json::from_str(r#""grapheme""#).unwrap();
        assert_eq!(unit, TextUnit::Grapheme);
        let mode = serde_json::to_string(&Normalization::RemoveWhitespace).unwrap();
        assert_eq!(mode, r#""remove_whitespace""#);
    }
}
