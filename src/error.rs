//! Error type shared by all fallible operations.
//!
//! Every check runs before any buffer is allocated, so a returned error
//! always means no work was done.

use thiserror::Error;

/// Errors returned by argument validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimilarityError {
    /// Operation is only defined for sequences of equal length (Hamming)
    #[error("Sequences must have equal length: source has {source_len} elements, target has {target_len}")]
    LengthMismatch { source_len: usize, target_len: usize },

    /// A per-operation cost is negative, NaN or infinite
    #[error("Cost '{name}' must be a finite, non-negative number, got {value}")]
    InvalidCost { name: &'static str, value: f64 },

    /// A numeric parameter is outside its valid range
    #[error("Parameter '{name}' is out of range: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Metric name could not be parsed
    #[error("Unknown metric: '{0}'. Valid metrics: levenshtein, optimal_string_alignment, damerau_levenshtein, lcs, jaro, jaro_winkler, dice, jaccard, overlap, hamming")]
    UnknownMetric(String),

    /// Input too long for an algorithm that needs an O(m*n) matrix
    #[error("Sequence length exceeds safe limit for O(m*n) algorithm: source={source_len}, target={target_len}, max={max_len}")]
    TooLong {
        source_len: usize,
        target_len: usize,
        max_len: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimilarityError>;

/// Validate that a similarity score or threshold is in [0.0, 1.0]
pub(crate) fn validate_unit_interval(value: f64, name: &'static str) -> Result<()> {
    if !value.is_finite() {
        return Err(SimilarityError::InvalidParameter {
            name,
            reason: format!("must be a finite number, got {}", value),
        });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(SimilarityError::InvalidParameter {
            name,
            reason: format!("must be in range [0.0, 1.0], got {}", value),
        });
    }
    Ok(())
}

/// Validate that a cost is finite and non-negative
pub(crate) fn validate_cost(value: f64, name: &'static str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimilarityError::InvalidCost { name, value });
    }
    Ok(())
}
