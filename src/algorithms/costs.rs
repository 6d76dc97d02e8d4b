//! Per-operation costs for the weighted edit-distance variants

use crate::error::{validate_cost, Result};
use serde::{Deserialize, Serialize};

/// Costs of the elementary edit operations.
///
/// Substituting an element with an equal one is always free. Transposition is
/// only used by OSA and true Damerau-Levenshtein. For true Damerau-Levenshtein
/// the result is only guaranteed optimal when
/// `2 * transposition >= insertion + deletion`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditCosts {
    pub deletion: f64,
    pub insertion: f64,
    pub substitution: f64,
    pub transposition: f64,
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            deletion: 1.0,
            insertion: 1.0,
            substitution: 1.0,
            transposition: 1.0,
        }
    }
}

impl EditCosts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_deletion(mut self, cost: f64) -> Self {
        self.deletion = cost;
        self
    }

    #[must_use]
    pub fn with_insertion(mut self, cost: f64) -> Self {
        self.insertion = cost;
        self
    }

    #[must_use]
    pub fn with_substitution(mut self, cost: f64) -> Self {
        self.substitution = cost;
        self
    }

    #[must_use]
    pub fn with_transposition(mut self, cost: f64) -> Self {
        self.transposition = cost;
        self
    }

    /// Check that every cost is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        validate_cost(self.deletion, "deletion")?;
        validate_cost(self.insertion, "insertion")?;
        validate_cost(self.substitution, "substitution")?;
        validate_cost(self.transposition, "transposition")
    }

    /// Same costs seen from the other side: deleting from the source is
    /// inserting into the target.
    #[inline]
    #[must_use]
    pub(crate) fn mirrored(&self) -> Self {
        Self {
            deletion: self.insertion,
            insertion: self.deletion,
            ..*self
        }
    }
}
