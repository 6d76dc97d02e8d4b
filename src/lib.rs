//! seqsim - sequence similarity, edit distance and pattern search
//!
//! Every algorithm works on plain slices (`&[T]`), so the same code scores
//! strings, token lists, DNA reads or any other sequence of comparable
//! elements.
//!
//! # Features
//! - Edit distances: Levenshtein (bounded, weighted, bit-parallel), optimal
//!   string alignment, true Damerau-Levenshtein, Hamming
//! - Subsequences: LCS, longest common substring, shortest common
//!   supersequence, longest increasing and alternating subsequences
//! - Similarity scores: Jaro, Jaro-Winkler, Dice, Jaccard, overlap
//! - Pattern search: KMP, Boyer-Moore-Horspool, Rabin-Karp, Z-function,
//!   prefix-function, Main-Lorentz repetitions, minimal rotation
//! - `&str` adapters over chars or grapheme clusters
//! - Parallel batch scoring
//!
//! # Example
//!
//! ```
//! use seqsim::prelude::*;
//!
//! let a: Vec<char> = "kitten".chars().collect();
//! let b: Vec<char> = "sitting".chars().collect();
//! assert_eq!(levenshtein(&a, &b), 3);
//!
//! let text: Vec<char> = "abracadabra".chars().collect();
//! let pattern: Vec<char> = "abra".chars().collect();
//! assert_eq!(knuth_morris_pratt(&text, &pattern), vec![0, 7]);
//! ```

pub mod algorithms;
pub mod batch;
pub mod error;
pub mod search;
pub mod text;

pub use algorithms::{EditDistance, FallibleEditDistance, Metric, Similarity};
pub use error::{Result, SimilarityError};

/// The most commonly used functions and types.
pub mod prelude {
    pub use crate::algorithms::{
        damerau_levenshtein, hamming_distance, jaro_similarity, jaro_winkler_similarity,
        lcs_length, levenshtein, levenshtein_similarity, longest_common_subsequence,
        optimal_string_alignment, EditCosts, EditDistance, FallibleEditDistance,
        JaroWinklerConfig, Metric, Similarity,
    };
    pub use crate::batch::{best_match, score_all};
    pub use crate::error::{Result, SimilarityError};
    pub use crate::search::{boyer_moore_horspool, knuth_morris_pratt, rabin_karp};
    pub use crate::text::{similarity_str, Normalization, TextUnit};
}
