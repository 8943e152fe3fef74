//! Ranked spelling suggestions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A spelling suggestion produced by ranking the candidate set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Probability of the word in the frequency table (0.0 to 1.0).
    pub probability: f64,
    /// Edit distance from the original word.
    pub distance: usize,
    /// Occurrence count of the word in the frequency table.
    pub frequency: u32,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, probability: f64, distance: usize, frequency: u32) -> Self {
        Suggestion {
            word,
            probability,
            distance,
            frequency,
        }
    }
}

impl Eq for Suggestion {}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher probabilities come first; equal probabilities resolve
        // alphabetically so ranking is deterministic
        other
            .probability
            .partial_cmp(&self.probability)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
