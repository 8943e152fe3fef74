//! The spelling corrector: candidate selection and probability ranking.

use std::cmp::Ordering;
use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{OrthosError, Result};
use crate::spelling::distance::osa_distance;
use crate::spelling::edits::EditGenerator;
use crate::spelling::frequency::FrequencyTable;
use crate::spelling::suggest::Suggestion;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Alphabet used for replacement and insertion edits.
    pub alphabet: String,
    /// Maximum input word length, in characters.
    ///
    /// The two-edit expansion grows roughly as O((26·L)²) in the word length
    /// L. When a limit is set, longer inputs are rejected with a
    /// resource-exhausted error instead of paying that cost. `None` (the
    /// default) accepts any input.
    pub max_word_len: Option<usize>,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            alphabet: "abcdefghijklmnopqrstuvwxyz".to_string(),
            max_word_len: None,
        }
    }
}

/// A single-word spelling corrector.
///
/// Holds an immutable [`FrequencyTable`] and proposes the most probable
/// intended word for a misspelled token. Candidate words are drawn from a
/// strict fallback cascade over edit distances (0, 1, 2, then the word
/// itself), encoding the prior that fewer edits mean higher likelihood;
/// frequency is only consulted to rank candidates within the winning stage.
///
/// The corrector has no interior mutability, so one instance can serve many
/// threads concurrently.
pub struct Corrector {
    table: FrequencyTable,
    edits: EditGenerator,
    config: CorrectorConfig,
}

impl Corrector {
    /// Create a corrector over the given frequency table.
    pub fn new(table: FrequencyTable) -> Self {
        Self::with_config(table, CorrectorConfig::default())
    }

    /// Create a corrector with custom configuration.
    pub fn with_config(table: FrequencyTable, config: CorrectorConfig) -> Self {
        let edits = EditGenerator::with_alphabet(&config.alphabet);
        Corrector {
            table,
            edits,
            config,
        }
    }

    /// Get the underlying frequency table.
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Check whether a word is already correctly spelled.
    pub fn is_correct(&self, word: &str) -> bool {
        self.table.contains(word)
    }

    /// Compute the most probable spelling correction for `word`.
    ///
    /// The input is lowercased before correction, matching the table's key
    /// invariant. Words already in the table are returned unchanged; a word
    /// with no known candidate within two edits is returned as-is. When
    /// several candidates share the maximum probability, the
    /// lexicographically smallest is returned, so results are reproducible
    /// across runs and platforms.
    ///
    /// # Errors
    ///
    /// Returns a resource-exhausted error if the input exceeds the
    /// configured [`CorrectorConfig::max_word_len`]; with the default
    /// configuration every input produces a result.
    pub fn correct(&self, word: &str) -> Result<String> {
        let word = word.to_lowercase();
        self.check_length(&word)?;

        let best = self
            .candidates(&word)
            .into_iter()
            .max_by(|a, b| self.rank(a, b))
            .unwrap_or(word);
        Ok(best)
    }

    /// Correct many words in parallel over the shared table.
    pub fn correct_batch(&self, words: &[String]) -> Result<Vec<String>> {
        words.par_iter().map(|word| self.correct(word)).collect()
    }

    /// Generate the candidate set for `word`.
    ///
    /// A strict fallback cascade, short-circuiting at the first non-empty
    /// stage: the word itself if known, then known words one edit away, then
    /// known words two edits away, then the word itself uncorrected. The
    /// result is never empty.
    pub fn candidates(&self, word: &str) -> HashSet<String> {
        let word = word.to_lowercase();

        if self.table.contains(&word) {
            return HashSet::from([word]);
        }

        let one_edit = self.known(self.edits.edits1(&word));
        if !one_edit.is_empty() {
            return one_edit;
        }

        let two_edits = self.edits.known_edits2(&word, &self.table);
        if !two_edits.is_empty() {
            return two_edits;
        }

        HashSet::from([word])
    }

    /// Rank the candidate set for `word`, best first.
    ///
    /// Returns at most `limit` suggestions ordered by descending probability
    /// (ties alphabetical), each carrying its edit distance from the input.
    ///
    /// # Errors
    ///
    /// Same length-guard semantics as [`Corrector::correct`].
    pub fn suggest(&self, word: &str, limit: usize) -> Result<Vec<Suggestion>> {
        let word = word.to_lowercase();
        self.check_length(&word)?;

        let mut suggestions: Vec<Suggestion> = self
            .candidates(&word)
            .into_iter()
            .map(|candidate| {
                let probability = self.table.probability(&candidate);
                let distance = osa_distance(&word, &candidate);
                let frequency = self.table.frequency(&candidate);
                Suggestion::new(candidate, probability, distance, frequency)
            })
            .collect();

        suggestions.sort();
        suggestions.truncate(limit);
        Ok(suggestions)
    }

    /// The subset of `words` present in the frequency table.
    fn known(&self, words: impl IntoIterator<Item = String>) -> HashSet<String> {
        words
            .into_iter()
            .filter(|word| self.table.contains(word))
            .collect()
    }

    /// Probability order with a deterministic alphabetical tie-break.
    ///
    /// Under `max_by`, equal probabilities make the lexicographically
    /// smaller candidate win.
    fn rank(&self, a: &str, b: &str) -> Ordering {
        self.table
            .probability(a)
            .partial_cmp(&self.table.probability(b))
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.cmp(a))
    }

    fn check_length(&self, word: &str) -> Result<()> {
        if let Some(limit) = self.config.max_word_len {
            let len = word.chars().count();
            if len > limit {
                return Err(OrthosError::resource_exhausted(format!(
                    "word of length {len} exceeds the correction limit of {limit}"
                )));
            }
        }
        Ok(())
    }
}
