//! Edit-distance candidate generation.
//!
//! Enumerates every string within a bounded edit distance of an input word
//! under four primitive operations: deletion, transposition, replacement,
//! and insertion. All operations are driven by the n+1 `(left, right)`
//! decompositions of the word.

use std::collections::HashSet;

use crate::spelling::frequency::FrequencyTable;

/// Generates all strings within edit distance 1 or 2 of a word.
///
/// The alphabet used for replacements and insertions is configurable and
/// defaults to the 26 lowercase ASCII letters.
#[derive(Debug, Clone)]
pub struct EditGenerator {
    alphabet: Vec<char>,
}

/// Split the first character off a string, if any.
fn split_first(s: &str) -> Option<(char, &str)> {
    let mut chars = s.chars();
    let first = chars.next()?;
    Some((first, chars.as_str()))
}

impl EditGenerator {
    /// Create a generator over the lowercase English alphabet.
    pub fn new() -> Self {
        Self::with_alphabet("abcdefghijklmnopqrstuvwxyz")
    }

    /// Create a generator over a custom alphabet.
    pub fn with_alphabet(alphabet: &str) -> Self {
        EditGenerator {
            alphabet: alphabet.chars().collect(),
        }
    }

    /// Get the alphabet used for replacements and insertions.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// All n+1 `(left, right)` decompositions of `word`, in split-index order.
    ///
    /// Splits are taken at character boundaries, so non-ASCII input is safe.
    pub fn splits<'a>(&self, word: &'a str) -> Vec<(&'a str, &'a str)> {
        let mut splits = Vec::with_capacity(word.len() + 1);
        for (i, _) in word.char_indices() {
            splits.push((&word[..i], &word[i..]));
        }
        splits.push((word, ""));
        splits
    }

    /// Variations of `word` with one character removed.
    pub fn deletes(&self, word: &str) -> Vec<String> {
        self.splits(word)
            .into_iter()
            .filter_map(|(left, right)| {
                split_first(right).map(|(_, rest)| format!("{left}{rest}"))
            })
            .collect()
    }

    /// Variations of `word` with two adjacent characters swapped.
    pub fn transposes(&self, word: &str) -> Vec<String> {
        self.splits(word)
            .into_iter()
            .filter_map(|(left, right)| {
                let (first, rest) = split_first(right)?;
                let (second, rest) = split_first(rest)?;
                Some(format!("{left}{second}{first}{rest}"))
            })
            .collect()
    }

    /// Variations of `word` with one character replaced by an alphabet letter.
    pub fn replaces(&self, word: &str) -> Vec<String> {
        self.splits(word)
            .into_iter()
            .filter_map(|(left, right)| split_first(right).map(|(_, rest)| (left, rest)))
            .flat_map(|(left, rest)| {
                self.alphabet
                    .iter()
                    .map(move |c| format!("{left}{c}{rest}"))
            })
            .collect()
    }

    /// Variations of `word` with one alphabet letter inserted.
    pub fn inserts(&self, word: &str) -> Vec<String> {
        self.splits(word)
            .into_iter()
            .flat_map(|(left, right)| {
                self.alphabet
                    .iter()
                    .map(move |c| format!("{left}{c}{right}"))
            })
            .collect()
    }

    /// The deduplicated set of all strings exactly one primitive edit away.
    ///
    /// For a word of length n over an alphabet of size 26 this unions
    /// n deletions, n-1 transpositions, 26n replacements, and 26(n+1)
    /// insertions; collisions (e.g. replacing a letter with itself) shrink
    /// the set below that sum.
    pub fn edits1(&self, word: &str) -> HashSet<String> {
        let mut edits = HashSet::new();
        edits.extend(self.deletes(word));
        edits.extend(self.transposes(word));
        edits.extend(self.replaces(word));
        edits.extend(self.inserts(word));
        edits
    }

    /// The materialized set of all strings within two primitive edits.
    ///
    /// The set grows roughly as O((26·L)²) in the word length L; prefer
    /// [`EditGenerator::known_edits2`] when only dictionary hits are needed.
    pub fn edits2(&self, word: &str) -> HashSet<String> {
        self.edits1(word)
            .iter()
            .flat_map(|e1| self.edits1(e1))
            .collect()
    }

    /// Two-edit expansion filtered against a frequency table.
    ///
    /// Streams the nested expansion and keeps only known words, so the full
    /// two-edit set is never materialized.
    pub fn known_edits2(&self, word: &str, table: &FrequencyTable) -> HashSet<String> {
        let mut known = HashSet::new();
        for e1 in self.edits1(word) {
            for e2 in self.edits1(&e1) {
                if table.contains(&e2) {
                    known.insert(e2);
                }
            }
        }
        known
    }
}

impl Default for EditGenerator {
    fn default() -> Self {
        Self::new()
    }
}
