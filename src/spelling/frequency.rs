//! Word-frequency tables built from a reference corpus.

use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use ahash::AHashMap;

use crate::analysis::tokenizer::WordTokenizer;
use crate::error::{OrthosError, Result};

/// An immutable mapping from lowercase word to occurrence count.
///
/// A table is built once from a corpus (or explicit counts) and is read-only
/// thereafter; all mutation happens inside the constructors. Because there is
/// no interior mutability, a table can be shared freely across threads and
/// queried concurrently without locking.
///
/// Keys are exactly the tokens produced by [`WordTokenizer`]: lowercase runs
/// of word characters, so alphanumeric tokens from a raw corpus are admitted.
/// The sum of all counts equals the corpus token count.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Words and their occurrence counts
    counts: AHashMap<String, u32>,
    /// Total token count for probability calculations
    total: u64,
}

impl FrequencyTable {
    /// Build a table by tokenizing a corpus of raw text.
    pub fn from_corpus(text: &str) -> Self {
        let tokenizer = WordTokenizer::default();
        let mut table = FrequencyTable::default();
        for word in tokenizer.tokenize(text) {
            table.insert(word, 1);
        }
        table
    }

    /// Build a table from a corpus text file.
    pub fn from_corpus_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_corpus(&text))
    }

    /// Build a table from explicit `(word, count)` pairs.
    ///
    /// Words are lowercased; counts for repeated words accumulate.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let mut table = FrequencyTable::default();
        for (word, count) in counts {
            table.insert(word.to_lowercase(), count);
        }
        table
    }

    /// Load a table from a frequency file with format `word count` per line.
    ///
    /// Blank lines are skipped; a line whose count does not parse is a
    /// dictionary error.
    pub fn from_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut table = FrequencyTable::default();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();
            let (Some(word), Some(count)) = (parts.next(), parts.next()) else {
                return Err(OrthosError::dictionary(format!(
                    "line {}: expected `word count`, got `{line}`",
                    number + 1
                )));
            };
            let count: u32 = count.parse().map_err(|_| {
                OrthosError::dictionary(format!("line {}: invalid count `{count}`", number + 1))
            })?;

            table.insert(word.to_lowercase(), count);
        }

        Ok(table)
    }

    /// Save the table as a frequency file, most frequent words first.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        for (word, count) in self.most_frequent(self.counts.len()) {
            writeln!(file, "{word} {count}")?;
        }
        Ok(())
    }

    fn insert(&mut self, word: String, count: u32) {
        *self.counts.entry(word).or_insert(0) += count;
        self.total += count as u64;
    }

    /// Check whether a word is known. Lookup is case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(&word.to_lowercase())
    }

    /// Get the occurrence count of a word, 0 if unseen.
    pub fn frequency(&self, word: &str) -> u32 {
        self.counts.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Get the probability of a word: `count(word) / total_count`.
    ///
    /// An unseen word has probability 0.0; absence is a valid state, not an
    /// error. An empty table yields 0.0 for every word.
    pub fn probability(&self, word: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.frequency(word) as f64 / self.total as f64
    }

    /// Number of distinct words in the table.
    pub fn word_count(&self) -> usize {
        self.counts.len()
    }

    /// Total token count over the whole corpus.
    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// Iterate over all `(word, count)` entries in unspecified order.
    pub fn words(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// The `limit` most frequent words, highest count first.
    ///
    /// Equal counts are ordered alphabetically so the result is deterministic.
    pub fn most_frequent(&self, limit: usize) -> Vec<(String, u32)> {
        let mut entries: Vec<(String, u32)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();

        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(limit);
        entries
    }
}
