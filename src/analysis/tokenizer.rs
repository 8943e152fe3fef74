//! Regex-based word tokenizer for corpus loading.

use std::sync::Arc;

use regex::Regex;

use crate::error::{OrthosError, Result};

/// A regex-based tokenizer that extracts lowercase word tokens from text.
///
/// The default pattern `\w+` matches runs of word characters (alphanumeric
/// plus underscore), so digit tokens from a raw corpus are kept. Every match
/// is lowercased, which establishes the key invariant of frequency tables
/// built from the output.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new tokenizer with the default `\w+` pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| OrthosError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Split `text` into lowercase word tokens, in order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|mat| mat.as_str().to_lowercase())
            .collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default word pattern should be valid")
    }
}
