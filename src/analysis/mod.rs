//! Text analysis for Orthos.
//!
//! The corrector core never performs I/O or tokenization itself; it consumes
//! a pre-built frequency table. This module supplies the collaborator that
//! builds such tables: a tokenizer that extracts lowercase word tokens from
//! raw text.

pub mod tokenizer;

// Re-export commonly used types
pub use tokenizer::*;
