//! # Orthos
//!
//! A corpus-driven single-word spelling corrector for Rust.
//!
//! Orthos builds a word-frequency table from a reference corpus and proposes
//! the most probable intended word for a misspelled token, using bounded
//! edit-distance candidate generation (delete, transpose, replace, insert).
//!
//! ## Features
//!
//! - Immutable, shareable frequency tables built from raw text or frequency files
//! - Edit-distance candidate generation with a configurable alphabet
//! - Probability-ranked correction with a deterministic tie-break
//! - Ranked suggestion lists for "Did you mean?" style flows
//! - Parallel batch correction over a shared table
//!
//! ## Example
//!
//! ```
//! use orthos::spelling::corrector::Corrector;
//! use orthos::spelling::frequency::FrequencyTable;
//!
//! let table = FrequencyTable::from_corpus("poetry is spelling spelling poetry poetry");
//! let corrector = Corrector::new(table);
//!
//! assert_eq!(corrector.correct("peotry").unwrap(), "poetry");
//! assert_eq!(corrector.correct("speling").unwrap(), "spelling");
//! ```

pub mod analysis;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
