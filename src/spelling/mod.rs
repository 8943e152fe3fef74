//! Spelling correction for Orthos.
//!
//! This module implements the correction core: a frequency table built from a
//! reference corpus, edit-distance candidate generation, a fallback cascade
//! over edit distances, and probability-based ranking of the surviving
//! candidates.

pub mod corrector;
pub mod distance;
pub mod edits;
pub mod frequency;
pub mod suggest;

// Re-export commonly used types
pub use corrector::*;
pub use distance::*;
pub use edits::*;
pub use frequency::*;
pub use suggest::*;
