//! Heuristic text humanization library.
//!
//! This crate rewrites a block of text so it reads less mechanically while
//! keeping roughly the same length:
//! - Sentence-level restructuring and contractions
//! - Partial synonym replacement of formal vocabulary
//! - A single conversational embellishment
//! - Length adjustment toward the original word count
//! - Deterministic final polish
//!
//! Every random decision is drawn from an `Rng` supplied by the caller
//! (or the thread-local one), so runs can be made reproducible with a seed.

/// Pipeline passes and the `Humanizer` facade.
pub mod pipeline;

/// Static word tables feeding the passes.
pub mod lexicon;

/// Case-insensitive whole-word matching.
pub mod matcher;

/// Error type shared by the library and its callers.
pub mod error;

/// Word counting and small string helpers.
mod text;

pub use error::HumanizeError;
pub use lexicon::Lexicon;
pub use pipeline::humanizer::{Humanized, Humanizer};
pub use text::word_count;
