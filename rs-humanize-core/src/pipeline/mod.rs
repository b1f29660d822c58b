//! The humanization pipeline.
//!
//! Passes run in a fixed order, each borrowing the current buffer and
//! returning a new one:
//! 1. `SentenceRestructurer`
//! 2. `VocabularyVarier`
//! 3. `NaturalElementInjector`
//! 4. `LengthAdjuster`
//! 5. `Polisher` (deterministic cleanup)
//!
//! `Humanizer` wires them together.

/// High-level facade running every pass and counting words.
pub mod humanizer;

/// Sentence split, opener/starter prefixes, contractions, long sentence split.
pub mod restructure;

/// Partial formal → casual synonym replacement.
pub mod vocabulary;

/// One-shot conversational element (transition, aside, emphasis, tag).
pub mod natural;

/// Padding and truncation toward the target word count.
pub mod length;

/// Whitespace, punctuation and capitalization cleanup.
pub mod polish;

/// Per-run set of spent one-shot embellishments.
pub mod patterns;

#[cfg(test)]
mod test_rng;
