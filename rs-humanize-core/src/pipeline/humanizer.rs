use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::error::HumanizeError;
use crate::lexicon::Lexicon;
use crate::pipeline::length::LengthAdjuster;
use crate::pipeline::natural::NaturalElementInjector;
use crate::pipeline::patterns::UsedPatterns;
use crate::pipeline::polish::Polisher;
use crate::pipeline::restructure::SentenceRestructurer;
use crate::pipeline::vocabulary::VocabularyVarier;
use crate::text::word_count;

/// Result of one humanization run.
///
/// Serializes as `{"humanized", "originalWordCount", "finalWordCount"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Humanized {
	#[serde(rename = "humanized")]
	pub text: String,
	pub original_word_count: usize,
	pub final_word_count: usize,
}

/// High-level entry point running the full pipeline.
///
/// # Responsibilities
/// - Own the compiled passes built from one `Lexicon`
/// - Fix the target word count to the input's own count
/// - Allocate a fresh `UsedPatterns` per call
///
/// The struct is immutable once built, so a single instance can serve
/// concurrent callers without locking.
#[derive(Debug, Clone)]
pub struct Humanizer {
	restructurer: SentenceRestructurer,
	varier: VocabularyVarier,
	injector: NaturalElementInjector,
	adjuster: LengthAdjuster,
	polisher: Polisher,
}

impl Humanizer {
	/// Builds every pass from `lexicon`.
	///
	/// # Errors
	/// Returns `ProcessingFailure` if a table is empty or a matcher cannot
	/// be compiled.
	pub fn new(lexicon: Lexicon) -> Result<Self, HumanizeError> {
		lexicon.validate()?;

		Ok(Self {
			restructurer: SentenceRestructurer::new(&lexicon)?,
			varier: VocabularyVarier::new(&lexicon)?,
			injector: NaturalElementInjector::new(&lexicon),
			adjuster: LengthAdjuster::new(&lexicon),
			polisher: Polisher::new(&lexicon)?,
		})
	}

	/// Builds a humanizer over `Lexicon::ENGLISH`.
	pub fn english() -> Result<Self, HumanizeError> {
		Self::new(Lexicon::ENGLISH)
	}

	/// Humanizes `text` using the thread-local random source.
	///
	/// Output is not reproducible; use `humanize_with_rng` with a seeded rng
	/// for that.
	pub fn humanize(&self, text: &str) -> Result<Humanized, HumanizeError> {
		self.humanize_with_rng(text, &mut rand::rng())
	}

	/// Humanizes `text`, drawing every random decision from `rng`.
	///
	/// # Errors
	/// Returns `MissingInput` if `text` is empty or whitespace only.
	pub fn humanize_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<Humanized, HumanizeError> {
		if text.trim().is_empty() {
			return Err(HumanizeError::MissingInput);
		}

		let original_word_count = word_count(text);
		let mut used = UsedPatterns::new();

		let result = self.restructurer.apply(text, &mut used, rng);
		let result = self.varier.apply(&result, rng);
		let result = self.injector.apply(&result, original_word_count, &mut used, rng);
		let result = self.adjuster.apply(&result, original_word_count, rng);
		let result = self.polisher.apply(&result);

		let final_word_count = word_count(&result);
		debug!(
			"humanized {original_word_count} -> {final_word_count} words, {} pattern(s) used",
			used.len()
		);

		Ok(Humanized {
			text: result,
			original_word_count,
			final_word_count,
		})
	}
}
