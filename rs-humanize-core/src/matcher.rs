use regex::{Captures, Regex};

use crate::error::HumanizeError;
use crate::text::match_case;

/// Case-insensitive, whole-word matcher for a word or a multi-word phrase.
///
/// Word boundaries are Unicode-aware, so occurrences touching punctuation
/// (`"utilize,"`, `"(utilize)"`) match while occurrences inside a longer
/// word (`"utilized"`, `"reutilize"`) do not.
///
/// # Invariants
/// - `phrase` is non-empty
/// - `pattern` is the escaped phrase wrapped in `\b` anchors
#[derive(Debug, Clone)]
pub struct WordMatcher {
	phrase: String,
	pattern: Regex,
}

impl WordMatcher {
	/// Compiles a matcher for `phrase`.
	///
	/// # Errors
	/// Returns `ProcessingFailure` if the phrase is blank or the pattern
	/// cannot be compiled.
	pub fn new(phrase: &str) -> Result<Self, HumanizeError> {
		let phrase = phrase.trim();
		if phrase.is_empty() {
			return Err(HumanizeError::ProcessingFailure("Matcher phrase cannot be empty".to_owned()));
		}
		let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase)))?;
		Ok(Self { phrase: phrase.to_owned(), pattern })
	}

	/// Returns the phrase this matcher was built from.
	pub fn phrase(&self) -> &str {
		&self.phrase
	}

	/// Number of non-overlapping occurrences in `text`.
	pub fn count(&self, text: &str) -> usize {
		self.pattern.find_iter(text).count()
	}

	/// Replaces every occurrence with `replacement`, keeping the leading capital.
	pub fn replace_all(&self, text: &str, replacement: &str) -> String {
		self.replace_with(text, |_| Some(replacement.to_owned()))
	}

	/// Visits occurrences left to right and lets `decide` pick a replacement.
	///
	/// Returning `None` keeps the matched text. A returned replacement gets
	/// the leading capital of the matched text.
	pub fn replace_with<F>(&self, text: &str, mut decide: F) -> String
	where
		F: FnMut(&str) -> Option<String>,
	{
		self.pattern
			.replace_all(text, |caps: &Captures| {
				let found = &caps[0];
				match decide(found) {
					Some(replacement) => match_case(found, &replacement),
					None => found.to_owned(),
				}
			})
			.into_owned()
	}
}
