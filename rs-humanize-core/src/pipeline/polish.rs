use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::HumanizeError;
use crate::lexicon::Lexicon;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static PERIOD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.(?:\s*\.)+").unwrap());
static LOWER_AFTER_PERIOD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s+(\p{Ll})").unwrap());

/// Final cleanup, deterministic.
///
/// - collapses whitespace and trims the ends
/// - collapses runs of periods (`..`, `. .`, `...`) into one
/// - upper-cases the letter after `". "`
/// - upper-cases the word after a polish starter (`"Also, the"` → `"Also, The"`)
#[derive(Debug, Clone)]
pub struct Polisher {
	after_starter: Regex,
}

impl Polisher {
	/// Builds the starter pattern from the lexicon's polish starters.
	///
	/// # Errors
	/// Returns an error if the starter list is empty or the pattern does not compile.
	pub fn new(lexicon: &Lexicon) -> Result<Self, HumanizeError> {
		if lexicon.polish_starters.is_empty() {
			return Err(HumanizeError::ProcessingFailure("No polish starters configured".to_owned()));
		}

		let starters = lexicon
			.polish_starters
			.iter()
			.map(|starter| regex::escape(starter))
			.collect::<Vec<_>>()
			.join("|");
		let after_starter = Regex::new(&format!(r"\b({starters}),\s+(\p{{Ll}})"))?;

		Ok(Self { after_starter })
	}

	pub fn apply(&self, text: &str) -> String {
		let result = WHITESPACE.replace_all(text, " ");
		let result = PERIOD_RUN.replace_all(result.trim(), ".");
		let result = LOWER_AFTER_PERIOD.replace_all(&result, |caps: &Captures| format!(". {}", caps[1].to_uppercase()));
		self.after_starter
			.replace_all(&result, |caps: &Captures| format!("{}, {}", &caps[1], caps[2].to_uppercase()))
			.into_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn polisher() -> Polisher {
		Polisher::new(&Lexicon::ENGLISH).unwrap()
	}

	#[test]
	fn collapses_whitespace_and_periods() {
		assert_eq!(polisher().apply("  Wait...   what. .\n"), "Wait. What.");
		assert_eq!(polisher().apply("Done.. Next."), "Done. Next.");
	}

	#[test]
	fn capitalizes_after_periods_and_starters() {
		let text = "Look,  this is fine..  actually, it is.. also fine.   Plus, more.";
		assert_eq!(polisher().apply(text), "Look, this is fine. Actually, It is. Also fine. Plus, More.");
	}

	#[test]
	fn leaves_clean_text_alone() {
		let text = "This is a test. It won't work. So we use another approach.";
		assert_eq!(polisher().apply(text), text);
	}

	#[test]
	fn starter_match_is_case_sensitive() {
		assert_eq!(polisher().apply("we also, then"), "we also, then");
		assert_eq!(polisher().apply("To be fair, it works."), "To be fair, It works.");
	}
}
