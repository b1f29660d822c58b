use log::debug;
use once_cell::sync::Lazy;
use rand::Rng;
use rand::seq::IndexedRandom;
use regex::{Captures, Regex};

use crate::lexicon::Lexicon;
use crate::pipeline::patterns::{Pattern, UsedPatterns};
use crate::text::{decapitalize, word_count};

/// Injection only runs while the text is below this share of the target.
const WORD_COUNT_THRESHOLD: f64 = 0.95;

const TRANSITION_PROBABILITY: f64 = 0.5;
const PERSONAL_PROBABILITY: f64 = 0.4;
const CASUAL_PROBABILITY: f64 = 0.3;

static COPULA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(is|are|was|were)\b").unwrap());

/// Category of conversational addition. Exactly one is drawn per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
	Transition,
	Personal,
	Emphasis,
	Casual,
}

impl Element {
	const ALL: [Element; 4] = [Element::Transition, Element::Personal, Element::Emphasis, Element::Casual];

	fn pattern(self) -> Pattern {
		match self {
			Element::Transition => Pattern::Transition,
			Element::Personal => Pattern::Personal,
			Element::Emphasis => Pattern::Emphasis,
			Element::Casual => Pattern::Casual,
		}
	}
}

/// Third pass: adds at most one conversational element.
///
/// Only runs while the current word count is under 95% of the target. One
/// category is drawn uniformly; if its tag is unused it is attempted and the
/// tag is spent, even when the category's own coin then fails.
#[derive(Debug, Clone)]
pub struct NaturalElementInjector {
	transitions: &'static [&'static str],
	personal: &'static [&'static str],
	emphasis: &'static [&'static str],
	casual: &'static [&'static str],
}

impl NaturalElementInjector {
	pub fn new(lexicon: &Lexicon) -> Self {
		Self {
			transitions: lexicon.transitions,
			personal: lexicon.personal,
			emphasis: lexicon.emphasis,
			casual: lexicon.casual,
		}
	}

	pub fn apply<R: Rng + ?Sized>(
		&self,
		text: &str,
		target_word_count: usize,
		used: &mut UsedPatterns,
		rng: &mut R,
	) -> String {
		let current = word_count(text);
		if current as f64 >= target_word_count as f64 * WORD_COUNT_THRESHOLD {
			return text.to_owned();
		}

		let element = match Element::ALL.choose(rng) {
			Some(element) => *element,
			None => return text.to_owned(),
		};
		if !used.insert(element.pattern()) {
			return text.to_owned();
		}
		debug!("injecting {element:?} ({current}/{target_word_count} words)");

		match element {
			Element::Transition => self.add_transition(text, rng),
			Element::Personal => self.add_personal(text, rng),
			Element::Emphasis => self.add_emphasis(text, rng),
			Element::Casual => self.add_casual(text, rng),
		}
	}

	/// Prefixes a random interior sentence (neither first nor last) with a
	/// transition word.
	fn add_transition<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
		let mut sentences: Vec<String> = text
			.split('.')
			.filter(|s| !s.trim().is_empty())
			.map(str::to_owned)
			.collect();

		if sentences.len() > 2 && rng.random_bool(TRANSITION_PROBABILITY) {
			let index = 1 + rng.random_range(0..sentences.len() - 2);
			if let Some(transition) = self.transitions.choose(rng) {
				sentences[index] = format!(" {transition} {}", decapitalize(sentences[index].trim()));
			}
		}

		format!("{}.", sentences.join("."))
	}

	/// Inserts a first-person aside after the first sentence.
	fn add_personal<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
		if !rng.random_bool(PERSONAL_PROBABILITY) {
			return text.to_owned();
		}
		match self.personal.choose(rng) {
			Some(expression) => text.replacen(". ", &format!(", {expression}. "), 1),
			None => text.to_owned(),
		}
	}

	/// Inserts an emphasis adverb before the first copula.
	fn add_emphasis<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
		match self.emphasis.choose(rng) {
			Some(word) => COPULA
				.replacen(text, 1, |caps: &Captures| format!("{word} {}", &caps[1]))
				.into_owned(),
			None => text.to_owned(),
		}
	}

	/// Appends a casual tag clause before the final period.
	fn add_casual<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
		if !rng.random_bool(CASUAL_PROBABILITY) {
			return text.to_owned();
		}
		match (text.strip_suffix('.'), self.casual.choose(rng)) {
			(Some(stem), Some(element)) => format!("{stem}{element}."),
			_ => text.to_owned(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pipeline::test_rng::{HighRng, LowRng};
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	const TEXT: &str = "The plan is simple. The team was ready. The tools were new. The results are good.";

	fn injector() -> NaturalElementInjector {
		NaturalElementInjector::new(&Lexicon::ENGLISH)
	}

	#[test]
	fn skips_when_close_to_target() {
		let mut used = UsedPatterns::new();
		// 16 words, 95% of 16 is 15.2
		let result = injector().apply(TEXT, 16, &mut used, &mut LowRng);
		assert_eq!(result, TEXT);
		assert!(used.is_empty());
	}

	#[test]
	fn transition_lands_on_an_interior_sentence() {
		let mut used = UsedPatterns::new();
		let result = injector().apply(TEXT, 100, &mut used, &mut LowRng);
		assert_eq!(
			result,
			"The plan is simple. Also, the team was ready. The tools were new. The results are good."
		);
		assert!(used.contains(Pattern::Transition));
	}

	#[test]
	fn spent_category_is_not_applied_again() {
		let mut used = UsedPatterns::new();
		used.insert(Pattern::Transition);
		let result = injector().apply(TEXT, 100, &mut used, &mut LowRng);
		assert_eq!(result, TEXT);
		assert_eq!(used.len(), 1);
	}

	#[test]
	fn transition_needs_more_than_two_sentences() {
		let text = "First part. Second part.";
		assert_eq!(injector().add_transition(text, &mut LowRng), text);
	}

	#[test]
	fn personal_aside_follows_first_sentence() {
		assert_eq!(
			injector().add_personal("First part. Second part.", &mut LowRng),
			"First part, in my experience. Second part."
		);
		assert_eq!(injector().add_personal("First part. Second part.", &mut HighRng), "First part. Second part.");
	}

	#[test]
	fn emphasis_targets_first_whole_word_copula() {
		assert_eq!(
			injector().add_emphasis("This island is calm and the seas are blue.", &mut LowRng),
			"This island really is calm and the seas are blue."
		);
		assert_eq!(injector().add_emphasis("Nothing here.", &mut LowRng), "Nothing here.");
	}

	#[test]
	fn casual_tag_goes_before_final_period() {
		assert_eq!(injector().add_casual("It works.", &mut LowRng), "It works, which is pretty cool.");
		assert_eq!(injector().add_casual("It works!", &mut LowRng), "It works!");
		assert_eq!(injector().add_casual("It works.", &mut HighRng), "It works.");
	}

	#[test]
	fn never_more_than_one_category_per_call() {
		let lexicon = Lexicon::ENGLISH;
		let injector = injector();
		let mut embellished = 0;

		for seed in 0..300 {
			let mut rng = StdRng::seed_from_u64(seed);
			let mut used = UsedPatterns::new();
			let result = injector.apply(TEXT, 100, &mut used, &mut rng);

			let transition = lexicon.transitions.iter().any(|t| result.contains(t));
			let personal = lexicon.personal.iter().any(|p| result.contains(p));
			let emphasis = lexicon.emphasis.iter().any(|e| {
				["is", "are", "was", "were"].iter().any(|copula| result.contains(&format!(" {e} {copula} ")))
			});
			let casual = lexicon.casual.iter().any(|c| result.contains(c));
			let categories = [transition, personal, emphasis, casual].iter().filter(|hit| **hit).count();

			assert!(categories <= 1, "seed {seed}: {result}");
			assert_eq!(used.len(), 1);
			embellished += categories;
		}

		assert!(embellished > 0);
	}
}
