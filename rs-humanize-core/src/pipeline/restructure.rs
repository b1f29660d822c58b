use log::trace;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::HumanizeError;
use crate::lexicon::Lexicon;
use crate::matcher::WordMatcher;
use crate::pipeline::patterns::{Pattern, UsedPatterns};
use crate::text::{capitalize, decapitalize, split_sentences};

const OPENER_PROBABILITY: f64 = 0.4;
const STARTER_PROBABILITY: f64 = 0.15;
const CONTRACTION_PROBABILITY: f64 = 0.6;
const SPLIT_PROBABILITY: f64 = 0.3;

/// Sentences longer than this (in characters) are candidates for splitting.
const LONG_SENTENCE_CHARS: usize = 100;

const BREAK_POINTS: [&str; 3] = [" and ", " but ", " because "];

/// First pass: sentence-level surgery.
///
/// # Responsibilities
/// - Prefix at most one opener (first sentence) and one starter (any later
///   sentence) per document
/// - Apply contractions to a random subset of sentences
/// - Occasionally split long sentences on a conjunction
///
/// Output is always the sentences joined by `". "` plus a trailing `.`.
#[derive(Debug, Clone)]
pub struct SentenceRestructurer {
	openers: &'static [&'static str],
	starters: &'static [&'static str],
	contractions: Vec<(WordMatcher, &'static str)>,
}

impl SentenceRestructurer {
	/// Builds the pass from the lexicon, compiling one matcher per contraction.
	///
	/// # Errors
	/// Returns an error if a contraction phrase cannot be compiled.
	pub fn new(lexicon: &Lexicon) -> Result<Self, HumanizeError> {
		let contractions = lexicon
			.contractions
			.iter()
			.map(|(formal, short)| WordMatcher::new(formal).map(|matcher| (matcher, *short)))
			.collect::<Result<Vec<_>, HumanizeError>>()?;

		Ok(Self {
			openers: lexicon.openers,
			starters: lexicon.starters,
			contractions,
		})
	}

	pub fn apply<R: Rng + ?Sized>(&self, text: &str, used: &mut UsedPatterns, rng: &mut R) -> String {
		let mut sentences = Vec::new();

		for (index, sentence) in split_sentences(text).into_iter().enumerate() {
			let mut modified = self.prefix_sentence(index, sentence, used, rng);

			if rng.random_bool(CONTRACTION_PROBABILITY) {
				modified = self.contract(&modified);
			}

			if modified.chars().count() > LONG_SENTENCE_CHARS && rng.random_bool(SPLIT_PROBABILITY) {
				if let Some(split) = split_long_sentence(&modified) {
					trace!("split long sentence at index {index}");
					modified = split;
				}
			}

			sentences.push(modified);
		}

		format!("{}.", sentences.join(". "))
	}

	/// Prepends an opener (index 0) or a starter (index > 0) when the coin and
	/// the pattern tag allow it.
	fn prefix_sentence<R: Rng + ?Sized>(
		&self,
		index: usize,
		sentence: &str,
		used: &mut UsedPatterns,
		rng: &mut R,
	) -> String {
		let (pattern, probability, choices) = if index == 0 {
			(Pattern::FirstSentence, OPENER_PROBABILITY, self.openers)
		} else {
			(Pattern::MidSentence, STARTER_PROBABILITY, self.starters)
		};

		if used.contains(pattern) || !rng.random_bool(probability) {
			return sentence.to_owned();
		}

		match choices.choose(rng) {
			Some(prefix) => {
				used.insert(pattern);
				trace!("{pattern:?} prefix '{prefix}' at sentence {index}");
				format!("{prefix} {}", decapitalize(sentence))
			}
			None => sentence.to_owned(),
		}
	}

	fn contract(&self, sentence: &str) -> String {
		self.contractions
			.iter()
			.fold(sentence.to_owned(), |acc, (matcher, short)| matcher.replace_all(&acc, short))
	}
}

/// Splits on the first break point that cuts the sentence in exactly two.
///
/// A break point occurring more than once is skipped in favour of the next.
fn split_long_sentence(sentence: &str) -> Option<String> {
	BREAK_POINTS.iter().find_map(|break_point| {
		let parts: Vec<&str> = sentence.split(break_point).collect();
		(parts.len() == 2).then(|| format!("{}. {}", parts[0], capitalize(parts[1])))
	})
}
