use log::trace;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::HumanizeError;
use crate::lexicon::Lexicon;
use crate::matcher::WordMatcher;

/// Share of occurrences replaced is drawn from `[MIN_SHARE, MIN_SHARE + SHARE_SPREAD)`.
const MIN_SHARE: f64 = 0.4;
const SHARE_SPREAD: f64 = 0.3;

/// Coin flipped for each occurrence while the quota is not exhausted.
const REPLACE_PROBABILITY: f64 = 0.7;

/// Second pass: swaps part of the formal vocabulary for casual alternatives.
///
/// Terms are processed in lexicon order. For each term only 40-70% of the
/// occurrences (rounded down) can be replaced, so some of the original
/// wording always survives once a term appears twice or more.
#[derive(Debug, Clone)]
pub struct VocabularyVarier {
	synonyms: Vec<(WordMatcher, &'static [&'static str])>,
}

impl VocabularyVarier {
	/// Compiles one matcher per synonym entry.
	///
	/// # Errors
	/// Returns an error if a term cannot be compiled.
	pub fn new(lexicon: &Lexicon) -> Result<Self, HumanizeError> {
		let synonyms = lexicon
			.synonyms
			.iter()
			.map(|(term, alternatives)| WordMatcher::new(term).map(|matcher| (matcher, *alternatives)))
			.collect::<Result<Vec<_>, HumanizeError>>()?;

		Ok(Self { synonyms })
	}

	pub fn apply<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
		let mut result = text.to_owned();

		for (matcher, alternatives) in &self.synonyms {
			let matches = matcher.count(&result);
			if matches == 0 {
				continue;
			}

			let quota = replacement_quota(matches, rng.random::<f64>());
			let mut replaced = 0;

			result = matcher.replace_with(&result, |_| {
				if replaced < quota && rng.random_bool(REPLACE_PROBABILITY) {
					let alternative = alternatives.choose(rng)?;
					replaced += 1;
					Some((*alternative).to_owned())
				} else {
					None
				}
			});

			trace!("'{}': replaced {replaced}/{matches} (quota {quota})", matcher.phrase());
		}

		result
	}
}

/// `floor(matches × (0.4 + fraction × 0.3))` for `fraction ∈ [0, 1)`.
fn replacement_quota(matches: usize, fraction: f64) -> usize {
	(matches as f64 * (MIN_SHARE + fraction * SHARE_SPREAD)).floor() as usize
}
