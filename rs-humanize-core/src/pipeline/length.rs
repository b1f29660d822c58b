use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::lexicon::Lexicon;
use crate::text::{ends_with_terminal, word_count};

/// Pad when the text falls under this share of the target.
const PAD_BELOW: f64 = 0.9;

/// Truncate when the text grows over this share of the target.
const TRIM_ABOVE: f64 = 1.05;

/// Fourth pass: brings the word count back inside `[90%, 105%]` of the target.
///
/// Fillers are added one at a time until the text reaches 90% of the
/// target. The truncation check then runs on the freshly counted buffer, so
/// a padded text that overshoots is truncated in the same call.
#[derive(Debug, Clone)]
pub struct LengthAdjuster {
	fillers: &'static [&'static str],
}

impl LengthAdjuster {
	pub fn new(lexicon: &Lexicon) -> Self {
		Self { fillers: lexicon.fillers }
	}

	pub fn apply<R: Rng + ?Sized>(&self, text: &str, target_word_count: usize, rng: &mut R) -> String {
		let target = target_word_count as f64;
		let mut result = text.to_owned();

		let mut count = word_count(&result);
		if (count as f64) < target * PAD_BELOW {
			while (count as f64) < target * PAD_BELOW {
				let padded = self.pad(&result, rng);
				let padded_count = word_count(&padded);
				if padded_count <= count {
					break;
				}
				result = padded;
				count = padded_count;
			}
			debug!("padded to {count} words (target {target_word_count})");
		}

		if (count as f64) > target * TRIM_ABOVE {
			debug!("truncating {count} words to {target_word_count}");
			result = truncate(&result, target_word_count);
		}

		result
	}

	/// Appends one filler sentence after a random `.`-delimited part.
	///
	/// The filler always ends right before a `.`, so its trailing comma is dropped.
	fn pad<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
		let Some(filler) = self.fillers.choose(rng) else {
			return text.to_owned();
		};

		let mut parts: Vec<String> = text.split('.').map(str::to_owned).collect();
		let index = rng.random_range(0..parts.len().saturating_sub(1).max(1));
		parts[index].push_str(&format!(". {}", filler.trim_end_matches(',')));
		parts.join(".")
	}
}

/// Keeps the first `target_word_count` tokens and closes the last sentence.
///
/// A dangling `,`, `;` or `:` is dropped before the final `.` is added.
pub fn truncate(text: &str, target_word_count: usize) -> String {
	let mut result = text
		.split_whitespace()
		.take(target_word_count)
		.collect::<Vec<_>>()
		.join(" ");

	let kept = result.trim_end_matches([',', ';', ':']).len();
	result.truncate(kept);

	if !ends_with_terminal(&result) {
		result.push('.');
	}
	result
}
