use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Counts whitespace-delimited, non-empty tokens.
///
/// Always computed from the current buffer, never cached.
pub fn word_count(text: &str) -> usize {
	text.split_whitespace().count()
}

/// Splits on runs of `.`, `!` or `?`, returning trimmed, non-empty sentences.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
	SENTENCE_END
		.split(text)
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.collect()
}

/// Returns true if the text ends with terminal punctuation.
pub(crate) fn ends_with_terminal(text: &str) -> bool {
	text.ends_with(['.', '!', '?'])
}

/// Upper-cases the first character.
///
/// Example: `"but then"` → `"But then"`
pub(crate) fn capitalize(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Lower-cases the first character so the sentence can follow a prefix.
///
/// A first word written entirely in capitals (`I`, `NASA`) is left alone.
pub(crate) fn decapitalize(text: &str) -> String {
	let first_word = text.split_whitespace().next().unwrap_or("");
	let letters: Vec<char> = first_word.chars().filter(|c| c.is_alphabetic()).collect();
	if !letters.is_empty() && letters.iter().all(|c| c.is_uppercase()) {
		return text.to_owned();
	}

	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_lowercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Carries the leading capital of `original` over to `replacement`.
///
/// Example: (`"Utilize"`, `"use"`) → `"Use"`
pub(crate) fn match_case(original: &str, replacement: &str) -> String {
	match original.chars().next() {
		Some(c) if c.is_uppercase() => capitalize(replacement),
		_ => replacement.to_owned(),
	}
}
