use std::collections::HashSet;

/// One-shot embellishments that may fire at most once per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
	/// Opener prepended to the first sentence.
	FirstSentence,
	/// Starter prepended to a later sentence.
	MidSentence,
	Transition,
	Personal,
	Emphasis,
	Casual,
}

/// Tags already spent during one pipeline run.
///
/// Created empty for each call and passed by `&mut` through the passes.
#[derive(Debug, Default, Clone)]
pub struct UsedPatterns {
	used: HashSet<Pattern>,
}

impl UsedPatterns {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn contains(&self, pattern: Pattern) -> bool {
		self.used.contains(&pattern)
	}

	/// Marks `pattern` as spent. Returns false if it already was.
	pub fn insert(&mut self, pattern: Pattern) -> bool {
		self.used.insert(pattern)
	}

	pub fn len(&self) -> usize {
		self.used.len()
	}

	pub fn is_empty(&self) -> bool {
		self.used.is_empty()
	}
}
