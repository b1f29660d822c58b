use crate::error::HumanizeError;

/// Word tables driving every pass of the pipeline.
///
/// All entries are static data so a table can be swapped (or localized)
/// without touching the passes. `Lexicon::ENGLISH` is the stock set.
///
/// # Invariants
/// Checked by `validate`:
/// - no table is empty
/// - every synonym entry has at least one alternative
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
	/// Prefixes for the first sentence (`"Look,"`).
	pub openers: &'static [&'static str],
	/// Prefixes for one later sentence (`"Actually,"`).
	pub starters: &'static [&'static str],
	/// Formal phrase → contraction.
	pub contractions: &'static [(&'static str, &'static str)],
	/// Formal word or phrase → casual alternatives, applied in table order.
	pub synonyms: &'static [(&'static str, &'static [&'static str])],
	/// Words prepended to an interior sentence.
	pub transitions: &'static [&'static str],
	/// First-person asides inserted after the first sentence.
	pub personal: &'static [&'static str],
	/// Adverbs inserted before the first copula.
	pub emphasis: &'static [&'static str],
	/// Clauses appended before the final period.
	pub casual: &'static [&'static str],
	/// Sentence fragments used to pad short text.
	pub fillers: &'static [&'static str],
	/// Prefixes whose following word gets re-capitalized by the polish pass.
	pub polish_starters: &'static [&'static str],
}

impl Lexicon {
	pub const ENGLISH: Lexicon = Lexicon {
		openers: &["Look,", "Here's the thing:", "So basically,", "Let me break this down:"],
		starters: &["Actually,", "Honestly,", "To be fair,"],
		contractions: &[
			("do not", "don't"),
			("cannot", "can't"),
			("will not", "won't"),
			("it is", "it's"),
			("that is", "that's"),
		],
		synonyms: &[
			("utilize", &["use", "work with"]),
			("demonstrate", &["show", "prove"]),
			("facilitate", &["help", "make easier"]),
			("implement", &["put in place", "set up"]),
			("subsequently", &["later", "then"]),
			("nevertheless", &["however", "but"]),
			("furthermore", &["also", "plus"]),
			("therefore", &["so", "thus"]),
			("significant", &["important", "big"]),
			("approximately", &["about", "around"]),
			("numerous", &["many", "lots of"]),
			("conduct", &["do", "run"]),
			("commence", &["start", "begin"]),
			("methodology", &["approach", "method"]),
			("optimization", &["improvement", "tweaking"]),
			("in order to", &["to"]),
			("due to the fact that", &["because"]),
			("at this point in time", &["now"]),
			("in the event that", &["if"]),
			("with regard to", &["about"]),
		],
		transitions: &["Also,", "Plus,", "What's more,", "Additionally,"],
		personal: &["in my experience", "from what I understand", "personally speaking"],
		emphasis: &["really", "actually", "quite", "pretty"],
		casual: &[", which is pretty cool", ", if you ask me", ", to be honest"],
		fillers: &[
			"It's worth noting that",
			"What's interesting is that",
			"From a practical standpoint,",
			"When you think about it,",
		],
		polish_starters: &["Actually", "Honestly", "To be fair", "Also", "Plus"],
	};

	/// Checks that every table can feed a random pick.
	///
	/// # Errors
	/// Returns `ProcessingFailure` naming the first empty table.
	pub fn validate(&self) -> Result<(), HumanizeError> {
		let tables: [(&str, usize); 10] = [
			("openers", self.openers.len()),
			("starters", self.starters.len()),
			("contractions", self.contractions.len()),
			("synonyms", self.synonyms.len()),
			("transitions", self.transitions.len()),
			("personal", self.personal.len()),
			("emphasis", self.emphasis.len()),
			("casual", self.casual.len()),
			("fillers", self.fillers.len()),
			("polish_starters", self.polish_starters.len()),
		];
		if let Some((name, _)) = tables.iter().find(|(_, len)| *len == 0) {
			return Err(HumanizeError::ProcessingFailure(format!("Lexicon table `{name}` is empty")));
		}

		if let Some((term, _)) = self.synonyms.iter().find(|(_, alternatives)| alternatives.is_empty()) {
			return Err(HumanizeError::ProcessingFailure(format!("Synonym `{term}` has no alternatives")));
		}

		Ok(())
	}
}

impl Default for Lexicon {
	fn default() -> Self {
		Lexicon::ENGLISH
	}
}
