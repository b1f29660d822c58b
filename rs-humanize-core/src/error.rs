use thiserror::Error;

/// Failures surfaced by the humanization pipeline.
///
/// Only two kinds exist: the caller gave nothing to work with, or something
/// went wrong while building or running the pipeline. Callers never receive
/// a partial result alongside an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HumanizeError {
	/// Input text is absent, empty or whitespace only. No pass was run.
	#[error("Text is required")]
	MissingInput,

	/// Any unexpected failure while building or running the pipeline.
	#[error("{0}")]
	ProcessingFailure(String),
}

impl From<regex::Error> for HumanizeError {
	fn from(err: regex::Error) -> Self {
		HumanizeError::ProcessingFailure(format!("invalid matcher pattern: {err}"))
	}
}
