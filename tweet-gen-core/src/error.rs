use thiserror::Error;

/// Result type used across the crate, defaulting to [`TweetGenError`].
pub type Result<T, E = TweetGenError> = std::result::Result<T, E>;

/// Errors raised while loading a corpus or generating tweets.
///
/// `EmptyCorpus` and `MalformedChain` are sampling-time failures and are kept
/// separate from a sentence ending normally on a terminator or on the word cap.
#[derive(Debug, Error)]
pub enum TweetGenError {
	/// The dictionary holds no word that may open a sentence
	/// (it is empty, or every entry ends with a period).
	#[error("the corpus contains no word that can start a sentence")]
	EmptyCorpus,

	/// A word was chosen to continue a sentence but was never followed
	/// by another token in the corpus.
	#[error("the word '{0}' has no recorded successor")]
	MalformedChain(String),

	/// A generator setting is out of range.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	/// Reading the corpus failed.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}
