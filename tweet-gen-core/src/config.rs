use serde::Deserialize;

use crate::error::{Result, TweetGenError};

/// Maximum number of words in a generated sentence.
pub const DEFAULT_MAX_WORDS: usize = 20;

/// Settings for building and sampling a tweet generator.
///
/// Every field has a default, so a partial set of values (for instance an HTTP
/// query string) deserializes into a usable configuration.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
	/// Seed of the pseudo-random generator.
	pub seed: u64,

	/// Number of corpus tokens to read. `None` reads the whole stream.
	pub max_tokens: Option<usize>,

	/// Word cap of a single sentence (start word included).
	pub max_words: usize,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			seed: 0,
			max_tokens: None,
			max_words: DEFAULT_MAX_WORDS,
		}
	}
}

impl GeneratorConfig {
	/// Checks that the settings can produce a sentence.
	///
	/// # Errors
	/// Returns `InvalidConfig` if `max_words < 2`: a sentence is a start word
	/// plus at least one drawn successor.
	pub fn validate(&self) -> Result<()> {
		if self.max_words < 2 {
			return Err(TweetGenError::InvalidConfig(format!(
				"max_words must be >= 2, got {}",
				self.max_words
			)));
		}
		Ok(())
	}
}
