use std::io::BufRead;

use log::debug;

use super::dictionary::Dictionary;
use super::word_entry::{WordId, is_terminator};
use crate::error::Result;
use crate::io::Tokens;

/// Outcome of a successful load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadSummary {
	/// Tokens consumed from the stream (bounded by the token limit).
	pub tokens_read: usize,
}

/// Feeds a token stream into a [`Dictionary`].
///
/// Every token is added to the dictionary and linked as the successor of the
/// token before it. A token ending with `.` closes the chain: it is never the
/// source of a link, and the next token starts fresh.
#[derive(Clone, Copy, Debug, Default)]
pub struct CorpusLoader {
	max_tokens: Option<usize>,
}

impl CorpusLoader {
	/// Creates a loader reading at most `max_tokens` tokens (`None` for all).
	pub fn new(max_tokens: Option<usize>) -> Self {
		Self { max_tokens }
	}

	/// Reads tokens from `reader` into `dictionary` until the stream ends or
	/// the token limit is reached.
	///
	/// Running out of tokens before the limit is not an error.
	///
	/// # Errors
	/// Returns `Io` if the stream cannot be read. The dictionary must then be
	/// discarded: it holds only part of the corpus.
	pub fn load<R: BufRead>(&self, reader: R, dictionary: &mut Dictionary) -> Result<LoadSummary> {
		let mut previous: Option<WordId> = None;
		let mut tokens_read = 0;

		for token in Tokens::new(reader) {
			if self.max_tokens.is_some_and(|max| tokens_read >= max) {
				break;
			}
			let token = token?;
			tokens_read += 1;

			let id = dictionary.insert_or_get(&token);
			if let Some(previous) = previous {
				dictionary.record_successor(previous, id);
			}

			previous = if is_terminator(&token) { None } else { Some(id) };
		}

		let stats = dictionary.stats();
		debug!(
			"loaded {} tokens: {} unique words, {} terminators, {} links",
			tokens_read, stats.unique_words, stats.terminators, stats.total_links
		);

		Ok(LoadSummary { tokens_read })
	}
}
