use log::{trace, warn};
use rand::Rng;

use super::dictionary::Dictionary;
use super::sentence::Sentence;
use super::word_entry::{WordEntry, WordId};
use crate::config::DEFAULT_MAX_WORDS;
use crate::error::{Result, TweetGenError};

/// Draws sentences from a built [`Dictionary`] without modifying it.
///
/// A sentence starts on a word drawn uniformly among the dictionary entries
/// that do not end with `.`, then walks the chain: each next word is drawn
/// from the current word's successors, weighted by repetition count. The walk
/// stops on a word ending with `.` or once `max_words` words are drawn.
///
/// The sampler owns no randomness; the caller supplies (and seeds) the
/// generator, so the same seed over the same dictionary replays the same
/// sentences.
#[derive(Clone, Copy, Debug)]
pub struct SentenceSampler<'a> {
	dictionary: &'a Dictionary,
	max_words: usize,
}

impl<'a> SentenceSampler<'a> {
	/// Creates a sampler with the default cap of 20 words.
	pub fn new(dictionary: &'a Dictionary) -> Self {
		Self { dictionary, max_words: DEFAULT_MAX_WORDS }
	}

	/// Overrides the word cap.
	///
	/// # Errors
	/// Returns `InvalidConfig` if `max_words < 2`, like
	/// [`GeneratorConfig::validate`](crate::config::GeneratorConfig::validate).
	pub fn with_max_words(mut self, max_words: usize) -> Result<Self> {
		if max_words < 2 {
			return Err(TweetGenError::InvalidConfig(format!(
				"max_words must be >= 2, got {max_words}"
			)));
		}
		self.max_words = max_words;
		Ok(self)
	}

	/// Draws the opening word uniformly over all entries, redrawing while the
	/// draw is a terminator.
	///
	/// # Errors
	/// Returns `EmptyCorpus` if no entry can open a sentence. The check runs
	/// before drawing, so the rejection loop always ends.
	pub fn first_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<WordId> {
		if self.dictionary.starter_count() == 0 {
			return Err(TweetGenError::EmptyCorpus);
		}

		loop {
			let id = WordId(rng.random_range(0..self.dictionary.len()));
			if !self.entry(id).is_terminator() {
				return Ok(id);
			}
		}
	}

	/// Draws the word following `current`, weighted by repetition count.
	///
	/// # Errors
	/// Returns `MalformedChain` if `current` has no successor (the corpus
	/// ended on it, or the token limit cut it off).
	pub fn next_word<R: Rng + ?Sized>(&self, current: WordId, rng: &mut R) -> Result<WordId> {
		let entry = self.entry(current);
		entry.pick_successor(rng).ok_or_else(|| {
			warn!("chain broken at '{}': no successor recorded", entry.text());
			TweetGenError::MalformedChain(entry.text().to_owned())
		})
	}

	/// Generates one sentence of 2 to `max_words` words.
	///
	/// The last word ends with `.` unless the cap was reached.
	///
	/// # Errors
	/// - `EmptyCorpus` if no word can open a sentence
	/// - `MalformedChain` if the walk reaches a word without successor
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Sentence> {
		let mut current = self.first_word(rng)?;
		let mut words = vec![self.entry(current).text().to_owned()];

		loop {
			let next = self.next_word(current, rng)?;
			let entry = self.entry(next);
			words.push(entry.text().to_owned());

			if entry.is_terminator() || words.len() >= self.max_words {
				break;
			}
			current = next;
		}

		trace!("sampled {} words: {:?}", words.len(), words);
		Ok(Sentence::new(words))
	}

	// Ids handed out by the dictionary are always in range.
	fn entry(&self, id: WordId) -> &WordEntry {
		&self.dictionary.entries()[id.0]
	}
}
