use std::io::BufRead;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::corpus_loader::{CorpusLoader, LoadSummary};
use super::dictionary::Dictionary;
use super::sampler::SentenceSampler;
use super::sentence::Sentence;
use crate::config::GeneratorConfig;
use crate::error::Result;

/// High-level tweet generator.
///
/// # Responsibilities
/// - Build the dictionary from a corpus stream, once
/// - Own the seeded random generator shared by every sentence
/// - Generate sentences on demand
///
/// Tweet numbering is left to the caller. Generation takes `&mut self`, so
/// hosts serving several threads wrap the generator in a `Mutex`.
#[derive(Debug)]
pub struct TweetGenerator {
	dictionary: Dictionary,
	rng: StdRng,
	config: GeneratorConfig,
	summary: LoadSummary,
}

impl TweetGenerator {
	/// Builds a generator from a corpus stream.
	///
	/// Reads up to `config.max_tokens` tokens, then seeds the random
	/// generator with `config.seed`.
	///
	/// # Errors
	/// - `InvalidConfig` if the configuration is rejected by `validate`
	/// - `Io` if the stream cannot be read
	pub fn from_reader<R: BufRead>(reader: R, config: GeneratorConfig) -> Result<Self> {
		config.validate()?;

		let mut dictionary = Dictionary::new();
		let summary = CorpusLoader::new(config.max_tokens).load(reader, &mut dictionary)?;
		info!(
			"dictionary ready: {} unique words from {} tokens",
			dictionary.len(),
			summary.tokens_read
		);

		Ok(Self {
			dictionary,
			rng: StdRng::seed_from_u64(config.seed),
			config,
			summary,
		})
	}

	/// Generates the next sentence.
	///
	/// # Errors
	/// - `EmptyCorpus` if no word can open a sentence
	/// - `MalformedChain` if the walk reaches a word without successor
	pub fn generate(&mut self) -> Result<Sentence> {
		SentenceSampler::new(&self.dictionary)
			.with_max_words(self.config.max_words)?
			.sample(&mut self.rng)
	}

	/// Generates `count` sentences, stopping at the first error.
	pub fn generate_many(&mut self, count: usize) -> Result<Vec<Sentence>> {
		(0..count).map(|_| self.generate()).collect()
	}

	/// Restarts the random sequence from `seed`.
	pub fn reseed(&mut self, seed: u64) {
		self.config.seed = seed;
		self.rng = StdRng::seed_from_u64(seed);
	}

	pub fn dictionary(&self) -> &Dictionary {
		&self.dictionary
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Tokens consumed while loading the corpus.
	pub fn tokens_read(&self) -> usize {
		self.summary.tokens_read
	}
}
