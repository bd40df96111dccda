//! First-order Markov chain over corpus words.
//!
//! - Words and their successor counts (`WordEntry`, `Dictionary`)
//! - Corpus ingestion (`CorpusLoader`)
//! - Sentence sampling (`SentenceSampler`)
//! - A high-level, seeded generator (`TweetGenerator`)

/// Seeded generator tying loading and sampling together.
pub mod generator;

/// Word arena, unique by exact text.
pub mod dictionary;

/// Token stream to dictionary ingestion.
///
/// Links each token to the one before it, resetting the chain after every
/// word ending with a period.
pub mod corpus_loader;

/// Start-word and chain-walk sampling.
pub mod sampler;

/// Generated sentence value.
pub mod sentence;

/// A single word and its weighted successors.
pub mod word_entry;
