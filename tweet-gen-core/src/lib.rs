//! Markov chain tweet generation library.
//!
//! This crate builds a first-order, word-level Markov chain from a text
//! corpus and samples random sentences ("tweets") from it:
//! - Whitespace tokenization, punctuation kept on the word
//! - Successor counts per unique word
//! - Uniform start-word draw, weighted chain walk
//! - Seeded, reproducible generation
//!
//! Loading and sampling never open files; drivers hand over an open stream
//! (see [`io::open_corpus`]) and print what comes back.

/// Word model, loader, sampler and generator.
pub mod model;

/// Generator settings.
pub mod config;

/// Crate error type.
pub mod error;

/// Token streams and corpus file helpers.
pub mod io;

pub use config::GeneratorConfig;
pub use error::{Result, TweetGenError};
pub use model::generator::TweetGenerator;
pub use model::sentence::Sentence;
