use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use tweet_gen_core::io::open_corpus;
use tweet_gen_core::{GeneratorConfig, TweetGenerator};

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "tweet-gen", about = "Generates random tweets from a text corpus")]
struct Args {
	/// Seed of the random generator. Negative seeds are reinterpreted
	/// bit for bit as unsigned (`-1` seeds with `u64::MAX`).
	#[clap(allow_negative_numbers = true)]
	seed: i64,

	/// Number of tweets to generate. Negative counts generate nothing.
	#[clap(allow_negative_numbers = true)]
	tweets: i64,

	/// Path to the corpus text file.
	path: PathBuf,

	/// Number of words to read from the corpus. Negative or absent reads it all.
	#[clap(allow_negative_numbers = true)]
	words_to_read: Option<i64>,
}

impl Args {
	fn tweet_count(&self) -> usize {
		usize::try_from(self.tweets).unwrap_or(0)
	}

	fn config(&self) -> GeneratorConfig {
		GeneratorConfig {
			seed: self.seed as u64,
			max_tokens: self
				.words_to_read
				.and_then(|words| usize::try_from(words).ok()),
			..Default::default()
		}
	}
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
	let corpus = open_corpus(&args.path)?;
	let mut generator = TweetGenerator::from_reader(corpus, args.config())?;
	info!(
		"read {} tokens from {}",
		generator.tokens_read(),
		args.path.display()
	);

	let stdout = io::stdout();
	let mut out = BufWriter::new(stdout.lock());
	// Tweets are numbered from 1
	for number in 1..=args.tweet_count() {
		let sentence = generator.generate()?;
		writeln!(out, "Tweet {}: {}", number, sentence)?;
	}
	out.flush()?;
	Ok(())
}

fn main() -> ExitCode {
	env_logger::init();
	let args = Args::parse();

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {e}");
			ExitCode::FAILURE
		}
	}
}
