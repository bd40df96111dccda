use std::collections::HashMap;
use std::io::Cursor;

use rand::SeedableRng;
use rand::rngs::StdRng;

use tweet_gen_core::model::corpus_loader::CorpusLoader;
use tweet_gen_core::model::dictionary::Dictionary;
use tweet_gen_core::model::sampler::SentenceSampler;
use tweet_gen_core::model::word_entry::is_terminator;
use tweet_gen_core::{GeneratorConfig, TweetGenError, TweetGenerator};

const CORPUS: &str = "\
It was the best of times, it was the worst of times.
It was the age of wisdom, it was the age of foolishness.
We had everything before us, we had nothing before us.
We were all going direct to Heaven, we were all going direct the other way.
the the the the the the the the the the the the the the the the the the the the the the end.
";

fn load(text: &str) -> Dictionary {
	let mut dictionary = Dictionary::new();
	CorpusLoader::default().load(Cursor::new(text), &mut dictionary).unwrap();
	dictionary
}

fn successor_table(dictionary: &Dictionary) -> Vec<(String, Vec<(String, usize)>)> {
	dictionary
		.iter()
		.map(|(_, entry)| {
			let successors = entry
				.successors()
				.iter()
				.map(|successor| {
					let word = dictionary.get(successor.word).unwrap().text().to_owned();
					(word, successor.repetitions)
				})
				.collect();
			(entry.text().to_owned(), successors)
		})
		.collect()
}

#[test]
fn sentences_respect_length_and_boundaries() {
	let dictionary = load(CORPUS);
	let sampler = SentenceSampler::new(&dictionary);

	for seed in 0..64 {
		let mut rng = StdRng::seed_from_u64(seed);
		for _ in 0..20 {
			let sentence = sampler.sample(&mut rng).unwrap();
			let words = sentence.words();

			assert!((2..=20).contains(&words.len()), "bad length {}", words.len());
			assert!(!is_terminator(&words[0]), "opened on terminator: {sentence}");
			let last = words.last().unwrap();
			assert!(is_terminator(last) || words.len() == 20, "stopped early: {sentence}");
			assert!(words[..words.len() - 1].iter().all(|word| !is_terminator(word)));
		}
	}
}

#[test]
fn successor_sums_match_corpus_positions() {
	let dictionary = load(CORPUS);

	// Count, for every token, how often it was followed while not a terminator.
	let tokens: Vec<&str> = CORPUS.split_whitespace().collect();
	let mut expected: HashMap<&str, usize> = HashMap::new();
	for pair in tokens.windows(2) {
		if !is_terminator(pair[0]) {
			*expected.entry(pair[0]).or_default() += 1;
		}
	}

	for (_, entry) in dictionary.iter() {
		let want = expected.get(entry.text()).copied().unwrap_or(0);
		assert_eq!(entry.successor_total(), want, "word '{}'", entry.text());
		assert!(entry.successors().iter().all(|successor| successor.repetitions >= 1));
	}
}

#[test]
fn occurrence_counts_match_corpus() {
	let dictionary = load(CORPUS);
	let total: usize = dictionary.iter().map(|(_, entry)| entry.occurrence_count()).sum();
	assert_eq!(total, CORPUS.split_whitespace().count());
	assert_eq!(dictionary.lookup("the").unwrap().occurrence_count(), 27);
}

#[test]
fn loading_twice_gives_identical_tables() {
	assert_eq!(successor_table(&load(CORPUS)), successor_table(&load(CORPUS)));
}

#[test]
fn same_seed_same_sentences() {
	let dictionary = load(CORPUS);
	let sampler = SentenceSampler::new(&dictionary);
	let run = |seed| {
		let mut rng = StdRng::seed_from_u64(seed);
		(0..30).map(|_| sampler.sample(&mut rng).unwrap()).collect::<Vec<_>>()
	};
	assert_eq!(run(99), run(99));
}

#[test]
fn the_cat_sat_example() {
	let dictionary = load("the cat sat. the dog ran.");
	let sampler = SentenceSampler::new(&dictionary);
	let legal = ["the cat sat.", "the dog ran.", "cat sat.", "dog ran."];

	let mut produced = Vec::new();
	for seed in 0..256 {
		let mut rng = StdRng::seed_from_u64(seed);
		let sentence = sampler.sample(&mut rng).unwrap();
		let text = sentence.to_string();
		assert!(legal.contains(&text.as_str()), "unexpected sentence {text}");
		if text == "the cat sat." {
			assert_eq!(sentence.len(), 3);
		}
		produced.push(text);
	}

	for sentence in legal {
		assert!(produced.iter().any(|text| text == sentence), "never produced '{sentence}'");
	}
}

#[test]
fn zero_tokens_is_empty_corpus() {
	let config = GeneratorConfig { max_tokens: Some(0), ..Default::default() };
	let mut generator = TweetGenerator::from_reader(Cursor::new(CORPUS), config).unwrap();
	assert!(generator.dictionary().is_empty());
	assert!(matches!(generator.generate(), Err(TweetGenError::EmptyCorpus)));
}

#[test]
fn truncated_chain_is_malformed_not_a_sentence() {
	// Only "alpha beta" survive the limit: "beta" has no follower.
	let config = GeneratorConfig { max_tokens: Some(2), ..Default::default() };
	let mut generator = TweetGenerator::from_reader(Cursor::new("alpha beta gamma."), config).unwrap();

	let mut broke = false;
	for _ in 0..50 {
		match generator.generate() {
			Ok(sentence) => panic!("no legal sentence exists, got {sentence}"),
			Err(TweetGenError::MalformedChain(word)) => {
				assert_eq!(word, "beta");
				broke = true;
			}
			Err(other) => panic!("unexpected error {other}"),
		}
	}
	assert!(broke);
}
