use std::fmt;

/// A generated sentence: words in draw order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
	words: Vec<String>,
}

impl Sentence {
	pub(crate) fn new(words: Vec<String>) -> Self {
		Self { words }
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Number of words in the sentence.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn into_words(self) -> Vec<String> {
		self.words
	}
}

/// Words joined by single spaces.
impl fmt::Display for Sentence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.words.join(" "))
	}
}
