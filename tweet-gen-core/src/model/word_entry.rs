use rand::Rng;

/// Index of a word inside its [`Dictionary`](super::dictionary::Dictionary).
///
/// Ids are assigned in insertion order and never move, so they stay valid
/// while the dictionary grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub(crate) usize);

impl WordId {
	/// Position of the word in insertion order.
	pub fn index(self) -> usize {
		self.0
	}
}

/// One observed follower of a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Successor {
	/// The word that followed.
	pub word: WordId,
	/// How many times it followed. Always >= 1.
	pub repetitions: usize,
}

/// A unique word of the corpus and its successor distribution.
///
/// Conceptually a node of a first-order Markov chain: outgoing edges point
/// to the words that immediately followed this one, weighted by how often
/// they did.
///
/// ## Invariants
/// - `successors` holds at most one entry per successor word
/// - Every repetition count is strictly positive
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
	/// Exact surface form, trailing punctuation included.
	text: String,
	/// Number of times the word appeared in the corpus.
	occurrence_count: usize,
	/// Outgoing transitions in first-seen order.
	successors: Vec<Successor>,
}

/// Returns `true` if the word closes a sentence (its text ends with `.`).
pub fn is_terminator(text: &str) -> bool {
	text.ends_with('.')
}

impl WordEntry {
	/// Creates the entry of a word seen for the first time.
	pub(crate) fn new(text: &str) -> Self {
		Self {
			text: text.to_owned(),
			occurrence_count: 1,
			successors: Vec::new(),
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn occurrence_count(&self) -> usize {
		self.occurrence_count
	}

	pub fn successors(&self) -> &[Successor] {
		&self.successors
	}

	/// Returns `true` if the word ends a sentence.
	pub fn is_terminator(&self) -> bool {
		is_terminator(&self.text)
	}

	/// Repetition count of `next` after this word, 0 if it never followed.
	pub fn repetitions_of(&self, next: WordId) -> usize {
		self.successors
			.iter()
			.find(|successor| successor.word == next)
			.map_or(0, |successor| successor.repetitions)
	}

	/// Sum of all repetition counts.
	pub fn successor_total(&self) -> usize {
		self.successors.iter().map(|successor| successor.repetitions).sum()
	}

	pub(crate) fn count_occurrence(&mut self) {
		self.occurrence_count += 1;
	}

	/// Records one more occurrence of `next` following this word.
	pub(crate) fn add_successor(&mut self, next: WordId) {
		match self.successors.iter_mut().find(|successor| successor.word == next) {
			Some(successor) => successor.repetitions += 1,
			None => self.successors.push(Successor { word: next, repetitions: 1 }),
		}
	}

	/// Picks a successor with probability proportional to its repetition count.
	///
	/// Draws `r` uniformly in `[0, total)` then walks the successors,
	/// accumulating counts until the running sum exceeds `r`.
	///
	/// Returns `None` if the word has no successor.
	pub fn pick_successor<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<WordId> {
		let total = self.successor_total();
		if total == 0 {
			return None;
		}

		let r = rng.random_range(0..total);
		let mut running = 0;
		for successor in &self.successors {
			running += successor.repetitions;
			if r < running {
				return Some(successor.word);
			}
		}

		// Unreachable while the counts sum to `total`
		self.successors.last().map(|successor| successor.word)
	}
}
