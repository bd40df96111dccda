use std::collections::HashMap;

use serde::Serialize;

use super::word_entry::{WordEntry, WordId};

/// Insertion-ordered set of unique corpus words.
///
/// Words are unique by exact text: case and punctuation both matter, so
/// `"word"` and `"word."` are two entries. Entries are stored in an arena and
/// addressed by [`WordId`]; successor links are ids into the same arena.
///
/// # Invariants
/// - No two entries share the same text
/// - `index` maps every entry's text to its id, and nothing else
/// - Successor ids always refer to existing entries
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
	entries: Vec<WordEntry>,
	index: HashMap<String, WordId>,
	/// Number of entries that do not end a sentence.
	starters: usize,
}

/// Summary of a built dictionary.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DictionaryStats {
	pub unique_words: usize,
	pub terminators: usize,
	pub starters: usize,
	pub total_links: usize,
}

impl Dictionary {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of words that may open a sentence (non-terminators).
	pub fn starter_count(&self) -> usize {
		self.starters
	}

	/// Finds the entry with exactly this text.
	pub fn lookup(&self, text: &str) -> Option<&WordEntry> {
		self.index.get(text).map(|id| &self.entries[id.0])
	}

	/// Returns the id of the entry with exactly this text.
	pub fn id_of(&self, text: &str) -> Option<WordId> {
		self.index.get(text).copied()
	}

	pub fn get(&self, id: WordId) -> Option<&WordEntry> {
		self.entries.get(id.0)
	}

	pub(crate) fn entries(&self) -> &[WordEntry] {
		&self.entries
	}

	/// Iterates over entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (WordId, &WordEntry)> {
		self.entries.iter().enumerate().map(|(i, entry)| (WordId(i), entry))
	}

	/// Returns the id of `text`, adding it if unseen.
	///
	/// - Known word: its `occurrence_count` is increased
	/// - New word: appended with `occurrence_count = 1` and no successors
	pub fn insert_or_get(&mut self, text: &str) -> WordId {
		if let Some(&id) = self.index.get(text) {
			self.entries[id.0].count_occurrence();
			return id;
		}

		let id = WordId(self.entries.len());
		let entry = WordEntry::new(text);
		if !entry.is_terminator() {
			self.starters += 1;
		}
		self.entries.push(entry);
		self.index.insert(text.to_owned(), id);
		id
	}

	/// Records that `next` immediately followed `current` once more.
	///
	/// Returns `false`, recording nothing, if either id is not an entry of
	/// this dictionary.
	pub fn record_successor(&mut self, current: WordId, next: WordId) -> bool {
		if next.0 >= self.entries.len() {
			return false;
		}
		match self.entries.get_mut(current.0) {
			Some(entry) => {
				entry.add_successor(next);
				true
			}
			None => false,
		}
	}

	pub fn stats(&self) -> DictionaryStats {
		DictionaryStats {
			unique_words: self.len(),
			terminators: self.len() - self.starters,
			starters: self.starters,
			total_links: self.entries.iter().map(WordEntry::successor_total).sum(),
		}
	}
}
