use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Opens a corpus file for reading.
///
/// - Fails with `NotFound` (naming the path) if the file does not exist
/// - Fails with `InvalidInput` if the path is a directory
pub fn open_corpus<P: AsRef<Path>>(path: P) -> io::Result<BufReader<File>> {
	let path = path.as_ref();
	if !path.exists() {
		return Err(io::Error::new(
			io::ErrorKind::NotFound,
			format!("corpus file '{}' does not exist", path.display()),
		));
	}
	if path.is_dir() {
		return Err(io::Error::new(
			io::ErrorKind::InvalidInput,
			format!("'{}' is a directory, expected a corpus file", path.display()),
		));
	}
	Ok(BufReader::new(File::open(path)?))
}

/// Iterator over the whitespace-delimited tokens of a text stream.
///
/// The stream is read one line at a time. Tokens are yielded verbatim:
/// punctuation is never stripped, so `"end."` and `"end"` stay distinct.
/// Invalid UTF-8 is surfaced as an `InvalidData` error.
pub struct Tokens<R> {
	reader: R,
	line: String,
	pending: VecDeque<String>,
	exhausted: bool,
}

impl<R: BufRead> Tokens<R> {
	pub fn new(reader: R) -> Self {
		Self {
			reader,
			line: String::new(),
			pending: VecDeque::new(),
			exhausted: false,
		}
	}
}

impl<R: BufRead> Iterator for Tokens<R> {
	type Item = io::Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			if let Some(token) = self.pending.pop_front() {
				return Some(Ok(token));
			}
			if self.exhausted {
				return None;
			}

			self.line.clear();
			match self.reader.read_line(&mut self.line) {
				Ok(0) => {
					self.exhausted = true;
					return None;
				}
				Ok(_) => self.pending.extend(self.line.split_whitespace().map(str::to_owned)),
				Err(e) => {
					self.exhausted = true;
					return Some(Err(e));
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::{Cursor, Write};

	fn collect(text: &str) -> Vec<String> {
		Tokens::new(Cursor::new(text)).collect::<io::Result<Vec<_>>>().unwrap()
	}

	#[test]
	fn splits_on_runs_of_whitespace() {
		assert_eq!(collect("  the   cat\n\nsat. \t end\r\n"), ["the", "cat", "sat.", "end"]);
	}

	#[test]
	fn keeps_punctuation_attached() {
		assert_eq!(collect("end. end, end"), ["end.", "end,", "end"]);
	}

	#[test]
	fn empty_stream_has_no_tokens() {
		assert!(collect("").is_empty());
		assert!(collect(" \n \n").is_empty());
	}

	#[test]
	fn invalid_utf8_is_an_error() {
		let mut tokens = Tokens::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
		let err = tokens.next().unwrap().unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::InvalidData);
		assert!(tokens.next().is_none());
	}

	#[test]
	fn open_corpus_reports_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let err = open_corpus(dir.path().join("missing.txt")).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
		assert!(err.to_string().contains("missing.txt"));
	}

	#[test]
	fn open_corpus_rejects_directory() {
		let dir = tempfile::tempdir().unwrap();
		let err = open_corpus(dir.path()).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
	}

	#[test]
	fn open_corpus_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "hello world.").unwrap();
		let tokens = Tokens::new(open_corpus(file.path()).unwrap())
			.collect::<io::Result<Vec<_>>>()
			.unwrap();
		assert_eq!(tokens, ["hello", "world."]);
	}
}
