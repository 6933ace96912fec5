use std::path::Path;

use log::{debug, warn};

use super::options::WordListOptions;
use super::seeded_stream::SeededStream;
use super::selector;
use crate::error::{Error, Result};
use crate::io::{get_filename, read_source, strip_bom};

/// Ordered, immutable pool of candidate words for one naming category.
///
/// # Responsibilities
/// - Build the pool from a whitespace separated text source
/// - Capitalize every entry
/// - Expose words by index (modulo the pool size)
///
/// # Invariants
/// - Words keep the order of the source
/// - No entry is empty or whitespace-only
/// - Duplicates of the source are kept as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
	/// Category label (file stem or built-in category name).
	name: String,

	words: Vec<String>,
}

impl WordList {
	/// Builds a word list from an in-memory text source.
	///
	/// # Parameters
	/// - `name`: label of the category, used in logs and errors.
	/// - `text`: words separated by any run of whitespace. A leading byte
	///   order mark is ignored.
	/// - `options`: words longer than `options.max_length` are dropped.
	pub fn from_text(name: &str, text: &str, options: &WordListOptions) -> Self {
		let words: Vec<String> = strip_bom(text)
			.split_whitespace()
			.filter(|word| options.accepts(word))
			.map(capitalize)
			.collect();

		if words.is_empty() {
			warn!("word list '{name}' has no usable word");
		}

		Self { name: name.to_owned(), words }
	}

	/// Loads a word list from a text file.
	///
	/// The list is named after the file stem (`dict/nouns.txt` → `nouns`).
	/// The file is decoded with `options.encoding` (UTF-8 by default).
	///
	/// # Errors
	/// Returns `Error::SourceRead` if the file cannot be read, the encoding
	/// label is unknown or the content does not decode.
	pub fn load<P: AsRef<Path>>(path: P, options: &WordListOptions) -> Result<Self> {
		let path = path.as_ref();
		let text = read_source(path, options.encoding_label())?;
		let list = Self::from_text(&get_filename(path), &text, options);
		debug!("loaded {} words from {}", list.len(), path.display());
		Ok(list)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Returns the word at `index` modulo the list size.
	///
	/// # Errors
	/// Returns `Error::EmptyWordList` if the list has no word.
	pub fn pick(&self, index: usize) -> Result<&str> {
		if self.words.is_empty() {
			return Err(Error::EmptyWordList { name: self.name.clone() });
		}
		Ok(&self.words[index % self.words.len()])
	}

	/// Picks one word using a stream derived from `seed`.
	///
	/// Same seed, same word. `None` picks a non-reproducible word.
	pub fn choose(&self, seed: Option<&str>) -> Result<&str> {
		let mut stream = SeededStream::new(seed);
		selector::choose(&mut stream, self)
	}
}

/// Upper-cases the first character of `word`.
///
/// Empty input is returned unchanged.
pub(crate) fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	fn list(words: &str) -> WordList {
		WordList::from_text("test", words, &WordListOptions::default())
	}

	#[test]
	fn capitalize_first_letter() {
		assert_eq!(capitalize("falcon"), "Falcon");
		assert_eq!(capitalize("Purple"), "Purple");
		assert_eq!(capitalize("élan"), "Élan");
		assert_eq!(capitalize(""), "");
	}

	#[test]
	fn from_text_splits_on_any_whitespace() {
		let words = list("  red\tblue\n\ngreen \r\n  yellow ");
		assert_eq!(words.words(), ["Red", "Blue", "Green", "Yellow"]);
	}

	#[test]
	fn from_text_keeps_duplicates() {
		assert_eq!(list("cat dog cat").words(), ["Cat", "Dog", "Cat"]);
	}

	#[test]
	fn from_text_filters_by_max_length() {
		let options = WordListOptions { max_length: Some(2), ..WordListOptions::default() };
		let words = WordList::from_text("test", "a bb ccc", &options);
		assert_eq!(words.words(), ["A", "Bb"]);
	}

	#[test]
	fn load_names_list_after_file_stem() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("colors.txt");
		let mut file = std::fs::File::create(&path).unwrap();
		writeln!(file, "red\nblue").unwrap();

		let words = WordList::load(&path, &WordListOptions::default()).unwrap();
		assert_eq!(words.name(), "colors");
		assert_eq!(words.words(), ["Red", "Blue"]);
	}

	#[test]
	fn from_text_ignores_leading_bom() {
		assert_eq!(list("\u{feff}red blue").words(), ["Red", "Blue"]);
	}

	#[test]
	fn load_decodes_latin1_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("food.txt");
		std::fs::write(&path, b"caf\xe9").unwrap();

		let options = WordListOptions {
			encoding: Some("latin1".to_owned()),
			..WordListOptions::default()
		};
		let words = WordList::load(&path, &options).unwrap();
		assert_eq!(words.words(), ["Café"]);
	}

	#[test]
	fn load_with_unknown_encoding_fails() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("food.txt");
		std::fs::write(&path, b"cafe").unwrap();

		let options = WordListOptions {
			encoding: Some("no-such-charset".to_owned()),
			..WordListOptions::default()
		};
		let result = WordList::load(&path, &options);
		assert!(matches!(result, Err(Error::SourceRead { .. })));
	}

	#[test]
	fn load_missing_file_fails() {
		let dir = tempfile::tempdir().unwrap();
		let result = WordList::load(dir.path().join("nope.txt"), &WordListOptions::default());
		assert!(matches!(result, Err(Error::SourceRead { .. })));
	}

	#[test]
	fn pick_wraps_index() {
		let words = list("red blue green");
		assert_eq!(words.pick(0).unwrap(), "Red");
		assert_eq!(words.pick(4).unwrap(), "Blue");
		assert_eq!(words.pick(usize::MAX).unwrap(), "Red");
	}

	#[test]
	fn pick_on_empty_list_fails() {
		let words = list("   \n\t");
		assert!(words.is_empty());
		assert!(matches!(words.pick(3), Err(Error::EmptyWordList { .. })));
	}

	#[test]
	fn choose_is_deterministic() {
		let words = list("red blue green yellow purple");
		let first = words.choose(Some("falcon")).unwrap();
		for _ in 0..10 {
			assert_eq!(words.choose(Some("falcon")).unwrap(), first);
		}
	}

	#[test]
	fn choose_without_seed_returns_member() {
		let words = list("red blue green");
		let word = words.choose(None).unwrap();
		assert!(words.words().iter().any(|w| w == word));
	}
}
