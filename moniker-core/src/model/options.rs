/// Separator used to join the words of a composition when none is given.
pub const DEFAULT_GLUE: &str = "-";

/// Encoding label used to decode word files when none is given.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Options applied while building a `WordList` from a text source.
///
/// # Fields
/// - `max_length`: drop every word with more characters than this value.
///   `None` keeps all words.
/// - `encoding`: WHATWG label of the file encoding (ex. `"latin1"`).
///   `None` means UTF-8. Ignored for in-memory text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordListOptions {
	pub max_length: Option<usize>,
	pub encoding: Option<String>,
}

impl WordListOptions {
	/// Returns the encoding label to decode files with.
	pub(crate) fn encoding_label(&self) -> &str {
		self.encoding.as_deref().unwrap_or(DEFAULT_ENCODING)
	}

	/// Returns `true` if `word` is short enough to be kept.
	///
	/// Lengths are counted in characters, not bytes.
	pub(crate) fn accepts(&self, word: &str) -> bool {
		match self.max_length {
			Some(max) => word.chars().count() <= max,
			None => true,
		}
	}
}

/// Options used when building a `Composer`.
///
/// `word_list` is forwarded to every path or factory source loaded by
/// the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerOptions {
	/// Separator placed between chosen words.
	pub glue: String,

	pub word_list: WordListOptions,
}

impl Default for ComposerOptions {
	fn default() -> Self {
		Self {
			glue: DEFAULT_GLUE.to_owned(),
			word_list: WordListOptions::default(),
		}
	}
}
