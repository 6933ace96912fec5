use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for word list loading and name composition.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading word lists or composing names.
#[derive(Debug, Error)]
pub enum Error {
	/// The backing text source could not be read (missing file, permission,
	/// unknown encoding, malformed data).
	#[error("cannot read word list {}: {}", .path.display(), .source)]
	SourceRead {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A selection was attempted on a word list without any entry.
	#[error("empty word list '{name}'")]
	EmptyWordList { name: String },

	/// A composer was asked for a name before any word list was added.
	#[error("no available word lists")]
	NoWordLists,

	/// Every attempt for one category picked a word already used in the
	/// same composition.
	#[error("too many tries to find a unique word ({tries} attempts)")]
	TooManyTries { tries: usize },
}
