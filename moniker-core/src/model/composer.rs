use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, trace};

use super::options::{ComposerOptions, WordListOptions};
use super::seeded_stream::SeededStream;
use super::selector;
use super::word_list::WordList;
use crate::error::{Error, Result};

/// Number of selections tried per category before giving up on a
/// composition.
pub const MAX_TRIES: usize = 10;

/// Factory building a word list from the composer's word list options.
pub type WordListFactory = Box<dyn FnOnce(&WordListOptions) -> WordList>;

/// Every way a word list can be handed to a `Composer`.
///
/// # Variants
/// - `List`: an already built list, possibly shared with other composers.
/// - `Path`: a text file to load.
/// - `Factory`: a function returning a list (ex. `builtin::noun`).
pub enum WordListSource {
	List(Arc<WordList>),
	Path(PathBuf),
	Factory(WordListFactory),
}

impl WordListSource {
	/// Wraps a factory function.
	pub fn factory<F>(factory: F) -> Self
	where
		F: FnOnce(&WordListOptions) -> WordList + 'static,
	{
		Self::Factory(Box::new(factory))
	}

	/// Turns the source into a word list.
	///
	/// # Errors
	/// Returns `Error::SourceRead` if a `Path` source cannot be read.
	fn resolve(self, options: &WordListOptions) -> Result<Arc<WordList>> {
		match self {
			Self::List(list) => Ok(list),
			Self::Path(path) => Ok(Arc::new(WordList::load(path, options)?)),
			Self::Factory(factory) => Ok(Arc::new(factory(options))),
		}
	}
}

impl fmt::Debug for WordListSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::List(list) => f.debug_tuple("List").field(&list.name()).finish(),
			Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
			Self::Factory(_) => f.write_str("Factory"),
		}
	}
}

impl From<WordList> for WordListSource {
	fn from(list: WordList) -> Self {
		Self::List(Arc::new(list))
	}
}

impl From<Arc<WordList>> for WordListSource {
	fn from(list: Arc<WordList>) -> Self {
		Self::List(list)
	}
}

impl From<PathBuf> for WordListSource {
	fn from(path: PathBuf) -> Self {
		Self::Path(path)
	}
}

impl From<&Path> for WordListSource {
	fn from(path: &Path) -> Self {
		Self::Path(path.to_path_buf())
	}
}

/// Builds multi-word names out of several word lists.
///
/// # Responsibilities
/// - Keep word lists in insertion order
/// - Draw one word per list from a single stream per composition
/// - Avoid picking the same word twice within one composition
/// - Join the chosen words with the glue
///
/// # Notes
/// - `choose` only needs `&self`, so a filled composer can be shared
///   between threads.
#[derive(Debug, Clone)]
pub struct Composer {
	word_lists: Vec<Arc<WordList>>,
	glue: String,
}

impl Default for Composer {
	fn default() -> Self {
		Self::new(&ComposerOptions::default())
	}
}

impl Composer {
	/// Creates an empty composer using `options.glue`.
	pub fn new(options: &ComposerOptions) -> Self {
		Self { word_lists: Vec::new(), glue: options.glue.clone() }
	}

	pub fn glue(&self) -> &str {
		&self.glue
	}

	pub fn word_lists(&self) -> &[Arc<WordList>] {
		&self.word_lists
	}

	pub fn len(&self) -> usize {
		self.word_lists.len()
	}

	pub fn is_empty(&self) -> bool {
		self.word_lists.is_empty()
	}

	/// Appends a word list after resolving its source.
	///
	/// `options` is used to load `Path` sources and is passed to factories.
	///
	/// # Errors
	/// Returns `Error::SourceRead` if a `Path` source cannot be read.
	pub fn add_word_list<S>(&mut self, source: S, options: &WordListOptions) -> Result<&mut Self>
	where
		S: Into<WordListSource>,
	{
		let list = source.into().resolve(options)?;
		self.word_lists.push(list);
		Ok(self)
	}

	/// Appends an already built word list.
	pub fn with_word_list<L: Into<Arc<WordList>>>(mut self, list: L) -> Self {
		self.word_lists.push(list.into());
		self
	}

	/// Composes one name.
	///
	/// # Parameters
	/// - `seed`: same seed, same name. `None` gives a non-reproducible name.
	///
	/// # Behavior
	/// - One list: its chosen word is returned as-is.
	/// - Several lists: a single stream feeds every draw. For each list,
	///   a word already chosen in this composition is redrawn, up to
	///   `MAX_TRIES` draws per list.
	///
	/// # Errors
	/// - `Error::NoWordLists` if no list was added.
	/// - `Error::EmptyWordList` if a list has no word.
	/// - `Error::TooManyTries` if a list only produced already used words.
	pub fn choose(&self, seed: Option<&str>) -> Result<String> {
		let mut stream = SeededStream::new(seed);

		match self.word_lists.as_slice() {
			[] => Err(Error::NoWordLists),
			[list] => Ok(selector::choose(&mut stream, list)?.to_owned()),
			lists => {
				let mut used: HashSet<&str> = HashSet::with_capacity(lists.len());
				let mut sequence: Vec<&str> = Vec::with_capacity(lists.len());

				for list in lists {
					let word = Self::choose_unused(&mut stream, list, &used)?;
					used.insert(word);
					sequence.push(word);
				}

				let name = sequence.join(self.glue.as_str());
				debug!("composed '{name}' from {} word lists", lists.len());
				Ok(name)
			}
		}
	}

	/// Draws from `list` until a word absent from `used` comes out.
	fn choose_unused<'a>(
		stream: &mut SeededStream,
		list: &'a WordList,
		used: &HashSet<&str>,
	) -> Result<&'a str> {
		for attempt in 1..=MAX_TRIES {
			let word = selector::choose(stream, list)?;
			if !used.contains(word) {
				return Ok(word);
			}
			trace!("'{word}' already used, attempt {attempt}/{MAX_TRIES} on '{}'", list.name());
		}
		debug!("no unique word found in '{}' after {MAX_TRIES} attempts", list.name());
		Err(Error::TooManyTries { tries: MAX_TRIES })
	}
}

/// Builds a composer from several sources, in order.
///
/// Path and factory sources are loaded with `options.word_list`.
///
/// # Errors
/// Returns `Error::SourceRead` if a `Path` source cannot be read.
pub fn generator<I>(sources: I, options: &ComposerOptions) -> Result<Composer>
where
	I: IntoIterator,
	I::Item: Into<WordListSource>,
{
	let mut composer = Composer::new(options);
	for source in sources {
		composer.add_word_list(source, &options.word_list)?;
	}
	Ok(composer)
}
