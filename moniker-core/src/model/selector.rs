use super::seeded_stream::SeededStream;
use super::word_list::WordList;
use crate::error::{Error, Result};

/// Picks one word of `word_list` using the next draw of `stream`.
///
/// The emptiness check happens before drawing, so an empty list neither
/// consumes a draw nor reaches the modulo.
///
/// # Errors
/// Returns `Error::EmptyWordList` if `word_list` has no word.
pub fn choose<'a>(stream: &mut SeededStream, word_list: &'a WordList) -> Result<&'a str> {
	if word_list.is_empty() {
		return Err(Error::EmptyWordList { name: word_list.name().to_owned() });
	}
	let index = stream.draw() as usize % word_list.len();
	word_list.pick(index)
}
