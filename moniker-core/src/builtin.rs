use std::path::Path;
use std::sync::LazyLock;

use log::debug;

use crate::error::Result;
use crate::model::composer::Composer;
use crate::model::options::{ComposerOptions, WordListOptions};
use crate::model::word_list::WordList;

const NOUNS: &str = include_str!("../dict/nouns.txt");
const VERBS: &str = include_str!("../dict/verbs.txt");
const ADJECTIVES: &str = include_str!("../dict/adjectives.txt");

/// Default adjective + noun composer, built on first use and kept for the
/// whole process.
static NAMES: LazyLock<Composer> = LazyLock::new(|| {
	let options = WordListOptions::default();
	let composer = Composer::new(&ComposerOptions::default())
		.with_word_list(adjective(&options))
		.with_word_list(noun(&options));
	debug!("default name generator ready");
	composer
});

/// Built-in noun list.
pub fn noun(options: &WordListOptions) -> WordList {
	WordList::from_text("nouns", NOUNS, options)
}

/// Built-in verb list.
pub fn verb(options: &WordListOptions) -> WordList {
	WordList::from_text("verbs", VERBS, options)
}

/// Built-in adjective list.
pub fn adjective(options: &WordListOptions) -> WordList {
	WordList::from_text("adjectives", ADJECTIVES, options)
}

/// Loads a word list from a text file.
///
/// Shortcut for `WordList::load`.
pub fn read<P: AsRef<Path>>(path: P, options: &WordListOptions) -> Result<WordList> {
	WordList::load(path, options)
}

/// Chooses an `Adjective-Noun` name with the default generator.
///
/// The generator is created on the first call, from any thread, and
/// reused afterwards.
///
/// # Errors
/// Only fails if every draw for the noun hits the chosen adjective, which
/// the disjoint built-in lists rule out.
pub fn choose_name(seed: Option<&str>) -> Result<String> {
	NAMES.choose(seed)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn builtin_lists_are_loaded() {
		let options = WordListOptions::default();
		for list in [noun(&options), verb(&options), adjective(&options)] {
			assert!(list.len() > 50, "{} is too small", list.name());
			assert!(list.words().iter().all(|w| w.chars().next().is_some_and(char::is_uppercase)));
		}
	}

	#[test]
	fn builtin_lists_honour_max_length() {
		let options = WordListOptions { max_length: Some(4), ..WordListOptions::default() };
		let nouns = noun(&options);
		assert!(!nouns.is_empty());
		assert!(nouns.words().iter().all(|w| w.chars().count() <= 4));
	}

	#[test]
	fn adjectives_and_nouns_are_disjoint() {
		let options = WordListOptions::default();
		let adjectives: HashSet<String> = adjective(&options).words().iter().cloned().collect();
		assert!(noun(&options).words().iter().all(|w| !adjectives.contains(w)));
	}

	#[test]
	fn choose_name_is_reproducible() {
		let name = choose_name(Some("alice")).unwrap();
		assert_eq!(choose_name(Some("alice")).unwrap(), name);

		let (first, second) = name.split_once('-').unwrap();
		let options = WordListOptions::default();
		assert!(adjective(&options).words().iter().any(|w| w == first));
		assert!(noun(&options).words().iter().any(|w| w == second));
	}

	#[test]
	fn choose_name_from_many_threads() {
		let handles: Vec<_> = (0..4)
			.map(|_| std::thread::spawn(|| choose_name(Some("shared")).unwrap()))
			.collect();
		let names: HashSet<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
		assert_eq!(names.len(), 1);
	}
}
