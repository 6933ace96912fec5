//! Deterministic human-readable name generation.
//!
//! This crate builds identifiers such as `"Purple-Falcon"` by combining
//! words taken from several word lists:
//! - Word lists loaded from whitespace separated text
//! - A seeded stream so that the same seed always gives the same name
//! - Collision avoidance between categories of one name
//! - Built-in adjective, noun and verb lists with a cached default generator
//!
//! ```
//! use moniker_core::{adjective, noun, WordListOptions};
//! use moniker_core::model::composer::Composer;
//!
//! let options = WordListOptions::default();
//! let composer = Composer::default()
//! 	.with_word_list(adjective(&options))
//! 	.with_word_list(noun(&options));
//! let name = composer.choose(Some("alice")).unwrap();
//! assert_eq!(name, composer.choose(Some("alice")).unwrap());
//! ```

/// Word lists, seeded streams and composition.
pub mod model;

/// Built-in word lists and the process-wide name shortcut.
pub mod builtin;

/// Crate error type.
pub mod error;

/// I/O utilities (word source loading).
///
/// Not exposed
pub(crate) mod io;

pub use builtin::{adjective, choose_name, noun, read, verb};
pub use error::{Error, Result};
pub use model::composer::{generator, Composer, WordListSource};
pub use model::options::{ComposerOptions, WordListOptions};
pub use model::seeded_stream::SeededStream;
pub use model::word_list::WordList;
