//! Word selection and name composition.
//!
//! This module groups the building blocks of a name:
//! - Word pools for one category (`WordList`)
//! - Seeded draw sequences (`SeededStream`)
//! - Index selection from a draw (`selector`)
//! - Multi-category composition with collision avoidance (`Composer`)
//! - Loading and joining options (`WordListOptions`, `ComposerOptions`)

/// Composition of several word lists into one joined name.
///
/// Draws every category from a single stream and retries words already
/// used in the same composition.
pub mod composer;

/// Loading and joining options.
pub mod options;

/// Deterministic `u32` stream derived from a seed string.
pub mod seeded_stream;

/// Maps a draw to a word of a list.
pub mod selector;

/// Immutable pool of capitalized words for one category.
pub mod word_list;
