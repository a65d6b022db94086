//! Shared character utilities for the anamorph anagram engine.
//!
//! Everything the engine needs to reason about individual characters
//! lives here: the simple one-to-one case mapping, case predicates,
//! case-insensitive comparison, and the punctuation set that is ignored
//! when two strings are compared as anagrams.

pub mod character;

pub use character::{
    PUNCTUATION, eq_ignore_case, equals_ignore_case, is_lower, is_punctuation, is_upper,
    simple_lower, simple_upper,
};
