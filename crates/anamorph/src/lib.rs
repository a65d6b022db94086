//! Anagram transition engine.
//!
//! Given two strings that are anagrams of each other (case-insensitive,
//! ignoring a fixed punctuation set), this crate computes the ordered
//! sequence of intermediate strings that turns the first into the second
//! one atomic edit at a time: a single case change, one adjacent swap,
//! one removal, or one insertion. The sequence is meant to feed an
//! external animation layer; rendering and timing are out of scope.
//!
//! # Architecture
//!
//! - [`anagram`] -- pair validation ([`Anagram`], [`InvalidAnagramError`])
//!   and the one-shot [`Anagram::transition_steps`] driver
//! - [`transition`] -- the phase-based state machine ([`Transition`])
//!   for incremental, step-at-a-time consumption
//!
//! # Example
//!
//! ```
//! use anamorph::Anagram;
//!
//! let anagram = Anagram::new("Listen", "Silent").unwrap();
//! let steps = anagram.transition_steps();
//! assert_eq!(steps.first().map(String::as_str), Some("Listen"));
//! assert_eq!(steps.last().map(String::as_str), Some("Silent"));
//! ```

pub mod anagram;
pub mod transition;

pub use anagram::{Anagram, InvalidAnagramError};
pub use transition::Transition;
