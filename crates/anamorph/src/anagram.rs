// Anagram pair validation and the one-shot transition-steps driver.

use hashbrown::HashSet;

use anamorph_core::character::{is_punctuation, simple_lower};

use crate::transition::Transition;

/// Error returned when two strings do not form a valid anagram pair.
///
/// Carries both original strings for diagnostics. The fields are named
/// `from`/`to` rather than `source`/`target` because `source` is the
/// error-chain accessor on the `Error` trait.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{from}\" and \"{to}\" are not an anagram")]
pub struct InvalidAnagramError {
    /// The string the transition would have started from.
    pub from: String,
    /// The string the transition would have ended at.
    pub to: String,
}

/// A validated, directional anagram pair.
///
/// Anagrams are directional: the transition methods produce output that
/// morphs `source` into `target`. Both strings are stored exactly as
/// given; preprocessing (punctuation stripping, lower-casing) applies to
/// the validity check only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anagram {
    source: String,
    target: String,
}

/// Collect the distinct comparison characters of a string: punctuation
/// stripped, the rest lower-cased with the simple one-to-one mapping.
fn distinct_characters(s: &str) -> HashSet<char> {
    s.chars()
        .filter(|&c| !is_punctuation(c))
        .map(simple_lower)
        .collect()
}

impl Anagram {
    /// Validate and construct an anagram pair.
    ///
    /// Two strings are considered anagrams when their distinct-character
    /// sets are equal after stripping the punctuation set and
    /// lower-casing. Duplicate counts are intentionally not compared, so
    /// pairs like `("aab", "ab")` validate; the transition engine
    /// resolves the surplus characters through removals and insertions.
    pub fn new(source: &str, target: &str) -> Result<Self, InvalidAnagramError> {
        if distinct_characters(source) != distinct_characters(target) {
            return Err(InvalidAnagramError {
                from: source.to_string(),
                to: target.to_string(),
            });
        }
        Ok(Self {
            source: source.to_string(),
            target: target.to_string(),
        })
    }

    /// Construct a pair without validating it.
    ///
    /// For callers that already hold a known-good pair, or that want to
    /// drive the transition engine over strings the set-based check
    /// rejects (such as an empty string morphing into a word). The
    /// engine itself handles any pair of strings; only the validity
    /// check is skipped.
    pub fn unchecked(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    /// The string the transition starts from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The string the transition ends at.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Compute the full ordered list of intermediate strings.
    ///
    /// The first element is always `source` and the last is always
    /// `target`; each successive element differs from its predecessor by
    /// exactly one atomic edit. When source and target are already
    /// identical (including the empty pair) the list has one element.
    pub fn transition_steps(&self) -> Vec<String> {
        let mut transition = Transition::new(self);
        let mut steps = vec![self.source.clone()];
        while !transition.next() {
            steps.push(transition.current());
        }
        steps
    }
}
