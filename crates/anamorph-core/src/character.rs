// Character-level utilities: simple case mapping and the punctuation set.

// ---------------------------------------------------------------------------
// Punctuation
// ---------------------------------------------------------------------------

/// Characters ignored when two strings are compared as anagrams.
///
/// Punctuation is stripped for the validity check only; the transition
/// engine still tracks these characters like any others.
pub const PUNCTUATION: &[char] = &['.', '!', '?', ' ', '-', '@'];

/// Check whether a character belongs to the ignored punctuation set.
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to multiple characters. The engine only
// supports the simple one-to-one mapping, so we take the first character
// and keep string lengths stable across case edits.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character of the expansion.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

// ---------------------------------------------------------------------------
// Case-insensitive comparison
// ---------------------------------------------------------------------------

/// Compare two characters for equality, ignoring case.
pub fn eq_ignore_case(a: char, b: char) -> bool {
    simple_lower(a) == simple_lower(b)
}

/// Compare two character slices for equality, ignoring character case.
pub fn equals_ignore_case(a: &[char], b: &[char]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .all(|(&ca, &cb)| simple_lower(ca) == simple_lower(cb))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Punctuation --

    #[test]
    fn punctuation_set_members() {
        for &c in PUNCTUATION {
            assert!(is_punctuation(c), "{c:?} should be punctuation");
        }
        assert!(!is_punctuation('a'));
        assert!(!is_punctuation(','));
        assert!(!is_punctuation('_'));
    }

    // -- Case functions --

    #[test]
    fn simple_lower_basic_latin() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('Z'), 'z');
        assert_eq!(simple_lower('a'), 'a');
    }

    #[test]
    fn simple_lower_extended() {
        assert_eq!(simple_lower('\u{00C4}'), '\u{00E4}'); // Ä -> ä
        assert_eq!(simple_lower('\u{00D6}'), '\u{00F6}'); // Ö -> ö
    }

    #[test]
    fn simple_upper_basic_latin() {
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_upper('z'), 'Z');
        assert_eq!(simple_upper('A'), 'A');
    }

    #[test]
    fn simple_case_ignores_non_letters() {
        assert_eq!(simple_lower('!'), '!');
        assert_eq!(simple_upper('7'), '7');
        assert_eq!(simple_lower(' '), ' ');
    }

    #[test]
    fn is_upper_basic() {
        assert!(is_upper('A'));
        assert!(is_upper('\u{00C4}')); // Ä
        assert!(!is_upper('a'));
        assert!(!is_upper('1'));
        assert!(!is_upper('!'));
    }

    #[test]
    fn is_lower_basic() {
        assert!(is_lower('a'));
        assert!(is_lower('\u{00E4}')); // ä
        assert!(!is_lower('A'));
        assert!(!is_lower('1'));
    }

    // -- Comparison --

    #[test]
    fn eq_ignore_case_pairs() {
        assert!(eq_ignore_case('a', 'A'));
        assert!(eq_ignore_case('\u{00E4}', '\u{00C4}')); // ä / Ä
        assert!(eq_ignore_case('!', '!'));
        assert!(!eq_ignore_case('a', 'b'));
    }

    #[test]
    fn equals_ignore_case_basic() {
        let a: Vec<char> = "Listen".chars().collect();
        let b: Vec<char> = "lISTEN".chars().collect();
        let c: Vec<char> = "Silent".chars().collect();
        assert!(equals_ignore_case(&a, &b));
        assert!(!equals_ignore_case(&a, &c));
    }

    #[test]
    fn equals_ignore_case_different_lengths() {
        let a: Vec<char> = "ab".chars().collect();
        let b: Vec<char> = "abc".chars().collect();
        assert!(!equals_ignore_case(&a, &b));
    }

    #[test]
    fn equals_ignore_case_empty() {
        assert!(equals_ignore_case(&[], &[]));
    }
}
