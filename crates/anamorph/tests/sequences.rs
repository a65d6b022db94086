//! Golden-sequence tests for the transition engine.
//!
//! These drive whole transitions and compare against known-good step
//! lists, then re-check every sequence against the atomic-edit contract:
//! consecutive steps must differ by exactly one case change, one
//! adjacent swap, one removal, or one insertion.

use anamorph::{Anagram, Transition};

// ---------------------------------------------------------------------------
// Helper: atomic edit classification
// ---------------------------------------------------------------------------

/// Check that `b` is reachable from `a` by exactly one atomic edit.
fn is_single_atomic_edit(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len() == b.len() {
        let diffs: Vec<usize> = (0..a.len()).filter(|&i| a[i] != b[i]).collect();
        match diffs.as_slice() {
            // One position changed: must be a case flip of the same letter.
            [i] => anamorph_core::eq_ignore_case(a[*i], b[*i]),
            // Two positions changed: must be an adjacent swap.
            [i, j] => *j == *i + 1 && a[*i] == b[*j] && a[*j] == b[*i],
            _ => false,
        }
    } else if a.len() == b.len() + 1 {
        // One removal: dropping some character of `a` yields `b`.
        (0..a.len()).any(|i| {
            let mut shortened = a.clone();
            shortened.remove(i);
            shortened == b
        })
    } else if b.len() == a.len() + 1 {
        // One insertion: dropping some character of `b` yields `a`.
        (0..b.len()).any(|i| {
            let mut shortened = b.clone();
            shortened.remove(i);
            shortened == a
        })
    } else {
        false
    }
}

/// Assert the endpoint and single-edit properties over a whole sequence.
fn assert_well_formed(steps: &[String], source: &str, target: &str) {
    assert_eq!(steps.first().map(String::as_str), Some(source));
    assert_eq!(steps.last().map(String::as_str), Some(target));
    for window in steps.windows(2) {
        assert!(
            is_single_atomic_edit(&window[0], &window[1]),
            "{:?} -> {:?} is not a single atomic edit",
            window[0],
            window[1]
        );
    }
}

// ---------------------------------------------------------------------------
// Golden sequences
// ---------------------------------------------------------------------------

#[test]
fn greg_doran_to_aggronerd() {
    let anagram = Anagram::new("Greg Doran", "Aggronerd!!!").unwrap();
    let steps = anagram.transition_steps();
    assert_eq!(
        steps,
        [
            "Greg Doran",
            "greg Doran",
            "greg doran",
            "grge doran",
            "grgedoran",
            "grgeodran",
            "grgeordan",
            "grgeoradn",
            "grgeorand",
            "ggreorand",
            "ggroerand",
            "ggroearnd",
            "ggroeanrd",
            "ggroaenrd",
            "ggroanerd",
            "ggraonerd",
            "ggaronerd",
            "gagronerd",
            "aggronerd",
            "aggronerd!",
            "aggronerd!!",
            "aggronerd!!!",
            "Aggronerd!!!",
        ]
    );
    assert_well_formed(&steps, "Greg Doran", "Aggronerd!!!");
}

#[test]
fn listen_to_silent() {
    let anagram = Anagram::new("Listen", "Silent").unwrap();
    let steps = anagram.transition_steps();
    assert_eq!(steps.first().map(String::as_str), Some("Listen"));
    assert_eq!(steps[1], "listen");
    assert_well_formed(&steps, "Listen", "Silent");
}

#[test]
fn sequences_hold_the_single_edit_property() {
    let pairs = [
        ("Listen", "Silent"),
        ("George Bush", "He bugs Gore!"),
        ("dormitory", "dirty room"),
        ("the eyes", "they see"),
        ("A gentleman", "Elegant man"),
        ("Conversation", "Voices rant on"),
        ("aakBa", "AkbAa"),
        ("!!!", "..."),
    ];
    for (source, target) in pairs {
        let anagram = Anagram::new(source, target)
            .unwrap_or_else(|e| panic!("expected a valid pair: {e}"));
        assert_well_formed(&anagram.transition_steps(), source, target);
    }
}

#[test]
fn unvalidated_pairs_still_produce_well_formed_sequences() {
    // The set-based validity check rejects these, but the engine itself
    // handles any pair of strings.
    for (source, target) in [("", "Something"), ("Something", ""), ("abc", "xyz")] {
        let anagram = Anagram::unchecked(source, target);
        let mut transition = Transition::new(&anagram);
        let mut steps = vec![source.to_string()];
        while !transition.next() {
            steps.push(transition.current());
        }
        assert_well_formed(&steps, source, target);
    }
}

#[test]
fn driving_a_finished_transition_changes_nothing() {
    let anagram = Anagram::new("Listen", "Silent").unwrap();
    let mut transition = Transition::new(&anagram);
    while !transition.next() {}
    assert!(transition.is_complete());
    assert_eq!(transition.current(), "Silent");
    assert!(transition.next());
    assert_eq!(transition.current(), "Silent");
}
