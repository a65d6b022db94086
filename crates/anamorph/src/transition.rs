// The transition state machine: morphs a source string into its anagram
// target one atomic edit at a time.
//
// The machine runs four phases in a fixed order, each to its own fixed
// point: lower-case every character, reorder and prune the buffer with
// adjacent swaps and removals, insert target characters that were never
// matched, and finally restore target casing. Each `next()` call
// performs at most one visible edit, so collecting the buffer after
// every call yields a sequence whose consecutive elements differ by
// exactly one case change, swap, removal, or insertion.

use anamorph_core::character::{eq_ignore_case, equals_ignore_case, is_upper, simple_lower};

use crate::anagram::Anagram;

/// Stage of the transition procedure.
///
/// Stages advance strictly in declaration order; `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    LowerCase,
    Reorder,
    Insert,
    RestoreCase,
    Done,
}

impl Phase {
    fn successor(self) -> Phase {
        match self {
            Phase::LowerCase => Phase::Reorder,
            Phase::Reorder => Phase::Insert,
            Phase::Insert => Phase::RestoreCase,
            Phase::RestoreCase | Phase::Done => Phase::Done,
        }
    }
}

/// Mutable stepping state for one anagram transition.
///
/// Owns a working copy of the source characters and, per position, the
/// index in the target string that character is destined for (`None`
/// for characters with no remaining unclaimed match). The working
/// buffer is spliced in place until it equals the target exactly.
///
/// A transition is consumed by a single owner driving [`Transition::next`]
/// to completion; it holds no reference back to the [`Anagram`] it was
/// created from.
pub struct Transition {
    /// Working characters, initialized from the source string.
    chars: Vec<char>,
    /// Destination target index for each working character.
    destinations: Vec<Option<usize>>,
    /// The target characters, with their original casing.
    target: Vec<char>,
    /// Scan position of the current phase.
    cursor: usize,
    phase: Phase,
}

impl Transition {
    /// Build the stepping state for an anagram pair.
    ///
    /// Destination indices are assigned first-come-first-served: scanning
    /// the source left to right, each character claims the first
    /// unclaimed target position that matches it case-insensitively.
    /// Characters that find no match get `None` and will be removed
    /// during the reorder phase.
    pub fn new(anagram: &Anagram) -> Self {
        let chars: Vec<char> = anagram.source().chars().collect();
        let target: Vec<char> = anagram.target().chars().collect();

        let mut claimed = vec![false; target.len()];
        let mut destinations = Vec::with_capacity(chars.len());
        for &c in &chars {
            let slot = (0..target.len()).find(|&j| !claimed[j] && eq_ignore_case(target[j], c));
            if let Some(j) = slot {
                claimed[j] = true;
            }
            destinations.push(slot);
        }

        Self {
            chars,
            destinations,
            target,
            cursor: 0,
            phase: Phase::LowerCase,
        }
    }

    /// Advance by exactly one atomic edit.
    ///
    /// Returns `true` once the transition is complete. A single call may
    /// cross any number of phase boundaries that have no work left, but
    /// performs at most one visible edit. Calling `next()` after
    /// completion is a no-op that keeps returning `true`.
    pub fn next(&mut self) -> bool {
        loop {
            let phase_complete = match self.phase {
                Phase::LowerCase => self.lower_step(),
                Phase::Reorder => self.reorder_step(),
                Phase::Insert => self.insert_step(),
                Phase::RestoreCase => self.restore_step(),
                Phase::Done => return true,
            };
            if !phase_complete {
                return false;
            }
            self.phase = self.phase.successor();
            self.cursor = 0;
        }
    }

    /// The current intermediate string.
    pub fn current(&self) -> String {
        self.chars.iter().collect()
    }

    /// Whether the transition has reached its terminal state.
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Read-only view of the destination-index mapping.
    ///
    /// One entry per working character: the target position it is
    /// destined for, or `None` while it has no match. Exposed for
    /// diagnostics and for UI layers that animate by destination.
    pub fn destinations(&self) -> &[Option<usize>] {
        &self.destinations
    }

    // -----------------------------------------------------------------------
    // Phase steps. Each returns `true` when the phase has reached its
    // fixed point, or performs one edit and returns `false`.
    // -----------------------------------------------------------------------

    /// Lower-case the first character that is not already lower-case.
    fn lower_step(&mut self) -> bool {
        while self.cursor < self.chars.len() {
            let c = self.chars[self.cursor];
            if is_upper(c) {
                self.chars[self.cursor] = simple_lower(c);
                return false;
            }
            self.cursor += 1;
        }
        true
    }

    /// One reordering edit: remove an unmatched character, or swap an
    /// adjacent pair whose destinations are out of order.
    ///
    /// The cursor sweeps left to right. Reaching the last adjacent pair
    /// without an edit restarts the sweep from the front; a full sweep
    /// from the front with no edit means the buffer is sorted and
    /// pruned, completing the phase.
    fn reorder_step(&mut self) -> bool {
        let mut swept_from_start = self.cursor == 0;
        loop {
            let len = self.chars.len();
            if len == 0 {
                return true;
            }
            if self.cursor < len && self.destinations[self.cursor].is_none() {
                self.remove_at(self.cursor);
                return false;
            }
            if self.cursor + 1 < len {
                if self.destinations[self.cursor + 1].is_none() {
                    self.remove_at(self.cursor + 1);
                    return false;
                }
                if self.destinations[self.cursor] > self.destinations[self.cursor + 1] {
                    self.chars.swap(self.cursor, self.cursor + 1);
                    self.destinations.swap(self.cursor, self.cursor + 1);
                    return false;
                }
            }
            if self.cursor + 2 >= len {
                if swept_from_start {
                    return true;
                }
                self.cursor = 0;
                swept_from_start = true;
            } else {
                self.cursor += 1;
            }
        }
    }

    /// Insert the leftmost missing target character at its destination.
    ///
    /// After reordering, `destinations` is an ascending run of claimed
    /// target indices, so the first position whose destination disagrees
    /// with its own index marks the leftmost gap. The target character
    /// is inserted verbatim, original casing included.
    fn insert_step(&mut self) -> bool {
        if self.chars.len() == self.target.len() {
            debug_assert!(equals_ignore_case(&self.chars, &self.target));
            return true;
        }
        let mut pos = self.chars.len();
        for (i, &destination) in self.destinations.iter().enumerate() {
            if destination != Some(i) {
                pos = i;
                break;
            }
        }
        self.chars.insert(pos, self.target[pos]);
        self.destinations.insert(pos, Some(pos));
        false
    }

    /// Fix the first character whose case disagrees with the target.
    fn restore_step(&mut self) -> bool {
        debug_assert_eq!(self.chars.len(), self.target.len());
        while self.cursor < self.chars.len() {
            let want = self.target[self.cursor];
            if self.chars[self.cursor] != want {
                debug_assert!(eq_ignore_case(self.chars[self.cursor], want));
                self.chars[self.cursor] = want;
                return false;
            }
            self.cursor += 1;
        }
        true
    }

    /// Remove the character at `index` together with its destination entry.
    fn remove_at(&mut self, index: usize) {
        self.chars.remove(index);
        self.destinations.remove(index);
    }
}
