// WASM bindings for the anamorph anagram transition engine.
//
// Provides `WasmAnagram` and `WasmTransition` classes exported via
// wasm-bindgen. The animation layer either grabs the whole step list at
// once (`transitionSteps`) or drives a `WasmTransition` one edit per
// animation frame.
//
// Usage from JavaScript:
//
//   const anagram = new WasmAnagram("Listen", "Silent");
//   anagram.transitionSteps();        // => ["Listen", "listen", ...]
//
//   const transition = new WasmTransition(anagram);
//   transition.next();                // => false until complete
//   transition.current();             // => "listen"
//   transition.destinations();        // => [2, 1, 0, 5, 3, 4]
//   transition.snapshot();            // => { current, destinations, complete }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use anamorph::{Anagram, InvalidAnagramError, Transition};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable view of a transition's state, for per-frame polling.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTransitionSnapshot {
    current: String,
    /// Destination target index per character; `null` while unmatched.
    destinations: Vec<Option<usize>>,
    complete: bool,
}

fn anagram_error_to_js(e: InvalidAnagramError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmAnagram
// ============================================================================

/// A validated anagram pair.
#[wasm_bindgen]
pub struct WasmAnagram {
    anagram: Anagram,
}

#[wasm_bindgen]
impl WasmAnagram {
    /// Validate and construct an anagram pair.
    ///
    /// Throws if the two strings' distinct-character sets (punctuation
    /// stripped, lower-cased) differ.
    #[wasm_bindgen(constructor)]
    pub fn new(source: &str, target: &str) -> Result<WasmAnagram, JsError> {
        let anagram = Anagram::new(source, target).map_err(anagram_error_to_js)?;
        Ok(WasmAnagram { anagram })
    }

    /// The string the transition starts from.
    #[wasm_bindgen(getter)]
    pub fn source(&self) -> String {
        self.anagram.source().to_string()
    }

    /// The string the transition ends at.
    #[wasm_bindgen(getter)]
    pub fn target(&self) -> String {
        self.anagram.target().to_string()
    }

    /// Compute the full ordered list of intermediate strings, from the
    /// source (inclusive) to the target (inclusive), one atomic edit
    /// apart.
    #[wasm_bindgen(js_name = "transitionSteps")]
    pub fn transition_steps(&self) -> Vec<String> {
        self.anagram.transition_steps()
    }
}

// ============================================================================
// WasmTransition
// ============================================================================

/// Incremental step driver for one anagram transition.
///
/// Create one per animation run and call `next()` once per frame until
/// it returns `true`.
#[wasm_bindgen]
pub struct WasmTransition {
    transition: Transition,
}

#[wasm_bindgen]
impl WasmTransition {
    /// Construct the step driver for an anagram pair.
    #[wasm_bindgen(constructor)]
    pub fn new(anagram: &WasmAnagram) -> WasmTransition {
        WasmTransition {
            transition: Transition::new(&anagram.anagram),
        }
    }

    /// Advance by one atomic edit. Returns `true` once complete;
    /// further calls are no-ops that keep returning `true`.
    pub fn next(&mut self) -> bool {
        self.transition.next()
    }

    /// The current intermediate string.
    pub fn current(&self) -> String {
        self.transition.current()
    }

    /// Whether the transition has reached its terminal state.
    #[wasm_bindgen(js_name = "isComplete")]
    pub fn is_complete(&self) -> bool {
        self.transition.is_complete()
    }

    /// The destination-index mapping as a `(number|null)[]` array:
    /// one entry per current character, giving the target position it
    /// is destined for.
    pub fn destinations(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.transition.destinations().to_vec())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// One-call state view: `{ current, destinations, complete }`.
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        let snapshot = JsTransitionSnapshot {
            current: self.transition.current(),
            destinations: self.transition.destinations().to_vec(),
            complete: self.transition.is_complete(),
        };
        serde_wasm_bindgen::to_value(&snapshot).map_err(|e| JsError::new(&e.to_string()))
    }
}
