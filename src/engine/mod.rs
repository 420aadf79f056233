//! Imperative shell around the pure core.
//!
//! [`Engine`] owns the current state and the ledger, feeds commands
//! through the reducer, and commits emitted history events. All
//! mutation is whole-value replacement; between calls the state is an
//! ordinary inspectable value.

use crate::core::{classify, reduce, CalculatorState, Command, Ledger};
use uuid::Uuid;

/// A calculator session: current state plus the history ledger.
///
/// Commands are applied one at a time in delivery order. The reducer's
/// two-part return (next state, optional history event) means commit
/// happens in the same step as the state swap; the ledger's dedup key
/// absorbs duplicate deliveries.
///
/// # Example
///
/// ```rust
/// use reckon::Engine;
///
/// let mut engine = Engine::new();
/// for token in ["5", "+", "3", "="] {
///     engine.press(token);
/// }
///
/// assert_eq!(engine.display(), "8");
/// assert_eq!(engine.ledger().len(), 1);
/// ```
pub struct Engine {
    state: CalculatorState,
    ledger: Ledger,
}

impl Engine {
    /// Create an engine in the initial state with an empty ledger.
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
            ledger: Ledger::new(),
        }
    }

    /// Current state (pure).
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// History ledger (pure).
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Primary display text.
    pub fn display(&self) -> &str {
        &self.state.current
    }

    /// Secondary equation-so-far display.
    pub fn expression(&self) -> &str {
        &self.state.expression
    }

    /// Apply one command: reduce, then commit any emitted event.
    pub fn apply(&mut self, command: Command) {
        let (next, event) = reduce(&self.state, command);
        self.state = next;
        if let Some(event) = event {
            self.ledger = self.ledger.commit(event);
        }
    }

    /// Classify a raw token and apply it. Unrecognized tokens are
    /// dropped without touching the state.
    pub fn press(&mut self, token: &str) {
        if let Some(command) = classify(token) {
            self.apply(command);
        }
    }

    /// Install the state reconstructed from a past ledger entry.
    ///
    /// Returns false when no entry has the given id. After a
    /// successful recall, equals repeats the recalled calculation.
    pub fn recall(&mut self, id: &Uuid) -> bool {
        match self.ledger.recall(id) {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
