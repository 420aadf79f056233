//! Reckon: a pure functional calculator input engine
//!
//! Reckon turns discrete user commands (digits, decimal point,
//! operators, equals, clear, backspace) into a running calculation
//! state, a display string, and an ordered history of completed
//! calculations. The core is built on a "pure core, imperative shell"
//! philosophy: the reducer, evaluator, and ledger are pure functions
//! over immutable values, while the thin [`Engine`] shell owns the
//! current state and threads commands through them.
//!
//! Arithmetic is decimal-exact via `rust_decimal`, so `0.1 + 0.2`
//! displays as `0.3` rather than a binary floating-point artifact.
//! Operations apply strictly left to right as entered; there is no
//! precedence.
//!
//! # Core Concepts
//!
//! - **Commands**: raw tokens normalized once at the boundary into a
//!   closed [`Command`](core::Command) enum
//! - **Reducer**: a pure function from `(state, command)` to the next
//!   state plus an optional completed-calculation event
//! - **Ledger**: immutable, newest-first, deduplicated history with
//!   recall back into live engine state
//!
//! # Example
//!
//! ```rust
//! use reckon::Engine;
//!
//! let mut engine = Engine::new();
//! for token in ["7", "+", "3", "=", "="] {
//!     engine.press(token);
//! }
//!
//! // The second equals replays the recorded operand.
//! assert_eq!(engine.display(), "13");
//! assert_eq!(engine.ledger().len(), 2);
//! ```

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use self::core::{
    classify, compute, reduce, CalculatorState, Command, HistoryEntry, HistoryEvent, Ledger, Mode,
    Operator,
};
pub use engine::Engine;
