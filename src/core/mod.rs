//! Pure functional core of the calculator engine.
//!
//! This module contains everything with real behavior and no side
//! effects:
//! - Raw-token classification into canonical commands
//! - The calculator state value types
//! - Decimal-exact arithmetic
//! - The state reducer
//! - The history ledger
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy; the shell lives in
//! [`crate::engine`].

mod arith;
mod command;
mod history;
mod reduce;
mod state;

pub use arith::{compute, format_decimal, parse_operand, ArithmeticError};
pub use command::{classify, Command};
pub use history::{HistoryEntry, Ledger};
pub use reduce::{reduce, HistoryEvent};
pub use state::{CalculatorState, Mode, Operator, DIVIDE_BY_ZERO};
