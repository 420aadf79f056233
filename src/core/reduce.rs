//! The state reducer: one command in, one replacement state out.
//!
//! `reduce` is a pure, total function. Arithmetic failures and
//! unparseable display text are absorbed into ordinary state
//! transitions; no command can make the reducer fail or panic.

use super::arith::{compute, format_decimal, parse_operand, ArithmeticError};
use super::command::Command;
use super::state::{CalculatorState, Operator};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A completed calculation, emitted when an equals evaluation succeeds.
///
/// The reducer returns the event alongside the next state; the caller
/// commits it to the [`Ledger`](super::Ledger) in the same step. The
/// ledger's dedup key keeps the commit idempotent if the surrounding
/// event system delivers the same completion twice.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HistoryEvent {
    /// `"<left> <op> <right>"`, operands in normalized decimal text.
    pub expression: String,
    /// Normalized decimal text of the result.
    pub result: String,
    /// The operation that completed.
    pub operation: Operator,
    /// The right operand, reusable for repeat-equals.
    pub operand: String,
}

impl HistoryEvent {
    /// Derived key identifying a logically unique completed calculation.
    pub fn dedup_key(&self) -> String {
        format!("{}|{}", self.expression, self.result)
    }
}

/// Compute the next calculator state for one command.
///
/// Returns the replacement state and, when the command completed an
/// equals evaluation with a numeric result, the [`HistoryEvent`] to
/// commit. All other transitions emit `None`.
///
/// # Example
///
/// ```rust
/// use reckon::core::{reduce, CalculatorState, Command, Operator};
///
/// let state = CalculatorState::new();
/// let (state, _) = reduce(&state, Command::Digit(5));
/// let (state, _) = reduce(&state, Command::Op(Operator::Add));
/// let (state, _) = reduce(&state, Command::Digit(3));
/// let (state, event) = reduce(&state, Command::Equals);
///
/// assert_eq!(state.current, "8");
/// assert_eq!(event.unwrap().expression, "5 + 3");
/// ```
pub fn reduce(state: &CalculatorState, command: Command) -> (CalculatorState, Option<HistoryEvent>) {
    match command {
        Command::Clear => (CalculatorState::new(), None),
        Command::Digit(digit) => (press_digit(state, digit), None),
        Command::Dot => (press_dot(state), None),
        Command::Backspace => (press_backspace(state), None),
        Command::Op(op) => apply_operation(state, Some(op)),
        Command::Equals => apply_operation(state, None),
    }
}

/// A digit replaces a fresh or lone-zero buffer, otherwise appends.
fn press_digit(state: &CalculatorState, digit: u8) -> CalculatorState {
    let ch = char::from(b'0' + digit);
    if state.new_number || state.current == "0" {
        CalculatorState {
            current: ch.to_string(),
            new_number: false,
            ..state.clone()
        }
    } else {
        let mut current = state.current.clone();
        current.push(ch);
        CalculatorState {
            current,
            ..state.clone()
        }
    }
}

/// A dot starts `"0."` on a fresh buffer and is ignored once present.
fn press_dot(state: &CalculatorState) -> CalculatorState {
    if state.new_number {
        CalculatorState {
            current: "0.".to_string(),
            new_number: false,
            ..state.clone()
        }
    } else if state.current.contains('.') {
        state.clone()
    } else {
        let mut current = state.current.clone();
        current.push('.');
        CalculatorState {
            current,
            ..state.clone()
        }
    }
}

/// Drop the last typed character, or dismiss the equation banner when
/// the buffer holds a completed value.
fn press_backspace(state: &CalculatorState) -> CalculatorState {
    if state.new_number {
        // A shown result or pending display is not edited character by
        // character; only the equation banner is dismissed.
        return CalculatorState {
            expression: String::new(),
            ..state.clone()
        };
    }
    let mut current = state.current.clone();
    current.pop();
    if current.is_empty() {
        CalculatorState {
            current: "0".to_string(),
            new_number: true,
            ..state.clone()
        }
    } else {
        CalculatorState {
            current,
            ..state.clone()
        }
    }
}

/// Unified operator/equals transition. `new_op` is `None` for equals.
fn apply_operation(
    state: &CalculatorState,
    new_op: Option<Operator>,
) -> (CalculatorState, Option<HistoryEvent>) {
    // Repeat-equals: `=` with no new input replays the recorded operand
    // against the shown result, and keeps both for further repeats.
    if new_op.is_none() && state.new_number {
        if let Some(op) = state.operation {
            if !state.previous.is_empty() && !state.last_operand.is_empty() {
                return match (
                    parse_operand(&state.previous),
                    parse_operand(&state.last_operand),
                ) {
                    (Some(left), Some(right)) => evaluate_equals(left, op, right),
                    _ => (CalculatorState::new(), None),
                };
            }
        }
    }

    if state.current.is_empty() {
        return pending_operand(state, new_op);
    }

    let Some(cur) = parse_operand(&state.current) else {
        // The display holds non-numeric text (the divide-by-zero
        // message); any operation command resets the engine.
        return (CalculatorState::new(), None);
    };

    if let Some(op) = state.operation {
        if state.new_number {
            if let Some(next) = new_op {
                // A result followed by a new operator starts a fresh
                // chain; the old operator and replay operand are gone.
                return (chain_from(cur, next, String::new()), None);
            }
        }

        // Chained calculation: fold the typed operand into the pending
        // operation before anything else happens.
        let Some(left) = parse_operand(&state.previous) else {
            return (CalculatorState::new(), None);
        };
        return match new_op {
            None => evaluate_equals(left, op, cur),
            Some(next) => match compute(left, op, cur) {
                Ok(result) => (chain_from(result, next, format_decimal(cur)), None),
                Err(ArithmeticError::DivisionByZero) => (CalculatorState::divide_by_zero(), None),
                Err(ArithmeticError::Overflow) => (CalculatorState::new(), None),
            },
        };
    }

    // First operator of a fresh chain. Equals with nothing pending only
    // marks the operand as complete.
    match new_op {
        None => (
            CalculatorState {
                new_number: true,
                ..state.clone()
            },
            None,
        ),
        Some(next) => {
            let text = format_decimal(cur);
            (chain_from(cur, next, text), None)
        }
    }
}

/// Operator/equals while the right operand has not started.
fn pending_operand(
    state: &CalculatorState,
    new_op: Option<Operator>,
) -> (CalculatorState, Option<HistoryEvent>) {
    let Some(op) = state.operation else {
        return (state.clone(), None);
    };
    match new_op {
        // Operator substitution: swap the pending operator in place
        // without evaluating.
        Some(next) => (
            CalculatorState {
                operation: Some(next),
                expression: format!("{} {}", state.previous, next.symbol()),
                ..state.clone()
            },
            None,
        ),
        // Equals without a typed operand: reuse the replay operand, or
        // the left operand itself on a brand-new chain.
        None => {
            let operand_text = if state.last_operand.is_empty() {
                &state.previous
            } else {
                &state.last_operand
            };
            match (parse_operand(&state.previous), parse_operand(operand_text)) {
                (Some(left), Some(right)) => evaluate_equals(left, op, right),
                _ => (CalculatorState::new(), None),
            }
        }
    }
}

/// Successful equals: the result becomes both display and left operand,
/// the operation and operand stay armed for repeat-equals.
fn evaluate_equals(
    left: Decimal,
    op: Operator,
    right: Decimal,
) -> (CalculatorState, Option<HistoryEvent>) {
    match compute(left, op, right) {
        Ok(result) => {
            let result_text = format_decimal(result);
            let operand_text = format_decimal(right);
            let expression = format!("{} {} {}", format_decimal(left), op.symbol(), operand_text);
            let next = CalculatorState {
                current: result_text.clone(),
                previous: result_text.clone(),
                operation: Some(op),
                last_operand: operand_text.clone(),
                new_number: true,
                expression: format!("{expression} ="),
            };
            let event = HistoryEvent {
                expression,
                result: result_text,
                operation: op,
                operand: operand_text,
            };
            (next, Some(event))
        }
        Err(ArithmeticError::DivisionByZero) => (CalculatorState::divide_by_zero(), None),
        Err(ArithmeticError::Overflow) => (CalculatorState::new(), None),
    }
}

/// Arm a pending operation with `value` as its left operand.
fn chain_from(value: Decimal, next: Operator, last_operand: String) -> CalculatorState {
    let text = format_decimal(value);
    CalculatorState {
        current: String::new(),
        previous: text.clone(),
        operation: Some(next),
        last_operand,
        new_number: true,
        expression: format!("{} {}", text, next.symbol()),
    }
}
