//! Decimal-exact arithmetic for the four calculator operations.
//!
//! Operands are `rust_decimal::Decimal` values, so typical decimal
//! inputs evaluate without binary floating-point artifacts:
//! `0.1 + 0.2` is exactly `0.3`.

use super::state::Operator;
use rust_decimal::Decimal;
use thiserror::Error;

/// Failures an evaluation can produce.
///
/// These are outcomes, not faults: the reducer consumes them as data
/// and transitions the display accordingly.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The right operand of a division was zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// The result exceeds the representable decimal range.
    #[error("Result exceeds the representable decimal range")]
    Overflow,
}

/// Apply a binary operation to two decimal operands.
///
/// Division by zero is reported for every left operand, including zero.
///
/// # Example
///
/// ```rust
/// use reckon::core::{compute, ArithmeticError, Operator};
/// use rust_decimal::Decimal;
///
/// let a: Decimal = "0.1".parse().unwrap();
/// let b: Decimal = "0.2".parse().unwrap();
/// assert_eq!(compute(a, Operator::Add, b).unwrap().to_string(), "0.3");
///
/// let err = compute(a, Operator::Div, Decimal::ZERO);
/// assert_eq!(err, Err(ArithmeticError::DivisionByZero));
/// ```
pub fn compute(a: Decimal, op: Operator, b: Decimal) -> Result<Decimal, ArithmeticError> {
    match op {
        Operator::Add => a.checked_add(b).ok_or(ArithmeticError::Overflow),
        Operator::Sub => a.checked_sub(b).ok_or(ArithmeticError::Overflow),
        Operator::Mul => a.checked_mul(b).ok_or(ArithmeticError::Overflow),
        Operator::Div => {
            if b.is_zero() {
                Err(ArithmeticError::DivisionByZero)
            } else {
                a.checked_div(b).ok_or(ArithmeticError::Overflow)
            }
        }
    }
}

/// Parse display-buffer text into a decimal operand.
///
/// A trailing decimal point (a buffer mid-entry, like `"3."`) is
/// accepted. Returns `None` for anything else that does not parse,
/// including the division-by-zero message.
pub fn parse_operand(text: &str) -> Option<Decimal> {
    let digits = text.strip_suffix('.').unwrap_or(text);
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Render a decimal as display text, trailing zeros stripped.
pub fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}
