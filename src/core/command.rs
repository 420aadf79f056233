//! Canonical commands and raw-token classification.
//!
//! Raw tokens arrive from heterogeneous sources (on-screen buttons,
//! keyboard events) with display glyphs and key names mixed in. One
//! normalization step at this boundary keeps stringly-typed input out
//! of the reducer.

use super::state::Operator;
use serde::{Deserialize, Serialize};

/// A normalized calculator command.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The decimal point key.
    Dot,
    /// One of the four operator keys.
    Op(Operator),
    /// The equals key (also `Enter`).
    Equals,
    /// The clear key (also `Escape`).
    Clear,
    /// The backspace key.
    Backspace,
}

/// Classify a raw token into a command.
///
/// Display glyphs for multiply and divide are normalized to the
/// canonical operators. Unrecognized tokens yield `None` and are
/// simply dropped by callers; no state change and no error.
///
/// # Example
///
/// ```rust
/// use reckon::core::{classify, Command, Operator};
///
/// assert_eq!(classify("7"), Some(Command::Digit(7)));
/// assert_eq!(classify("×"), Some(Command::Op(Operator::Mul)));
/// assert_eq!(classify("Enter"), Some(Command::Equals));
/// assert_eq!(classify("F5"), None);
/// ```
pub fn classify(token: &str) -> Option<Command> {
    match token {
        "." => Some(Command::Dot),
        "+" => Some(Command::Op(Operator::Add)),
        "-" => Some(Command::Op(Operator::Sub)),
        "*" | "×" => Some(Command::Op(Operator::Mul)),
        "/" | "÷" => Some(Command::Op(Operator::Div)),
        "=" | "Enter" => Some(Command::Equals),
        "c" | "C" | "Escape" => Some(Command::Clear),
        "Backspace" => Some(Command::Backspace),
        _ => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_ascii_digit() => {
                    Some(Command::Digit(ch as u8 - b'0'))
                }
                _ => None,
            }
        }
    }
}
