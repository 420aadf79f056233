//! Calculator state value types.
//!
//! The engine's state is a plain immutable value. Transitions never
//! mutate a state in place; the reducer returns a replacement value,
//! so a presentation layer can safely inspect the previous state
//! between reductions.

use serde::{Deserialize, Serialize};

/// Fixed display text shown after a division by zero.
///
/// A state whose display buffer equals this text is in the error mode;
/// it is the only non-numeric text the display buffer can hold.
pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";

/// The four calculator operations.
///
/// Operators are normalized at the input boundary (display glyphs such
/// as `×` and `÷` map to `Mul` and `Div`), so the core never compares
/// operator strings.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Canonical one-character symbol, used when rendering expressions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::core::Operator;
    ///
    /// assert_eq!(Operator::Add.symbol(), "+");
    /// assert_eq!(Operator::Div.symbol(), "/");
    /// ```
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// Conceptual mode of a calculator state.
///
/// The mode is derived from the field combination rather than stored as
/// a tag, so it can never drift out of sync with the fields.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    /// Digits are being appended to the display buffer.
    Entering,
    /// An operator was chosen and the right operand has not started.
    OperatorPending,
    /// A completed value is shown; the next digit starts a fresh operand.
    ResultShown,
    /// The display holds the division-by-zero message.
    Error,
}

impl Mode {
    /// Get the mode's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entering => "Entering",
            Self::OperatorPending => "OperatorPending",
            Self::ResultShown => "ResultShown",
            Self::Error => "Error",
        }
    }
}

/// Complete state of the input engine.
///
/// Field invariants:
///
/// - `operation` is `Some` exactly when `previous` is non-empty.
/// - `current` parses as a decimal whenever it is non-empty and not the
///   [`DIVIDE_BY_ZERO`] message; a trailing `.` is allowed mid-entry.
/// - The error state always carries otherwise-initial fields, so any
///   digit begins a fresh calculation.
/// - `last_operand` is meaningful only while `operation` is `Some`; a
///   new left-to-right chain clears it.
///
/// # Example
///
/// ```rust
/// use reckon::core::{CalculatorState, Mode};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.current, "0");
/// assert_eq!(state.mode(), Mode::ResultShown);
/// assert!(!state.is_error());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Active display buffer. Empty means "awaiting the right operand".
    pub current: String,
    /// Left operand of the pending or last-completed operation.
    pub previous: String,
    /// Pending or last-completed operation.
    pub operation: Option<Operator>,
    /// Operand most recently combined with `previous`; replayed by
    /// repeated equals.
    pub last_operand: String,
    /// When true, the next digit or dot starts a fresh operand.
    pub new_number: bool,
    /// Human-readable equation-so-far. Presentation hint only; never
    /// consulted by the arithmetic.
    pub expression: String,
}

impl CalculatorState {
    /// The initial state: `"0"` on display, nothing pending.
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: String::new(),
            operation: None,
            last_operand: String::new(),
            new_number: true,
            expression: String::new(),
        }
    }

    /// The terminal error display after a division by zero.
    ///
    /// Every field except the display buffer is initial, so recovery is
    /// a matter of pressing any digit, dot, or clear.
    pub fn divide_by_zero() -> Self {
        Self {
            current: DIVIDE_BY_ZERO.to_string(),
            ..Self::new()
        }
    }

    /// Derive the conceptual mode from the field combination.
    pub fn mode(&self) -> Mode {
        if self.current == DIVIDE_BY_ZERO {
            Mode::Error
        } else if self.current.is_empty() {
            Mode::OperatorPending
        } else if self.new_number {
            Mode::ResultShown
        } else {
            Mode::Entering
        }
    }

    /// Check if this state shows the division-by-zero message.
    pub fn is_error(&self) -> bool {
        self.mode() == Mode::Error
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
