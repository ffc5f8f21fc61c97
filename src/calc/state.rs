/// One of the four binary operations the keypad offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Symbol shown on the keypad and in the pending-expression line.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "÷",
        }
    }
}

/// Immutable calculator snapshot. A new snapshot replaces the old one on
/// every dispatched action; nothing mutates a prior snapshot in place.
///
/// Operands are kept as the strings the user typed ("1.5", "0.", ...) so
/// that in-progress entry survives display round trips untouched. They hold
/// digits and at most one decimal point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcState {
    /// The operand currently being typed, if any.
    pub current_operand: Option<String>,
    /// The operand already committed by choosing an operation, if any.
    pub previous_operand: Option<String>,
    /// The pending operation between previous and current, if any.
    pub operation: Option<Operation>,
    /// Set right after an evaluation: the next digit replaces the display
    /// instead of appending to it.
    pub overwrite: bool,
}
