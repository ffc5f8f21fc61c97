use crate::calc::state::Operation;

/// The five things a keypad click can ask of the calculator. Each of the 19
/// on-screen buttons dispatches exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a digit or the decimal point to the current operand.
    AddDigit(char),
    /// Select (or replace) the pending binary operation.
    ChooseOperation(Operation),
    /// Reset to the empty state.
    Clear,
    /// Remove the last typed character.
    DeleteDigit,
    /// Compute the pending expression.
    Evaluate,
}
