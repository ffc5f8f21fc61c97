//! The state-transition function. Pure and total: every action has defined
//! semantics for every state, and invalid input degrades to returning the
//! state unchanged rather than failing.

use crate::calc::action::Action;
use crate::calc::eval::evaluate;
use crate::calc::state::{CalcState, Operation};

/// Map a state and an action to the next state.
///
/// Chained operations evaluate left to right with no precedence: entering
/// `1 + 2 * 3` yields 9, not 7. That matches how the keypad behaves on a
/// classic desk calculator and is kept deliberately.
pub fn transition(state: &CalcState, action: &Action) -> CalcState {
    match action {
        Action::AddDigit(digit) => add_digit(state, *digit),
        Action::ChooseOperation(op) => choose_operation(state, *op),
        Action::Clear => CalcState::default(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: &CalcState, digit: char) -> CalcState {
    // A fresh result on screen: the first digit typed replaces it.
    if state.overwrite {
        return CalcState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_operand.as_deref();

    // No leading zeros: "0" then "0" stays "0".
    if digit == '0' && current == Some("0") {
        return state.clone();
    }

    // At most one decimal point per operand.
    if digit == '.' && current.is_some_and(|c| c.contains('.')) {
        return state.clone();
    }

    let mut operand = state.current_operand.clone().unwrap_or_default();
    operand.push(digit);
    CalcState {
        current_operand: Some(operand),
        ..state.clone()
    }
}

fn choose_operation(state: &CalcState, op: Operation) -> CalcState {
    // Nothing typed yet, nothing committed: no operand to attach to.
    if state.current_operand.is_none() && state.previous_operand.is_none() {
        return state.clone();
    }

    // Operator already pending and no new operand typed: the user changed
    // their mind about the operator.
    if state.current_operand.is_none() {
        return CalcState {
            operation: Some(op),
            ..state.clone()
        };
    }

    // First operator of the expression: commit the typed operand.
    if state.previous_operand.is_none() {
        return CalcState {
            previous_operand: state.current_operand.clone(),
            current_operand: None,
            operation: Some(op),
            overwrite: false,
        };
    }

    // Both operands present: fold the pending expression and chain.
    CalcState {
        previous_operand: Some(evaluate(state)),
        current_operand: None,
        operation: Some(op),
        overwrite: false,
    }
}

fn delete_digit(state: &CalcState) -> CalcState {
    // Deleting a just-evaluated result clears the whole display.
    if state.overwrite {
        return CalcState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    let Some(current) = state.current_operand.as_ref() else {
        return state.clone();
    };

    let mut operand = current.clone();
    operand.pop();
    CalcState {
        current_operand: (!operand.is_empty()).then_some(operand),
        ..state.clone()
    }
}

fn evaluate_pending(state: &CalcState) -> CalcState {
    if state.operation.is_none()
        || state.current_operand.is_none()
        || state.previous_operand.is_none()
    {
        return state.clone();
    }

    CalcState {
        current_operand: Some(evaluate(state)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}
