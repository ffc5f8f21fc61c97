//! Binary-operation evaluator. Works on the operand strings held in the
//! state and hands back the result as a string, ready to become the next
//! operand.

use crate::calc::state::{CalcState, Operation};

/// Compute `previous_operand <operation> current_operand`.
///
/// Either operand failing to parse yields the empty string, which flows
/// back into the state as a defined degenerate operand rather than an
/// error. Division by zero follows IEEE-754 and stringifies as `inf` /
/// `-inf` / `NaN`.
pub fn evaluate(state: &CalcState) -> String {
    let prev = parse_operand(state.previous_operand.as_deref());
    let current = parse_operand(state.current_operand.as_deref());
    if prev.is_nan() || current.is_nan() {
        return String::new();
    }
    let Some(op) = state.operation else {
        return String::new();
    };
    let result = match op {
        Operation::Add => prev + current,
        Operation::Subtract => prev - current,
        Operation::Multiply => prev * current,
        Operation::Divide => prev / current,
    };
    result.to_string()
}

/// Parse the longest numeric prefix of an operand, NaN if there is none.
fn parse_operand(operand: Option<&str>) -> f64 {
    let Some(s) = operand else { return f64::NAN };
    for end in (1..=s.len()).rev() {
        if !s.is_char_boundary(end) {
            continue;
        }
        if let Ok(v) = s[..end].parse::<f64>() {
            return v;
        }
    }
    f64::NAN
}
