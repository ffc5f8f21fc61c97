//! Calculator core: the state snapshot, the transition function that maps
//! (state, action) to a new state, the binary-operation evaluator, and the
//! display formatter. Everything here is pure; the terminal shell lives in
//! `app` and `ui`.

pub mod action;
pub mod eval;
pub mod format;
pub mod reducer;
pub mod state;

pub use action::Action;
pub use state::{CalcState, Operation};
