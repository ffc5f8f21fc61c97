//! Application shell: state store, event handling, and mouse interaction.

pub mod event;
pub mod handler;
pub mod interaction;
pub mod state;
