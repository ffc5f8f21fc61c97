mod display;
mod keypad;
mod layout;
mod status_bar;
mod tape;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

/// Render the whole frame. Takes the state mutably because the keypad
/// re-registers its hit areas on every pass; the registry is cleared first
/// so a resize never leaves stale click targets behind.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    state.hit_areas.clear();

    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.config.ui.show_tape);

    display::render(frame, app_layout.display, state);
    keypad::render(frame, app_layout.keypad, state);
    tape::render(frame, app_layout.tape, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
