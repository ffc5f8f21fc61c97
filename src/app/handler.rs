use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::calc::Action;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Translate one application event into calculator actions. The returned
/// actions are dispatched to the state store by the main loop, one at a
/// time, before the next event is looked at.
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.expire_pressed() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

/// Calculator entry is mouse-only; the keyboard just closes the app.
fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl_c =
        key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
    if ctrl_c || key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
        state.should_quit = true;
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let Some(hit) = state.hit_areas.hit_test(mouse.column, mouse.row) else {
        return vec![];
    };
    tracing::debug!(action = ?hit.action, x = mouse.column, y = mouse.row, "keypad click");
    state.press_button(hit.rect);
    vec![hit.action]
}
