use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    /// Zero-width when the tape panel is hidden.
    pub tape: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_tape: bool) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: calculator | tape panel
    let tape_width = if show_tape {
        Constraint::Length(30)
    } else {
        Constraint::Length(0)
    };
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(28), tape_width])
        .split(content);

    let calculator = h_chunks[0];
    let tape = h_chunks[1];

    // Calculator column: display | keypad
    let calc_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Display (two lines + border)
            Constraint::Min(10),   // Keypad grid
        ])
        .split(calculator);

    AppLayout {
        display: calc_chunks[0],
        keypad: calc_chunks[1],
        tape,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_stacks_display_over_keypad() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.display.height, 4);
        assert!(layout.keypad.y >= layout.display.y + layout.display.height);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.tape.width, 30);
    }

    #[test]
    fn hidden_tape_takes_no_space() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.tape.width, 0);
        assert_eq!(layout.display.width, 80);
    }
}
