use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn current_operand() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn previous_operand() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn digit_button() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn operator_button() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn control_button() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn equals_button() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn button_pressed() -> Style {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    }

    pub fn tape_timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn tape_expression() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn tape_result() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_tally() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
