//! The button grid. Mirrors a desk calculator: AC and DEL on top, operators
//! down the right-hand column, equals spanning the bottom corner. Every
//! button registers a hit area so the event loop can resolve clicks.

use crate::app::state::AppState;
use crate::calc::{Action, Operation};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

#[derive(Debug, Clone, Copy)]
enum ButtonKind {
    Digit,
    Operator,
    Control,
    Equals,
}

#[derive(Debug, Clone, Copy)]
struct ButtonSpec {
    label: &'static str,
    action: Action,
    /// Number of grid columns this button covers.
    span: u16,
    kind: ButtonKind,
}

const fn digit(label: &'static str, d: char) -> ButtonSpec {
    ButtonSpec {
        label,
        action: Action::AddDigit(d),
        span: 1,
        kind: ButtonKind::Digit,
    }
}

const fn operator(label: &'static str, op: Operation) -> ButtonSpec {
    ButtonSpec {
        label,
        action: Action::ChooseOperation(op),
        span: 1,
        kind: ButtonKind::Operator,
    }
}

/// The grid, top row first. Same arrangement as a pocket calculator.
const ROWS: [&[ButtonSpec]; 5] = [
    &[
        ButtonSpec {
            label: "AC",
            action: Action::Clear,
            span: 2,
            kind: ButtonKind::Control,
        },
        ButtonSpec {
            label: "DEL",
            action: Action::DeleteDigit,
            span: 1,
            kind: ButtonKind::Control,
        },
        operator("÷", Operation::Divide),
    ],
    &[digit("1", '1'), digit("2", '2'), digit("3", '3'), operator("*", Operation::Multiply)],
    &[digit("4", '4'), digit("5", '5'), digit("6", '6'), operator("+", Operation::Add)],
    &[digit("7", '7'), digit("8", '8'), digit("9", '9'), operator("-", Operation::Subtract)],
    &[
        digit(".", '.'),
        digit("0", '0'),
        ButtonSpec {
            label: "=",
            action: Action::Evaluate,
            span: 2,
            kind: ButtonKind::Equals,
        },
    ],
];

pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let row_rects = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for (row, specs) in ROWS.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(row_rects[row]);

        let mut col = 0usize;
        for spec in specs.iter() {
            let first = columns[col];
            let last = columns[col + spec.span as usize - 1];
            let rect = first.union(last);
            col += spec.span as usize;

            render_button(frame, rect, spec, state);
            state.hit_areas.register(rect, spec.action);
        }
    }
}

fn render_button(frame: &mut Frame, rect: Rect, spec: &ButtonSpec, state: &AppState) {
    let style = if state.is_pressed(rect) {
        Theme::button_pressed()
    } else {
        match spec.kind {
            ButtonKind::Digit => Theme::digit_button(),
            ButtonKind::Operator => Theme::operator_button(),
            ButtonKind::Control => Theme::control_button(),
            ButtonKind::Equals => Theme::equals_button(),
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .style(style);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    if inner.height == 0 {
        return;
    }
    // Vertically center the label within the button.
    let label_row = Rect {
        y: inner.y + inner.height / 2,
        height: 1,
        ..inner
    };
    let label = Paragraph::new(spec.label)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(label, label_row);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_every_control_exactly_once() {
        let count: usize = ROWS.iter().map(|row| row.len()).sum();
        assert_eq!(count, 18);

        let actions: Vec<Action> = ROWS.iter().flat_map(|r| r.iter().map(|s| s.action)).collect();
        for d in "0123456789.".chars() {
            assert!(actions.contains(&Action::AddDigit(d)), "missing digit {d}");
        }
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            assert!(actions.contains(&Action::ChooseOperation(op)));
        }
        assert!(actions.contains(&Action::Clear));
        assert!(actions.contains(&Action::DeleteDigit));
        assert!(actions.contains(&Action::Evaluate));
    }

    #[test]
    fn every_row_spans_four_columns() {
        for row in ROWS {
            let total: u16 = row.iter().map(|s| s.span).sum();
            assert_eq!(total, 4);
        }
    }
}
