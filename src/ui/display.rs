//! The two-line result display: the committed operand with its pending
//! operator on top, the operand being typed below, both right-aligned the
//! way a calculator screen reads.

use crate::app::state::AppState;
use crate::calc::format::format_operand;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" crabcalc ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let previous_line = pending_line(state);
    let current_line = format_operand(state.calc.current_operand.as_deref()).unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(previous_line, Theme::previous_operand())),
        Line::from(Span::styled(current_line, Theme::current_operand())),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Right);
    frame.render_widget(paragraph, inner);
}

/// "<previous> <op>", or empty when nothing is committed yet.
fn pending_line(state: &AppState) -> String {
    let previous = format_operand(state.calc.previous_operand.as_deref());
    let symbol = state.calc.operation.map(|op| op.symbol());
    match (previous, symbol) {
        (Some(prev), Some(sym)) => format!("{} {}", prev, sym),
        (Some(prev), None) => prev,
        (None, Some(sym)) => sym.to_string(),
        (None, None) => String::new(),
    }
}
