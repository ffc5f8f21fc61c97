//! Session tape: evaluated expressions, newest at the bottom. In-memory
//! only; nothing is ever written to disk.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.width == 0 {
        return;
    }

    let block = Block::default()
        .title(" Tape ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let visible = block.inner(area).height as usize;
    let skip = state.tape.len().saturating_sub(visible);

    let items: Vec<ListItem> = if state.tape.is_empty() {
        vec![ListItem::new(Span::styled(
            " No calculations yet",
            Theme::tape_timestamp(),
        ))]
    } else {
        state
            .tape
            .iter()
            .skip(skip)
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("[{}] ", entry.timestamp), Theme::tape_timestamp()),
                    Span::styled(entry.expression.clone(), Theme::tape_expression()),
                    Span::styled(format!(" = {}", entry.result), Theme::tape_result()),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
