//! Filter sidebar
//!
//! A checkbox list over the union of verticals, with a "Select All" row on
//! top. An empty selection falls back to showing everything, so unchecking
//! every box never blanks the views.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tui::app::App;

/// Render the filter sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut items = Vec::with_capacity(app.sidebar_len());

    let all_mark = if app.select_all { "[x]" } else { "[ ]" };
    items.push(ListItem::new(format!("{} Select All", all_mark)).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    for vertical in &app.all_verticals {
        let mark = if app.is_checked(vertical) { "[x]" } else { "[ ]" };
        let style = if app.select_all {
            // Faded while select-all owns the selection
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        items.push(ListItem::new(format!("{} {}", mark, vertical)).style(style));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Filters ")
                .title_style(Style::default().fg(Color::Cyan))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.sidebar_index));
    frame.render_stateful_widget(list, area, &mut state);
}
