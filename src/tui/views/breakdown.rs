//! Breakdown overlay: who saved money and where

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::breakdown::format_breakdown;
use crate::tui::app::App;

/// Render the breakdown overlay over the current frame
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(frame.area(), 70, 80);
    frame.render_widget(Clear, area);

    let (travel, team) = app.filtered();
    let text = format_breakdown(&travel, &team);

    let block = Block::default()
        .title(" Breakdown: Who Saved Money & Where (Esc to close) ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// A rect centered in `area` taking the given percentages of each dimension
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, rect, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(vertical);

    rect
}
