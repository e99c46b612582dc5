//! Summary metrics header

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::compare::{summarize, verticals_with_decrease};
use crate::display::fmt_money_whole;
use crate::models::Money;
use crate::tui::app::App;

/// Render the four headline metrics over the current filter selection
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let (travel, team) = app.filtered();
    let travel_summary = summarize(&travel);
    let team_summary = summarize(&team);
    let total = travel_summary + team_summary;
    let saved_count = verticals_with_decrease([&travel, &team]).len();

    let metric = |label: &str, amount: Money| -> Line {
        let color = if amount.is_negative() {
            Color::Red
        } else {
            Color::Green
        };
        Line::from(vec![
            Span::styled(format!("{:<28}", label), Style::default().fg(Color::White)),
            Span::styled(
                fmt_money_whole(amount),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let lines = vec![
        metric("Travel Savings", travel_summary.net()),
        metric("Team Building Savings", team_summary.net()),
        metric("Total Savings", total.net()),
        Line::from(vec![
            Span::styled(
                format!("{:<28}", "Verticals Who Saved Money"),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                saved_count.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let block = Block::default()
        .title(" Credit Card Spending Analysis: Sep vs Oct ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
