//! TUI views
//!
//! Top-level layout: summary metrics across the top, the filter sidebar on
//! the left, the tabbed content area on the right, a key-hint footer, and
//! the breakdown overlay on demand.

pub mod breakdown;
pub mod combined;
pub mod expenses;
pub mod sidebar;
pub mod summary;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::app::{ActiveTab, App};

/// Render the whole UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let [summary_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    summary::render(frame, app, summary_area);

    let [sidebar_area, content_area] =
        Layout::horizontal([Constraint::Length(30), Constraint::Min(0)]).areas(body_area);

    sidebar::render(frame, app, sidebar_area);
    render_content(frame, app, content_area);
    render_footer(frame, footer_area);

    if app.show_breakdown {
        breakdown::render(frame, app);
    }
}

fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let [tabs_area, view_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let titles: Vec<Line> = ActiveTab::ALL.iter().map(|t| Line::from(t.label())).collect();
    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, tabs_area);

    let (travel, team) = app.filtered();
    match app.active_tab {
        ActiveTab::Travel => expenses::render(frame, &travel, view_area),
        ActiveTab::TeamBuilding => expenses::render(frame, &team, view_area),
        ActiveTab::Combined => combined::render(frame, &travel, &team, view_area),
    }
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(
        " 1/2/3 or Tab: views │ j/k: move │ space: toggle │ a: select all │ b: breakdown │ q: quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, area);
}
