//! Combined tab: outer-joined totals chart and table

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::compare::{combine, display_order, ExpenseTable};
use crate::display::fmt_money;
use crate::models::{CombinedRow, Money, PERIOD_A_LABEL, PERIOD_B_LABEL};

/// Render the combined view for two (already filtered) tables
pub fn render(frame: &mut Frame, travel: &ExpenseTable, team: &ExpenseTable, area: Rect) {
    let mut rows = combine(travel, team);
    display_order(&mut rows);

    if rows.is_empty() {
        let message = Paragraph::new("No data available for selected verticals")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(message, area);
        return;
    }

    let [chart_area, table_area] =
        Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);

    render_chart(frame, &rows, chart_area);
    render_table(frame, &rows, table_area);
}

fn render_chart(frame: &mut Frame, rows: &[CombinedRow], area: Rect) {
    const BAR_WIDTH: u16 = 6;
    const GROUP_WIDTH: u16 = BAR_WIDTH * 2 + 1 + 2;

    let capacity = (area.width.saturating_sub(2) / GROUP_WIDTH).max(1) as usize;

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .title(format!(
                    " Combined Totals: {} vs {} ",
                    PERIOD_A_LABEL, PERIOD_B_LABEL
                ))
                .title_style(Style::default().add_modifier(Modifier::BOLD))
                .borders(Borders::ALL),
        )
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .group_gap(2);

    for row in rows.iter().take(capacity) {
        let label: String = row.vertical.chars().take(BAR_WIDTH as usize * 2).collect();
        chart = chart.data(
            BarGroup::default().label(label.into()).bars(&[
                bar(row.total_a, Color::Blue),
                bar(row.total_b, Color::Red),
            ]),
        );
    }

    frame.render_widget(chart, area);
}

fn bar(amount: Money, color: Color) -> Bar<'static> {
    Bar::default()
        .value(amount.dollars().max(0) as u64)
        .style(Style::default().fg(color))
}

fn render_table(frame: &mut Frame, rows: &[CombinedRow], area: Rect) {
    let header = Row::new(vec![
        "Vertical",
        "Travel Sep",
        "Travel Oct",
        "TB Sep",
        "TB Oct",
        "Total Sep",
        "Total Oct",
        "Total Change",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let body = rows.iter().map(|row| {
        let change_style = if row.total_change.is_negative() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        Row::new(vec![
            Cell::from(row.vertical.clone()),
            Cell::from(fmt_money(row.travel_a)),
            Cell::from(fmt_money(row.travel_b)),
            Cell::from(fmt_money(row.team_a)),
            Cell::from(fmt_money(row.team_b)),
            Cell::from(fmt_money(row.total_a)),
            Cell::from(fmt_money(row.total_b)),
            Cell::from(fmt_money(row.total_change)).style(change_style),
        ])
    });

    let widths = [
        Constraint::Min(18),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(13),
    ];

    let table_widget = Table::new(body, widths)
        .header(header)
        .block(
            Block::default()
                .title(" Combined Data Table ")
                .borders(Borders::ALL),
        );

    frame.render_widget(table_widget, area);
}
