//! Per-dataset tab: Sep vs Oct bar chart over a derived-rows table

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::compare::ExpenseTable;
use crate::display::{fmt_money, fmt_pct};
use crate::models::{DerivedRow, Money, PERIOD_A_LABEL, PERIOD_B_LABEL};

/// Render one dataset's chart and table
pub fn render(frame: &mut Frame, table: &ExpenseTable, area: Rect) {
    if table.is_empty() {
        let message = Paragraph::new("No data available for selected verticals")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(message, area);
        return;
    }

    let [chart_area, table_area] =
        Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);

    let rows = table.rows_by_period_b_desc();
    render_chart(
        frame,
        &rows,
        chart_area,
        &format!(
            " {} Expenses: {} vs {} ",
            table.dataset().label(),
            PERIOD_A_LABEL,
            PERIOD_B_LABEL
        ),
    );
    render_table(frame, &rows, table_area);
}

/// Grouped Sep/Oct bars for as many verticals as fit the width
fn render_chart(frame: &mut Frame, rows: &[&DerivedRow], area: Rect, title: &str) {
    const BAR_WIDTH: u16 = 6;
    const GROUP_WIDTH: u16 = BAR_WIDTH * 2 + 1 + 2; // two bars, bar gap, group gap

    let capacity = (area.width.saturating_sub(2) / GROUP_WIDTH).max(1) as usize;

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .title(title)
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
                bar(row.period_a, Color::Blue),
                bar(row.period_b, Color::Red),
            ]),
        );
    }

    frame.render_widget(chart, area);
}

fn bar(amount: Money, color: Color) -> Bar<'static> {
    Bar::default()
        .value(amount.dollars().max(0) as u64)
        .text_value(short_amount(amount))
        .style(Style::default().fg(color))
}

/// Compact dollar label for bar tops, e.g. `$92K`
fn short_amount(amount: Money) -> String {
    let dollars = amount.dollars();
    if dollars.abs() >= 1000 {
        format!("${}K", (dollars as f64 / 1000.0).round() as i64)
    } else {
        format!("${}", dollars)
    }
}

fn render_table(frame: &mut Frame, rows: &[&DerivedRow], area: Rect) {
    let header = Row::new(vec![
        "Vertical",
        "September",
        "October",
        "Change ($)",
        "Change (%)",
        "Decreased",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let body = rows.iter().map(|row| {
        let change_style = if row.is_decrease {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        Row::new(vec![
            Cell::from(row.vertical.clone()),
            Cell::from(fmt_money(row.period_a)),
            Cell::from(fmt_money(row.period_b)),
            Cell::from(fmt_money(row.change)).style(change_style),
            Cell::from(fmt_pct(row.change_pct)).style(change_style),
            Cell::from(if row.is_decrease { "Yes" } else { "No" }),
        ])
    });

    let widths = [
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(13),
        Constraint::Length(11),
        Constraint::Length(9),
    ];

    let table_widget = Table::new(body, widths)
        .header(header)
        .block(Block::default().title(" Data Table ").borders(Borders::ALL));

    frame.render_widget(table_widget, area);
}
