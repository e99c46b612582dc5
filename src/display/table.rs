//! Dataset table rendering
//!
//! Formats one dataset's derived rows as a terminal table, sorted the way
//! the dashboard lists them (descending October spend).

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::compare::ExpenseTable;
use crate::models::{DerivedRow, PERIOD_A_LABEL, PERIOD_B_LABEL};

use super::{fmt_money, fmt_pct};

#[derive(Tabled)]
struct ExpenseDisplayRow {
    #[tabled(rename = "Vertical")]
    vertical: String,
    #[tabled(rename = "September")]
    period_a: String,
    #[tabled(rename = "October")]
    period_b: String,
    #[tabled(rename = "Change ($)")]
    change: String,
    #[tabled(rename = "Change (%)")]
    change_pct: String,
    #[tabled(rename = "Decreased")]
    decreased: String,
}

impl From<&DerivedRow> for ExpenseDisplayRow {
    fn from(row: &DerivedRow) -> Self {
        Self {
            vertical: row.vertical.clone(),
            period_a: fmt_money(row.period_a),
            period_b: fmt_money(row.period_b),
            change: fmt_money(row.change),
            change_pct: fmt_pct(row.change_pct),
            decreased: if row.is_decrease { "Yes" } else { "No" }.to_string(),
        }
    }
}

/// Render a dataset's table with a heading line
pub fn format_expense_table(table: &ExpenseTable) -> String {
    if table.is_empty() {
        return format!(
            "{} Expenses by Vertical\n\nNo data available for selected verticals\n",
            table.dataset().label()
        );
    }

    let rows: Vec<ExpenseDisplayRow> = table
        .rows_by_period_b_desc()
        .into_iter()
        .map(ExpenseDisplayRow::from)
        .collect();

    let mut rendered = Table::new(rows);
    rendered.with(Style::sharp());

    format!(
        "{} Expenses by Vertical ({} vs {})\n\n{}\n",
        table.dataset().label(),
        PERIOD_A_LABEL,
        PERIOD_B_LABEL,
        rendered
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, ExpenseRow, Money};
    use std::collections::HashSet;

    fn sample() -> ExpenseTable {
        ExpenseTable::new(
            Dataset::Travel,
            vec![
                ExpenseRow::new("COO", Money::from_dollars(1803), Money::from_dollars(1238)),
                ExpenseRow::new(
                    "Corporate",
                    Money::from_dollars(114624),
                    Money::from_dollars(77000),
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_format_contains_rows_and_heading() {
        let output = format_expense_table(&sample());
        assert!(output.starts_with("Travel Expenses by Vertical (Sep vs Oct)"));
        assert!(output.contains("Corporate"));
        assert!(output.contains("$114,624.00"));
        assert!(output.contains("-$37,624.00"));
        assert!(output.contains("Yes"));
        // Corporate's October spend is larger, so it must come first
        assert!(output.find("Corporate").unwrap() < output.find("COO").unwrap());
    }

    #[test]
    fn test_empty_view_message() {
        let keep: HashSet<String> = ["Nope".to_string()].into();
        let output = format_expense_table(&sample().filter(&keep));
        assert!(output.contains("No data available"));
    }
}
