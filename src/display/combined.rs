//! Combined view rendering

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::CombinedRow;

use super::fmt_money;

#[derive(Tabled)]
struct CombinedDisplayRow {
    #[tabled(rename = "Vertical")]
    vertical: String,
    #[tabled(rename = "Travel Sep")]
    travel_a: String,
    #[tabled(rename = "Travel Oct")]
    travel_b: String,
    #[tabled(rename = "TB Sep")]
    team_a: String,
    #[tabled(rename = "TB Oct")]
    team_b: String,
    #[tabled(rename = "Total Sep")]
    total_a: String,
    #[tabled(rename = "Total Oct")]
    total_b: String,
    #[tabled(rename = "Total Change")]
    total_change: String,
}

impl From<&CombinedRow> for CombinedDisplayRow {
    fn from(row: &CombinedRow) -> Self {
        Self {
            vertical: row.vertical.clone(),
            travel_a: fmt_money(row.travel_a),
            travel_b: fmt_money(row.travel_b),
            team_a: fmt_money(row.team_a),
            team_b: fmt_money(row.team_b),
            total_a: fmt_money(row.total_a),
            total_b: fmt_money(row.total_b),
            total_change: fmt_money(row.total_change),
        }
    }
}

/// Render the combined table. Rows are expected in display order already
/// (descending total October, see `compare::display_order`).
pub fn format_combined_table(rows: &[CombinedRow]) -> String {
    if rows.is_empty() {
        return "Combined View\n\nNo data available for selected verticals\n".to_string();
    }

    let display_rows: Vec<CombinedDisplayRow> = rows.iter().map(CombinedDisplayRow::from).collect();
    let mut rendered = Table::new(display_rows);
    rendered.with(Style::sharp());

    format!("Combined Travel & Team Building Expenses\n\n{}\n", rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{combine, display_order, ExpenseTable};
    use crate::models::{Dataset, ExpenseRow, Money};

    #[test]
    fn test_format_combined() {
        let travel = ExpenseTable::new(
            Dataset::Travel,
            vec![ExpenseRow::new(
                "MIT",
                Money::from_dollars(1803),
                Money::from_dollars(1238),
            )],
        )
        .unwrap();
        let team = ExpenseTable::new(
            Dataset::TeamBuilding,
            vec![ExpenseRow::new(
                "MIT",
                Money::from_cents(50134),
                Money::zero(),
            )],
        )
        .unwrap();

        let mut rows = combine(&travel, &team);
        display_order(&mut rows);
        let output = format_combined_table(&rows);
        assert!(output.contains("MIT"));
        assert!(output.contains("$2,304.34"));
        assert!(output.contains("$1,238.00"));
    }

    #[test]
    fn test_format_combined_empty() {
        assert!(format_combined_table(&[]).contains("No data available"));
    }
}
