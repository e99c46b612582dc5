//! CSV export functionality
//!
//! Writes the derived per-dataset rows and the combined view as
//! spreadsheet-compatible CSV. Amounts are emitted as plain decimal
//! dollars, not display-formatted strings.

use std::io::Write;

use crate::compare::ExpenseTable;
use crate::error::SpendResult;
use crate::models::{CombinedRow, PERIOD_A_LABEL, PERIOD_B_LABEL};

/// Export both datasets' derived rows to CSV
pub fn export_tables_csv<W: Write>(
    travel: &ExpenseTable,
    team: &ExpenseTable,
    writer: W,
) -> SpendResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "Dataset",
        "Vertical",
        PERIOD_A_LABEL,
        PERIOD_B_LABEL,
        "Change",
        "Change %",
        "Decreased",
    ])?;

    for table in [travel, team] {
        let dataset = table.dataset().label();
        for row in table.rows() {
            csv_writer.write_record([
                dataset.to_string(),
                row.vertical.clone(),
                format!("{:.2}", row.period_a.as_f64()),
                format!("{:.2}", row.period_b.as_f64()),
                format!("{:.2}", row.change.as_f64()),
                format!("{:.2}", row.change_pct),
                row.is_decrease.to_string(),
            ])?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export the combined view to CSV
pub fn export_combined_csv<W: Write>(rows: &[CombinedRow], writer: W) -> SpendResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "Vertical".to_string(),
        format!("Travel {}", PERIOD_A_LABEL),
        format!("Travel {}", PERIOD_B_LABEL),
        format!("Team Building {}", PERIOD_A_LABEL),
        format!("Team Building {}", PERIOD_B_LABEL),
        format!("Total {}", PERIOD_A_LABEL),
        format!("Total {}", PERIOD_B_LABEL),
        "Total Change".to_string(),
    ])?;

    for row in rows {
        csv_writer.write_record([
            row.vertical.clone(),
            format!("{:.2}", row.travel_a.as_f64()),
            format!("{:.2}", row.travel_b.as_f64()),
            format!("{:.2}", row.team_a.as_f64()),
            format!("{:.2}", row.team_b.as_f64()),
            format!("{:.2}", row.total_a.as_f64()),
            format!("{:.2}", row.total_b.as_f64()),
            format!("{:.2}", row.total_change.as_f64()),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
