//! JSON export functionality
//!
//! Exports the full comparison (both derived tables plus the combined
//! view) as one machine-readable document with schema versioning.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::compare::{combine, ExpenseTable};
use crate::error::SpendResult;
use crate::models::{CombinedRow, DerivedRow, PERIOD_A_LABEL, PERIOD_B_LABEL};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full comparison export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Label of the earlier period
    pub period_a: String,

    /// Label of the later period
    pub period_b: String,

    /// Derived Travel rows
    pub travel: Vec<DerivedRow>,

    /// Derived Team Building rows
    pub team_building: Vec<DerivedRow>,

    /// Outer-joined combined rows
    pub combined: Vec<CombinedRow>,
}

impl ComparisonExport {
    /// Build the export document from two (already filtered) tables
    pub fn from_tables(travel: &ExpenseTable, team: &ExpenseTable) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            period_a: PERIOD_A_LABEL.to_string(),
            period_b: PERIOD_B_LABEL.to_string(),
            travel: travel.rows().to_vec(),
            team_building: team.rows().to_vec(),
            combined: combine(travel, team),
        }
    }
}

/// Export the full comparison as pretty-printed JSON
pub fn export_json<W: Write>(
    travel: &ExpenseTable,
    team: &ExpenseTable,
    writer: W,
) -> SpendResult<()> {
    let export = ComparisonExport::from_tables(travel, team);
    serde_json::to_writer_pretty(writer, &export)?;
    Ok(())
}
