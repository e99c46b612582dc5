//! Expense row types
//!
//! Typed records replacing the label-indexed frames the numbers originally
//! lived in. `ExpenseRow` is the raw input shape; `DerivedRow` carries the
//! computed comparison fields; `CombinedRow` is one vertical's slice of the
//! outer-joined view across both datasets.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Money;

/// Display label for the earlier compared period
pub const PERIOD_A_LABEL: &str = "Sep";

/// Display label for the later compared period
pub const PERIOD_B_LABEL: &str = "Oct";

/// Which expense dataset a table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dataset {
    Travel,
    TeamBuilding,
}

impl Dataset {
    /// Human-readable dataset label
    pub const fn label(&self) -> &'static str {
        match self {
            Dataset::Travel => "Travel",
            Dataset::TeamBuilding => "Team Building",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A raw input row: one vertical's spend in each of the two periods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRow {
    /// Vertical label, unique within its dataset
    pub vertical: String,
    /// Spend in the earlier period
    pub period_a: Money,
    /// Spend in the later period
    pub period_b: Money,
}

impl ExpenseRow {
    pub fn new(vertical: impl Into<String>, period_a: Money, period_b: Money) -> Self {
        Self {
            vertical: vertical.into(),
            period_a,
            period_b,
        }
    }
}

/// An expense row with its comparison fields computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRow {
    pub vertical: String,
    pub period_a: Money,
    pub period_b: Money,
    /// period_b - period_a, exact
    pub change: Money,
    /// Percent change rounded to 2 decimal places; 0 when period_a is zero
    pub change_pct: f64,
    /// Strictly negative change; zero change is not a decrease
    pub is_decrease: bool,
}

impl DerivedRow {
    /// Compute the derived fields for one row.
    ///
    /// The percent formula divides by period_a, so a zero period_a maps to
    /// 0% by policy rather than NaN. Any non-zero denominator goes through
    /// the formula unguarded.
    pub fn from_row(row: ExpenseRow) -> Self {
        let change = row.period_b - row.period_a;
        let change_pct = if row.period_a.is_zero() {
            0.0
        } else {
            round2(change.cents() as f64 / row.period_a.cents() as f64 * 100.0)
        };
        Self {
            vertical: row.vertical,
            period_a: row.period_a,
            period_b: row.period_b,
            change,
            change_pct,
            is_decrease: change.is_negative(),
        }
    }
}

/// One vertical's row in the outer-joined view of both datasets.
///
/// A side missing the vertical contributes zeros rather than dropping the
/// row, so the combined view always covers the union of both tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedRow {
    pub vertical: String,
    pub travel_a: Money,
    pub travel_b: Money,
    pub travel_change: Money,
    pub team_a: Money,
    pub team_b: Money,
    pub team_change: Money,
    pub total_a: Money,
    pub total_b: Money,
    pub total_change: Money,
}

/// Round to 2 decimal places
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
