//! Savings and increase summaries
//!
//! Aggregates a table's changes into the headline figures: total saved
//! across decreasing verticals, total extra spend across the rest, and the
//! net the dashboard displays.

use std::collections::BTreeSet;
use std::ops::Add;

use crate::models::Money;

use super::table::ExpenseTable;

/// Aggregated savings and increases for one table (or a sum of tables)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SavingsSummary {
    /// Sum of -change over decreasing rows; non-negative
    pub savings: Money,
    /// Sum of change over non-decreasing rows; non-negative
    pub increases: Money,
}

impl SavingsSummary {
    /// The figure shown as "savings" in reports.
    ///
    /// Inherited convention: when anything increased, show savings minus
    /// increases; when nothing increased, show raw savings rather than a
    /// zero-offset net. The two only coincide when increases are zero, so
    /// this must not be simplified to a plain net.
    pub fn net(&self) -> Money {
        if self.increases > Money::zero() {
            self.savings - self.increases
        } else {
            self.savings
        }
    }
}

impl Add for SavingsSummary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            savings: self.savings + other.savings,
            increases: self.increases + other.increases,
        }
    }
}

/// Aggregate one table's rows into a savings summary
pub fn summarize(table: &ExpenseTable) -> SavingsSummary {
    let savings = table
        .rows()
        .iter()
        .filter(|r| r.is_decrease)
        .map(|r| -r.change)
        .sum();
    let increases = table
        .rows()
        .iter()
        .filter(|r| !r.is_decrease)
        .map(|r| r.change)
        .sum();
    SavingsSummary { savings, increases }
}

/// Distinct verticals that decreased in any of the given tables.
///
/// Backs the "verticals who saved money" headline count; a vertical that
/// saved in both datasets counts once.
pub fn verticals_with_decrease<'a>(
    tables: impl IntoIterator<Item = &'a ExpenseTable>,
) -> BTreeSet<String> {
    tables
        .into_iter()
        .flat_map(|t| t.rows())
        .filter(|r| r.is_decrease)
        .map(|r| r.vertical.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, ExpenseRow};

    fn table(dataset: Dataset, rows: &[(&str, i64, i64)]) -> ExpenseTable {
        ExpenseTable::new(
            dataset,
            rows.iter()
                .map(|(v, a, b)| {
                    ExpenseRow::new(*v, Money::from_dollars(*a), Money::from_dollars(*b))
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_summarize_splits_directions() {
        let t = table(
            Dataset::Travel,
            &[("Down", 100, 70), ("Up", 50, 80), ("Flat", 10, 10)],
        );
        let summary = summarize(&t);
        assert_eq!(summary.savings, Money::from_dollars(30));
        // Flat contributes zero to increases but sits on the non-decrease side
        assert_eq!(summary.increases, Money::from_dollars(30));
    }

    #[test]
    fn test_net_with_increases_is_offset() {
        let summary = SavingsSummary {
            savings: Money::from_dollars(100),
            increases: Money::from_dollars(40),
        };
        assert_eq!(summary.net(), Money::from_dollars(60));
    }

    #[test]
    fn test_net_without_increases_is_raw_savings() {
        let summary = SavingsSummary {
            savings: Money::from_dollars(100),
            increases: Money::zero(),
        };
        assert_eq!(summary.net(), Money::from_dollars(100));
    }

    #[test]
    fn test_net_can_be_negative() {
        let summary = SavingsSummary {
            savings: Money::from_dollars(10),
            increases: Money::from_dollars(25),
        };
        assert_eq!(summary.net(), Money::from_dollars(-15));
    }

    #[test]
    fn test_summary_addition() {
        let a = SavingsSummary {
            savings: Money::from_dollars(10),
            increases: Money::from_dollars(5),
        };
        let b = SavingsSummary {
            savings: Money::from_dollars(3),
            increases: Money::from_dollars(7),
        };
        let total = a + b;
        assert_eq!(total.savings, Money::from_dollars(13));
        assert_eq!(total.increases, Money::from_dollars(12));
    }

    #[test]
    fn test_verticals_with_decrease_unions_without_duplicates() {
        let travel = table(Dataset::Travel, &[("A", 100, 50), ("B", 10, 20)]);
        let team = table(Dataset::TeamBuilding, &[("A", 30, 10), ("C", 40, 20)]);
        let saved = verticals_with_decrease([&travel, &team]);
        let names: Vec<&str> = saved.iter().map(String::as_str).collect();
        assert_eq!(names, ["A", "C"]);
    }
}
