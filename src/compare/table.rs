//! Validated expense tables
//!
//! `ExpenseTable` is the entry point of the comparison pipeline: raw rows
//! go in once, get validated and derived, and everything downstream is a
//! pure read of the result.

use std::collections::HashSet;

use crate::error::{SpendError, SpendResult};
use crate::models::{Dataset, DerivedRow, ExpenseRow, Money, PERIOD_A_LABEL, PERIOD_B_LABEL};

/// An ordered, validated sequence of derived rows for one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseTable {
    dataset: Dataset,
    rows: Vec<DerivedRow>,
}

impl ExpenseTable {
    /// Build a table from raw rows, validating and deriving each one.
    ///
    /// Input order is preserved. Fails on a repeated vertical label or a
    /// negative period amount; derivation itself is total, so validated
    /// tables never fail downstream.
    pub fn new(dataset: Dataset, rows: Vec<ExpenseRow>) -> SpendResult<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert(row.vertical.as_str()) {
                return Err(SpendError::DuplicateVertical {
                    dataset: dataset.label().to_string(),
                    vertical: row.vertical.clone(),
                });
            }
            for (period, amount) in [(PERIOD_A_LABEL, row.period_a), (PERIOD_B_LABEL, row.period_b)]
            {
                if amount.is_negative() {
                    return Err(SpendError::InvalidAmount {
                        dataset: dataset.label().to_string(),
                        vertical: row.vertical.clone(),
                        period: period.to_string(),
                        amount: amount.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            dataset,
            rows: rows.into_iter().map(DerivedRow::from_row).collect(),
        })
    }

    pub fn dataset(&self) -> Dataset {
        self.dataset
    }

    pub fn rows(&self) -> &[DerivedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Vertical labels in table order
    pub fn verticals(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.vertical.as_str())
    }

    /// Look up a row by vertical label
    pub fn get(&self, vertical: &str) -> Option<&DerivedRow> {
        self.rows.iter().find(|r| r.vertical == vertical)
    }

    /// A row's change amount, zero when the vertical is absent.
    ///
    /// This is the explicit form of the "missing side counts as zero"
    /// convention used by the combined view.
    pub fn change_or_zero(&self, vertical: &str) -> Money {
        self.get(vertical).map(|r| r.change).unwrap_or(Money::zero())
    }

    /// Restrict the table to the given verticals, preserving row order.
    ///
    /// An empty `keep` set deliberately means "no filter" and returns the
    /// full table: the filter UI treats an empty selection as selecting
    /// everything, and the fallback lives here so every caller gets it.
    /// The source table is never mutated; this builds a new view.
    pub fn filter(&self, keep: &HashSet<String>) -> ExpenseTable {
        if keep.is_empty() {
            return self.clone();
        }
        Self {
            dataset: self.dataset,
            rows: self
                .rows
                .iter()
                .filter(|r| keep.contains(&r.vertical))
                .cloned()
                .collect(),
        }
    }

    /// Rows sorted by descending later-period spend, the order every
    /// chart and data table displays in
    pub fn rows_by_period_b_desc(&self) -> Vec<&DerivedRow> {
        let mut rows: Vec<&DerivedRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| b.period_b.cmp(&a.period_b).then(a.vertical.cmp(&b.vertical)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<ExpenseRow>) -> SpendResult<ExpenseTable> {
        ExpenseTable::new(Dataset::Travel, rows)
    }

    fn row(vertical: &str, a: i64, b: i64) -> ExpenseRow {
        ExpenseRow::new(vertical, Money::from_dollars(a), Money::from_dollars(b))
    }

    #[test]
    fn test_new_preserves_order_and_derives() {
        let t = table(vec![row("B", 100, 150), row("A", 200, 120)]).unwrap();
        let verticals: Vec<&str> = t.verticals().collect();
        assert_eq!(verticals, ["B", "A"]);
        assert_eq!(t.rows()[0].change, Money::from_dollars(50));
        assert!(t.rows()[1].is_decrease);
    }

    #[test]
    fn test_duplicate_vertical_rejected() {
        let err = table(vec![row("COO", 1, 2), row("COO", 3, 4)]).unwrap_err();
        match err {
            SpendError::DuplicateVertical { dataset, vertical } => {
                assert_eq!(dataset, "Travel");
                assert_eq!(vertical, "COO");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = table(vec![row("Aviation", -5, 10)]).unwrap_err();
        match err {
            SpendError::InvalidAmount { vertical, period, .. } => {
                assert_eq!(vertical, "Aviation");
                assert_eq!(period, "Sep");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = table(vec![row("Aviation", 5, -10)]).unwrap_err();
        assert!(err.is_invalid_amount());
    }

    #[test]
    fn test_filter_empty_set_returns_full_table() {
        let t = table(vec![row("A", 1, 2), row("B", 3, 4)]).unwrap();
        let filtered = t.filter(&HashSet::new());
        assert_eq!(filtered, t);
    }

    #[test]
    fn test_filter_keeps_subsequence_in_order() {
        let t = table(vec![row("A", 1, 2), row("B", 3, 4), row("C", 5, 6)]).unwrap();
        let keep: HashSet<String> = ["C".to_string(), "A".to_string()].into();
        let filtered = t.filter(&keep);
        let verticals: Vec<&str> = filtered.verticals().collect();
        assert_eq!(verticals, ["A", "C"]);
        // source untouched
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_filter_unknown_vertical_yields_empty_view() {
        let t = table(vec![row("A", 1, 2)]).unwrap();
        let keep: HashSet<String> = ["Nope".to_string()].into();
        assert!(t.filter(&keep).is_empty());
    }

    #[test]
    fn test_change_or_zero() {
        let t = table(vec![row("A", 100, 80)]).unwrap();
        assert_eq!(t.change_or_zero("A"), Money::from_dollars(-20));
        assert_eq!(t.change_or_zero("Missing"), Money::zero());
    }

    #[test]
    fn test_rows_by_period_b_desc() {
        let t = table(vec![row("Low", 1, 10), row("High", 1, 30), row("Mid", 1, 20)]).unwrap();
        let sorted: Vec<&str> = t
            .rows_by_period_b_desc()
            .iter()
            .map(|r| r.vertical.as_str())
            .collect();
        assert_eq!(sorted, ["High", "Mid", "Low"]);
    }
}
