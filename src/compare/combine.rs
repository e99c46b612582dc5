//! Combined cross-dataset view
//!
//! Outer-joins two (already filtered) tables on vertical: every vertical in
//! either table gets a row, with zeros filled in for the side that lacks it.

use std::collections::BTreeMap;

use crate::models::{CombinedRow, DerivedRow, Money};

use super::table::ExpenseTable;

/// Outer union of both tables' verticals with per-row totals.
///
/// A vertical present in only one table still appears, carrying zeros on
/// the missing side, so the row count always equals the size of the union.
/// Rows come back sorted by vertical; use [`display_order`] for the
/// descending-total order reports render in.
pub fn combine(travel: &ExpenseTable, team: &ExpenseTable) -> Vec<CombinedRow> {
    let mut sides: BTreeMap<&str, (Option<&DerivedRow>, Option<&DerivedRow>)> = BTreeMap::new();
    for row in travel.rows() {
        sides.entry(row.vertical.as_str()).or_default().0 = Some(row);
    }
    for row in team.rows() {
        sides.entry(row.vertical.as_str()).or_default().1 = Some(row);
    }

    sides
        .into_iter()
        .map(|(vertical, (travel_row, team_row))| {
            let (travel_a, travel_b, travel_change) = side_amounts(travel_row);
            let (team_a, team_b, team_change) = side_amounts(team_row);
            let total_a = travel_a + team_a;
            let total_b = travel_b + team_b;
            CombinedRow {
                vertical: vertical.to_string(),
                travel_a,
                travel_b,
                travel_change,
                team_a,
                team_b,
                team_change,
                total_a,
                total_b,
                total_change: total_b - total_a,
            }
        })
        .collect()
}

/// Sort combined rows by descending later-period total, vertical as tiebreak
pub fn display_order(rows: &mut [CombinedRow]) {
    rows.sort_by(|a, b| b.total_b.cmp(&a.total_b).then(a.vertical.cmp(&b.vertical)));
}

fn side_amounts(row: Option<&DerivedRow>) -> (Money, Money, Money) {
    match row {
        Some(r) => (r.period_a, r.period_b, r.change),
        None => (Money::zero(), Money::zero(), Money::zero()),
    }
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
    fn test_combine_covers_union_exactly() {
        let travel = table(Dataset::Travel, &[("A", 10, 20), ("B", 5, 5)]);
        let team = table(Dataset::TeamBuilding, &[("B", 7, 3), ("C", 1, 2)]);
        let rows = combine(&travel, &team);
        let verticals: Vec<&str> = rows.iter().map(|r| r.vertical.as_str()).collect();
        assert_eq!(verticals, ["A", "B", "C"]);
    }

    #[test]
    fn test_missing_side_fills_zero() {
        let travel = table(Dataset::Travel, &[("A", 10, 20)]);
        let team = table(Dataset::TeamBuilding, &[("C", 1, 2)]);
        let rows = combine(&travel, &team);

        let a = &rows[0];
        assert_eq!(a.team_a, Money::zero());
        assert_eq!(a.team_b, Money::zero());
        assert_eq!(a.team_change, Money::zero());
        assert_eq!(a.total_a, Money::from_dollars(10));
        assert_eq!(a.total_b, Money::from_dollars(20));

        let c = &rows[1];
        assert_eq!(c.travel_b, Money::zero());
        assert_eq!(c.total_change, Money::from_dollars(1));
    }

    #[test]
    fn test_totals_sum_both_sides() {
        let travel = table(Dataset::Travel, &[("A", 100, 60)]);
        let team = table(Dataset::TeamBuilding, &[("A", 40, 50)]);
        let rows = combine(&travel, &team);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.total_a, Money::from_dollars(140));
        assert_eq!(row.total_b, Money::from_dollars(110));
        assert_eq!(row.total_change, Money::from_dollars(-30));
        assert_eq!(row.travel_change, Money::from_dollars(-40));
        assert_eq!(row.team_change, Money::from_dollars(10));
    }

    #[test]
    fn test_mit_across_fixture_datasets() {
        use crate::data::load_tables;
        use std::collections::HashSet;

        let (travel, team) = load_tables().unwrap();
        let keep: HashSet<String> = ["MIT".to_string()].into();
        let rows = combine(&travel.filter(&keep), &team.filter(&keep));

        assert_eq!(rows.len(), 1);
        let mit = &rows[0];
        // 1803.00 + 501.34 in September, 1238.00 + 0 in October
        assert_eq!(mit.total_a, Money::from_cents(230434));
        assert_eq!(mit.total_b, Money::from_cents(123800));
        assert_eq!(mit.total_change, Money::from_cents(-106634));
    }

    #[test]
    fn test_display_order_sorts_by_total_desc() {
        let travel = table(Dataset::Travel, &[("Low", 0, 1), ("High", 0, 9)]);
        let team = table(Dataset::TeamBuilding, &[("Mid", 0, 5)]);
        let mut rows = combine(&travel, &team);
        display_order(&mut rows);
        let verticals: Vec<&str> = rows.iter().map(|r| r.vertical.as_str()).collect();
        assert_eq!(verticals, ["High", "Mid", "Low"]);
    }
}
