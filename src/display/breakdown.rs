//! Breakdown rendering: who saved money and where
//!
//! Lists the direction-partition buckets with per-vertical amounts, the
//! textual form of the dashboard's expander panel. Savings amounts are
//! shown positive (change negated); increases are shown as-is.

use std::collections::BTreeSet;

use crate::compare::{change_in_direction, partition, Direction, ExpenseTable};
use crate::models::Money;

use super::fmt_money_whole;

/// Render both direction partitions for two (already filtered) tables
pub fn format_breakdown(travel: &ExpenseTable, team: &ExpenseTable) -> String {
    let mut output = String::new();

    output.push_str("Verticals Who Saved Money\n");
    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format_direction(travel, team, Direction::Decrease));

    output.push('\n');
    output.push_str("Verticals Who Spent More\n");
    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format_direction(travel, team, Direction::Increase));

    output
}

fn format_direction(travel: &ExpenseTable, team: &ExpenseTable, direction: Direction) -> String {
    let buckets = partition(travel, team, direction);
    if buckets.is_empty() {
        return "  (none)\n".to_string();
    }

    let (verb, sign) = match direction {
        Direction::Decrease => ("Saved", -1),
        Direction::Increase => ("Spent More", 1),
    };
    let amount = |table: &ExpenseTable, vertical: &str| -> Money {
        let change = change_in_direction(table, vertical, direction);
        if sign < 0 {
            -change
        } else {
            change
        }
    };

    let mut output = String::new();

    if !buckets.both.is_empty() {
        output.push_str(&format!("{} in BOTH Travel & Team Building:\n", verb));
        for vertical in &buckets.both {
            let travel_amt = amount(travel, vertical);
            let team_amt = amount(team, vertical);
            output.push_str(&format!(
                "  • {}: {} (Travel) + {} (Team Building) = {} total\n",
                vertical,
                fmt_money_whole(travel_amt),
                fmt_money_whole(team_amt),
                fmt_money_whole(travel_amt + team_amt)
            ));
        }
    }

    output.push_str(&format_single_bucket(
        &buckets.only_a,
        &format!("{} in Travel Only:", verb),
        |v| amount(travel, v),
    ));
    output.push_str(&format_single_bucket(
        &buckets.only_b,
        &format!("{} in Team Building Only:", verb),
        |v| amount(team, v),
    ));

    output
}

fn format_single_bucket(
    bucket: &BTreeSet<String>,
    heading: &str,
    amount: impl Fn(&str) -> Money,
) -> String {
    if bucket.is_empty() {
        return String::new();
    }

    let mut output = format!("{}\n", heading);
    for vertical in bucket {
        output.push_str(&format!(
            "  • {}: {}\n",
            vertical,
            fmt_money_whole(amount(vertical))
        ));
    }
    output
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
    fn test_breakdown_lists_buckets_with_amounts() {
        let travel = table(Dataset::Travel, &[("A", 100, 40), ("B", 10, 30)]);
        let team = table(Dataset::TeamBuilding, &[("A", 50, 20), ("C", 80, 90)]);

        let output = format_breakdown(&travel, &team);
        // A saved in both: 60 travel + 30 team = 90
        assert!(output.contains("Saved in BOTH Travel & Team Building:"));
        assert!(output.contains("A: $60 (Travel) + $30 (Team Building) = $90 total"));
        // B increased in travel only, C in team only
        assert!(output.contains("Spent More in Travel Only:"));
        assert!(output.contains("B: $20"));
        assert!(output.contains("Spent More in Team Building Only:"));
        assert!(output.contains("C: $10"));
    }

    #[test]
    fn test_breakdown_empty_direction() {
        let travel = table(Dataset::Travel, &[("A", 10, 30)]);
        let team = table(Dataset::TeamBuilding, &[("A", 5, 6)]);
        let output = format_breakdown(&travel, &team);
        // nothing decreased anywhere
        assert!(output.contains("(none)"));
    }
}
