//! Direction partitions
//!
//! Classifies verticals by whether they saved money or spent more, split by
//! which dataset(s) show that direction: both, first only, second only.

use std::collections::BTreeSet;

use crate::models::{DerivedRow, Money};

use super::table::ExpenseTable;

/// Direction of change between the two periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Spend went down (strictly negative change)
    Decrease,
    /// Spend went up or stayed flat
    Increase,
}

impl Direction {
    /// Whether a row's change points in this direction
    pub fn matches(&self, row: &DerivedRow) -> bool {
        match self {
            Direction::Decrease => row.is_decrease,
            Direction::Increase => !row.is_decrease,
        }
    }
}

/// The three disjoint vertical buckets for one direction.
///
/// `both ∪ only_a ∪ only_b` covers every vertical matching the direction in
/// either table; the sets are pairwise disjoint by construction. BTreeSet
/// keeps iteration in the sorted order reports list buckets in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectionPartition {
    /// Verticals matching the direction in both tables
    pub both: BTreeSet<String>,
    /// Verticals matching only in the first table
    pub only_a: BTreeSet<String>,
    /// Verticals matching only in the second table
    pub only_b: BTreeSet<String>,
}

impl DirectionPartition {
    pub fn is_empty(&self) -> bool {
        self.both.is_empty() && self.only_a.is_empty() && self.only_b.is_empty()
    }
}

/// Partition the verticals matching `direction` across two tables
pub fn partition(a: &ExpenseTable, b: &ExpenseTable, direction: Direction) -> DirectionPartition {
    let in_a = matching_verticals(a, direction);
    let in_b = matching_verticals(b, direction);

    DirectionPartition {
        both: in_a.intersection(&in_b).cloned().collect(),
        only_a: in_a.difference(&in_b).cloned().collect(),
        only_b: in_b.difference(&in_a).cloned().collect(),
    }
}

/// A vertical's change within the direction-filtered subset of a table.
///
/// Zero when the vertical is absent or its change points the other way; an
/// explicit default, not a caught lookup failure. At most one row can match
/// since verticals are unique per table.
pub fn change_in_direction(table: &ExpenseTable, vertical: &str, direction: Direction) -> Money {
    table
        .get(vertical)
        .filter(|r| direction.matches(r))
        .map(|r| r.change)
        .unwrap_or(Money::zero())
}

fn matching_verticals(table: &ExpenseTable, direction: Direction) -> BTreeSet<String> {
    table
        .rows()
        .iter()
        .filter(|r| direction.matches(r))
        .map(|r| r.vertical.clone())
        .collect()
}
