//! Fixture datasets
//!
//! The September/October figures the dashboard was built around. Both
//! tables are constructed once at startup; everything else is a view.

use crate::compare::ExpenseTable;
use crate::error::SpendResult;
use crate::models::{Dataset, ExpenseRow, Money};

/// The Travel dataset (whole-dollar amounts)
pub fn travel_rows() -> Vec<ExpenseRow> {
    let dollars = |v: &str, sep: i64, oct: i64| {
        ExpenseRow::new(v, Money::from_dollars(sep), Money::from_dollars(oct))
    };
    vec![
        dollars("Life Science", 66174, 91745),
        dollars("Manufacturing", 51407, 34983),
        dollars("Corporate", 114624, 77000),
        dollars("Distribution", 22307, 29638),
        dollars("Automotive", 71070, 40009),
        dollars("NAD - Ops Management", 23730, 34825),
        dollars("Financial", 23730, 34825),
        dollars("Aviation", 26273, 19134),
        dollars("InSite", 19122, 7751),
        dollars("Other", 6040, 7543),
        dollars("COO", 1803, 1238),
        dollars("MIT", 1803, 1238),
    ]
}

/// The Team Building dataset (amounts carry cents)
pub fn team_building_rows() -> Vec<ExpenseRow> {
    let cents = |v: &str, sep: i64, oct: i64| {
        ExpenseRow::new(v, Money::from_cents(sep), Money::from_cents(oct))
    };
    vec![
        cents("Life Science", 19_177_14, 37_727_36),
        cents("Manufacturing", 23_147_97, 27_845_67),
        cents("Technology", 12_664_13, 22_499_17),
        cents("Corporate", 25_689_60, 21_722_44),
        cents("Distribution", 10_087_20, 15_773_18),
        cents("Automotive", 11_914_82, 10_901_07),
        cents("NAD - Ops Management", 15_458_50, 10_740_03),
        cents("Financial", 7_031_93, 8_607_75),
        cents("Aviation", 10_277_78, 5_792_81),
        cents("InSite", 2_863_57, 1_123_72),
        cents("Other", 474_22, 1_074_82),
        cents("COO", 903_23, 84_92),
        cents("Puerto Rico", 335_22, 25_02),
        cents("Transitions", 0, 0),
        cents("MIT", 501_34, 0),
    ]
}

/// Build both validated tables from the fixture data
pub fn load_tables() -> SpendResult<(ExpenseTable, ExpenseTable)> {
    let travel = ExpenseTable::new(Dataset::Travel, travel_rows())?;
    let team = ExpenseTable::new(Dataset::TeamBuilding, team_building_rows())?;
    Ok((travel, team))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_tables_validate() {
        let (travel, team) = load_tables().unwrap();
        assert_eq!(travel.len(), 12);
        assert_eq!(team.len(), 15);
    }

    #[test]
    fn test_known_fixture_values() {
        let (travel, team) = load_tables().unwrap();

        let life_science = travel.get("Life Science").unwrap();
        assert_eq!(life_science.change, Money::from_dollars(25571));
        assert_eq!(life_science.change_pct, 38.64);
        assert!(!life_science.is_decrease);

        let transitions = team.get("Transitions").unwrap();
        assert_eq!(transitions.change, Money::zero());
        assert_eq!(transitions.change_pct, 0.0);
        assert!(!transitions.is_decrease);

        let mit = team.get("MIT").unwrap();
        assert_eq!(mit.period_a, Money::from_cents(50134));
        assert!(mit.is_decrease);
    }
}
