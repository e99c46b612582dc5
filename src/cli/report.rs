//! Report subcommand handlers

use std::collections::HashSet;

use clap::{Args, ValueEnum};

use crate::compare::{combine, display_order, ExpenseTable};
use crate::display::breakdown::format_breakdown;
use crate::display::combined::format_combined_table;
use crate::display::summary::format_summary;
use crate::display::table::format_expense_table;
use crate::models::Dataset;

/// Vertical filter shared by every reporting subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only include these verticals (repeatable); none means all
    #[arg(short = 'V', long = "vertical", value_name = "NAME")]
    pub verticals: Vec<String>,
}

impl FilterArgs {
    /// The selection as a keep-set for `ExpenseTable::filter`.
    ///
    /// No `--vertical` occurrences produce an empty set, which the filter
    /// treats as "no filter".
    pub fn keep_set(&self) -> HashSet<String> {
        self.verticals.iter().cloned().collect()
    }
}

/// Dataset selector for `show`
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum DatasetArg {
    Travel,
    TeamBuilding,
}

impl From<DatasetArg> for Dataset {
    fn from(arg: DatasetArg) -> Self {
        match arg {
            DatasetArg::Travel => Dataset::Travel,
            DatasetArg::TeamBuilding => Dataset::TeamBuilding,
        }
    }
}

/// Print the headline metrics
pub fn handle_summary_command(travel: &ExpenseTable, team: &ExpenseTable, filter: &FilterArgs) {
    let keep = filter.keep_set();
    print!("{}", format_summary(&travel.filter(&keep), &team.filter(&keep)));
}

/// Print the who-saved-money-and-where breakdown
pub fn handle_breakdown_command(travel: &ExpenseTable, team: &ExpenseTable, filter: &FilterArgs) {
    let keep = filter.keep_set();
    print!(
        "{}",
        format_breakdown(&travel.filter(&keep), &team.filter(&keep))
    );
}

/// Print one dataset's derived table
pub fn handle_show_command(
    travel: &ExpenseTable,
    team: &ExpenseTable,
    dataset: DatasetArg,
    filter: &FilterArgs,
) {
    let table = match Dataset::from(dataset) {
        Dataset::Travel => travel,
        Dataset::TeamBuilding => team,
    };
    print!("{}", format_expense_table(&table.filter(&filter.keep_set())));
}

/// Print the outer-joined combined table
pub fn handle_combined_command(travel: &ExpenseTable, team: &ExpenseTable, filter: &FilterArgs) {
    let keep = filter.keep_set();
    let mut rows = combine(&travel.filter(&keep), &team.filter(&keep));
    display_order(&mut rows);
    print!("{}", format_combined_table(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_set_empty_when_no_flags() {
        assert!(FilterArgs::default().keep_set().is_empty());
    }

    #[test]
    fn test_keep_set_collects_flags() {
        let filter = FilterArgs {
            verticals: vec!["MIT".to_string(), "COO".to_string()],
        };
        let keep = filter.keep_set();
        assert_eq!(keep.len(), 2);
        assert!(keep.contains("MIT"));
    }

    #[test]
    fn test_dataset_arg_mapping() {
        assert_eq!(Dataset::from(DatasetArg::Travel), Dataset::Travel);
        assert_eq!(Dataset::from(DatasetArg::TeamBuilding), Dataset::TeamBuilding);
    }
}
