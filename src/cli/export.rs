//! Export subcommand handler

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::compare::{combine, display_order, ExpenseTable};
use crate::error::SpendResult;
use crate::export::{export_combined_csv, export_json, export_tables_csv};

use super::report::FilterArgs;

/// Export output format
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ExportFormat {
    /// Spreadsheet-compatible rows
    Csv,
    /// Full comparison document
    Json,
}

/// Arguments for the `export` subcommand
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output format
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export the combined view instead of the per-dataset rows
    /// (CSV only; the JSON document always includes both)
    #[arg(long)]
    pub combined: bool,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Run an export against the (filtered) tables
pub fn handle_export_command(
    travel: &ExpenseTable,
    team: &ExpenseTable,
    args: &ExportArgs,
) -> SpendResult<()> {
    let keep = args.filter.keep_set();
    let travel = travel.filter(&keep);
    let team = team.filter(&keep);

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match args.format {
        ExportFormat::Csv if args.combined => {
            let mut rows = combine(&travel, &team);
            display_order(&mut rows);
            export_combined_csv(&rows, writer)
        }
        ExportFormat::Csv => export_tables_csv(&travel, &team, writer),
        ExportFormat::Json => export_json(&travel, &team, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_tables;

    #[test]
    fn test_export_to_file() {
        let (travel, team) = load_tables().unwrap();
        let path = std::env::temp_dir().join("spendcmp_export_test.csv");
        let args = ExportArgs {
            format: ExportFormat::Csv,
            output: Some(path.clone()),
            combined: false,
            filter: FilterArgs::default(),
        };
        handle_export_command(&travel, &team, &args).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Dataset,Vertical"));
        std::fs::remove_file(&path).ok();
    }
}
