use anyhow::Result;
use clap::{Parser, Subcommand};

use spendcmp::cli::{
    handle_breakdown_command, handle_combined_command, handle_export_command,
    handle_show_command, handle_summary_command, DatasetArg, ExportArgs, FilterArgs,
};
use spendcmp::data;
use spendcmp::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "spendcmp",
    version,
    about = "Compare Travel and Team Building spend across September and October",
    long_about = "spendcmp is a terminal dashboard over two months of categorized \
                  credit card spend. It shows per-vertical changes, savings \
                  summaries, direction breakdowns, and a combined cross-dataset \
                  view, with an interactive TUI and plain CLI reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default when no command is given)
    #[command(alias = "ui")]
    Tui,

    /// Print the headline savings metrics
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print the who-saved-money-and-where breakdown
    Breakdown {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print one dataset's derived table
    Show {
        /// Which dataset to show
        #[arg(value_enum)]
        dataset: DatasetArg,
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print the combined cross-dataset table
    Combined {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export data as CSV or JSON
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Tables are built once; every view below is a pure function of them
    // plus the explicit filter selection.
    let (travel, team) = data::load_tables()?;

    match cli.command {
        None | Some(Commands::Tui) => run_tui(&travel, &team)?,
        Some(Commands::Summary { filter }) => handle_summary_command(&travel, &team, &filter),
        Some(Commands::Breakdown { filter }) => handle_breakdown_command(&travel, &team, &filter),
        Some(Commands::Show { dataset, filter }) => {
            handle_show_command(&travel, &team, dataset, &filter)
        }
        Some(Commands::Combined { filter }) => handle_combined_command(&travel, &team, &filter),
        Some(Commands::Export(args)) => handle_export_command(&travel, &team, &args)?,
    }

    Ok(())
}
