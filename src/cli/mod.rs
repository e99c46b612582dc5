//! CLI command handlers
//!
//! Bridges clap argument parsing with the comparison core and the display
//! layer. The current filter selection is always passed in explicitly; no
//! handler reads ambient state.

pub mod export;
pub mod report;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{
    handle_breakdown_command, handle_combined_command, handle_show_command,
    handle_summary_command, DatasetArg, FilterArgs,
};
