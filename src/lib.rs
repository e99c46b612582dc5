//! spendcmp - Terminal dashboard comparing two months of categorized spend
//!
//! Compares Travel and Team Building expenses across September and October,
//! broken down by organizational vertical. The comparison core is a pure
//! pipeline over validated in-memory tables; everything around it is
//! presentation.
//!
//! # Architecture
//!
//! - `error`: Custom error types
//! - `models`: Value types (money, raw/derived/combined rows)
//! - `compare`: The comparison pipeline (derive, filter, summarize,
//!   partition, combine)
//! - `data`: The fixture Sep/Oct datasets
//! - `display`: Terminal formatting for reports and tables
//! - `export`: CSV/JSON export
//! - `cli`: clap command handlers
//! - `tui`: Interactive ratatui dashboard

pub mod cli;
pub mod compare;
pub mod data;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod tui;

pub use error::{SpendError, SpendResult};
