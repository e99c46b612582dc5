//! Terminal User Interface module
//!
//! An interactive ratatui dashboard over the comparison core: tabbed views
//! for each dataset and the combined join, a checkbox filter sidebar, and a
//! breakdown overlay.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
