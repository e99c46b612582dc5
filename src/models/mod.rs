//! Core data models for spendcmp
//!
//! This module contains the value types that represent the comparison
//! domain: money amounts, raw and derived expense rows, and the combined
//! cross-dataset row.

pub mod expense;
pub mod money;

pub use expense::{CombinedRow, Dataset, DerivedRow, ExpenseRow, PERIOD_A_LABEL, PERIOD_B_LABEL};
pub use money::Money;
