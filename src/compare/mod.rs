//! The comparison pipeline
//!
//! A stateless chain of pure views over validated tables: raw rows are
//! derived once at construction, then filtering, summarizing, partitioning,
//! and combining all recompute from scratch on demand. At these table sizes
//! recomputation is cheaper than any caching would be.

pub mod combine;
pub mod partition;
pub mod summary;
pub mod table;

pub use combine::{combine, display_order};
pub use partition::{change_in_direction, partition, Direction, DirectionPartition};
pub use summary::{summarize, verticals_with_decrease, SavingsSummary};
pub use table::ExpenseTable;
