//! Tolerance standards and rule configuration for turnout inspection.
//!
//! The engineering constants (gauge tolerances, guard-rail check limits,
//! depression groups) live in [`tables`] as plain data; [`configurator`]
//! binds them onto a [`turnout_validate::DataValidator`] for a given
//! table, track variant and set of visible columns. Keeping the numbers
//! apart from the mechanics means a standards revision touches only the
//! tables.

pub mod configurator;
pub mod tables;

pub use configurator::build_validator;
pub use tables::{TableKind, TableRules, TrackVariant, default_columns, table_rules};
