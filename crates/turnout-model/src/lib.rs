//! Shared data model for turnout geometry inspection.
//!
//! Measurement tables arrive from the entry UI as loosely-typed rows
//! (column name mapped to a number, a text cell, or nothing). This crate
//! defines those boundary types plus the validation finding and the
//! aggregate statistics consumed by the rendering and export layers.

pub mod column;
pub mod error;
pub mod issue;
pub mod row;
pub mod value;

pub use column::{ColumnDef, ColumnLookup};
pub use error::{Result, TurnoutError};
pub use issue::{ErrorGroup, ErrorStatistics, ValidationError};
pub use row::Row;
pub use value::Value;
