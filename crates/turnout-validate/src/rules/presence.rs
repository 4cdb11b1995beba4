//! Presence rules.
//!
//! The numeric rules silently skip blank cells, so emptiness only
//! becomes a violation when one of these is registered explicitly.

use turnout_model::{Row, ValidationError, Value};

use crate::rules::{Rule, RuleKind};

/// Fires when the cell is absent or blank.
#[derive(Debug, Clone)]
pub struct RequiredRule {
    name: String,
    column: String,
}

impl RequiredRule {
    pub fn new(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
        }
    }
}

impl Rule for RequiredRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Required
    }

    fn column(&self) -> Option<&str> {
        Some(&self.column)
    }

    fn validate(&self, value: &Value, _row: &Row, row_index: usize) -> Option<ValidationError> {
        if value.is_blank() {
            return Some(ValidationError::for_column(
                &self.column,
                row_index,
                &self.name,
                "value must not be empty",
            ));
        }
        None
    }
}

/// Fires when the cell is populated. Used for columns that do not apply
/// to the active track variant and must stay blank.
#[derive(Debug, Clone)]
pub struct RequiredEmptyRule {
    name: String,
    column: String,
}

impl RequiredEmptyRule {
    pub fn new(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
        }
    }
}

impl Rule for RequiredEmptyRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RuleKind {
        RuleKind::RequiredEmpty
    }

    fn column(&self) -> Option<&str> {
        Some(&self.column)
    }

    fn validate(&self, value: &Value, _row: &Row, row_index: usize) -> Option<ValidationError> {
        if !value.is_blank() {
            return Some(ValidationError::for_column(
                &self.column,
                row_index,
                &self.name,
                format!("value must be empty, actual: {value}"),
            ));
        }
        None
    }
}
