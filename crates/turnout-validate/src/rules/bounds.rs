//! Numeric bound rules.

use turnout_model::{Row, ValidationError, Value};

use crate::rules::{Rule, RuleKind, coerce_numeric};

/// Inclusive two-sided bound on a single column.
#[derive(Debug, Clone)]
pub struct RangeRule {
    name: String,
    column: String,
    min: f64,
    max: f64,
}

impl RangeRule {
    pub fn new(name: impl Into<String>, column: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            min,
            max,
        }
    }
}

impl Rule for RangeRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Range
    }

    fn column(&self) -> Option<&str> {
        Some(&self.column)
    }

    fn validate(&self, value: &Value, _row: &Row, row_index: usize) -> Option<ValidationError> {
        let actual = match coerce_numeric(value, &self.column, &self.name, row_index) {
            Ok(Some(number)) => number,
            Ok(None) => return None,
            Err(error) => return Some(error),
        };
        if actual < self.min || actual > self.max {
            return Some(ValidationError::for_column(
                &self.column,
                row_index,
                &self.name,
                format!(
                    "value out of range [{}, {}], actual: {actual}",
                    self.min, self.max
                ),
            ));
        }
        None
    }
}

/// Strict upper bound: fires when the value is `>=` the limit.
#[derive(Debug, Clone)]
pub struct LessThanRule {
    name: String,
    column: String,
    max: f64,
}

impl LessThanRule {
    pub fn new(name: impl Into<String>, column: impl Into<String>, max: f64) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            max,
        }
    }
}

impl Rule for LessThanRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RuleKind {
        RuleKind::LessThan
    }

    fn column(&self) -> Option<&str> {
        Some(&self.column)
    }

    fn validate(&self, value: &Value, _row: &Row, row_index: usize) -> Option<ValidationError> {
        let actual = match coerce_numeric(value, &self.column, &self.name, row_index) {
            Ok(Some(number)) => number,
            Ok(None) => return None,
            Err(error) => return Some(error),
        };
        if actual >= self.max {
            return Some(ValidationError::for_column(
                &self.column,
                row_index,
                &self.name,
                format!("value must be less than {}, actual: {actual}", self.max),
            ));
        }
        None
    }
}

/// Inclusive upper bound: fires when the value is `>` the limit.
#[derive(Debug, Clone)]
pub struct LessThanOrEqualRule {
    name: String,
    column: String,
    max: f64,
}

impl LessThanOrEqualRule {
    pub fn new(name: impl Into<String>, column: impl Into<String>, max: f64) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            max,
        }
    }
}

impl Rule for LessThanOrEqualRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RuleKind {
        RuleKind::LessThanOrEqual
    }

    fn column(&self) -> Option<&str> {
        Some(&self.column)
    }

    fn validate(&self, value: &Value, _row: &Row, row_index: usize) -> Option<ValidationError> {
        let actual = match coerce_numeric(value, &self.column, &self.name, row_index) {
            Ok(Some(number)) => number,
            Ok(None) => return None,
            Err(error) => return Some(error),
        };
        if actual > self.max {
            return Some(ValidationError::for_column(
                &self.column,
                row_index,
                &self.name,
                format!(
                    "value must be less than or equal to {}, actual: {actual}",
                    self.max
                ),
            ));
        }
        None
    }
}

/// Strict lower bound: fires when the value is `<=` the limit.
#[derive(Debug, Clone)]
pub struct GreaterThanRule {
    name: String,
    column: String,
    min: f64,
}

impl GreaterThanRule {
    pub fn new(name: impl Into<String>, column: impl Into<String>, min: f64) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            min,
        }
    }
}

impl Rule for GreaterThanRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RuleKind {
        RuleKind::GreaterThan
    }

    fn column(&self) -> Option<&str> {
        Some(&self.column)
    }

    fn validate(&self, value: &Value, _row: &Row, row_index: usize) -> Option<ValidationError> {
        let actual = match coerce_numeric(value, &self.column, &self.name, row_index) {
            Ok(Some(number)) => number,
            Ok(None) => return None,
            Err(error) => return Some(error),
        };
        if actual <= self.min {
            return Some(ValidationError::for_column(
                &self.column,
                row_index,
                &self.name,
                format!("value must be greater than {}, actual: {actual}", self.min),
            ));
        }
        None
    }
}

/// Inclusive lower bound: fires when the value is `<` the limit.
#[derive(Debug, Clone)]
pub struct GreaterThanOrEqualRule {
    name: String,
    column: String,
    min: f64,
}

impl GreaterThanOrEqualRule {
    pub fn new(name: impl Into<String>, column: impl Into<String>, min: f64) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            min,
        }
    }
}

impl Rule for GreaterThanOrEqualRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RuleKind {
        RuleKind::GreaterThanOrEqual
    }

    fn column(&self) -> Option<&str> {
        Some(&self.column)
    }

    fn validate(&self, value: &Value, _row: &Row, row_index: usize) -> Option<ValidationError> {
        let actual = match coerce_numeric(value, &self.column, &self.name, row_index) {
            Ok(Some(number)) => number,
            Ok(None) => return None,
            Err(error) => return Some(error),
        };
        if actual < self.min {
            return Some(ValidationError::for_column(
                &self.column,
                row_index,
                &self.name,
                format!(
                    "value must be greater than or equal to {}, actual: {actual}",
                    self.min
                ),
            ));
        }
        None
    }
}
