//! Operator-parameterized comparison rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use turnout_model::{Row, TurnoutError, ValidationError, Value};

use crate::rules::{Rule, RuleKind, coerce_numeric};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    Lt,
    Gt,
    Le,
    Ge,
    Ne,
    Eq,
}

impl ComparisonOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Lt => "<",
            ComparisonOp::Gt => ">",
            ComparisonOp::Le => "<=",
            ComparisonOp::Ge => ">=",
            ComparisonOp::Ne => "!=",
            ComparisonOp::Eq => "==",
        }
    }

    fn holds(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            ComparisonOp::Lt => lhs < rhs,
            ComparisonOp::Gt => lhs > rhs,
            ComparisonOp::Le => lhs <= rhs,
            ComparisonOp::Ge => lhs >= rhs,
            ComparisonOp::Ne => lhs != rhs,
            ComparisonOp::Eq => lhs == rhs,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComparisonOp {
    type Err = TurnoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<" => Ok(ComparisonOp::Lt),
            ">" => Ok(ComparisonOp::Gt),
            "<=" => Ok(ComparisonOp::Le),
            ">=" => Ok(ComparisonOp::Ge),
            "!=" => Ok(ComparisonOp::Ne),
            "==" => Ok(ComparisonOp::Eq),
            other => Err(TurnoutError::UnknownOperator(other.to_string())),
        }
    }
}

/// Fires when `value op threshold` does not hold.
#[derive(Debug, Clone)]
pub struct ComparisonRule {
    name: String,
    column: String,
    op: ComparisonOp,
    threshold: f64,
}

impl ComparisonRule {
    pub fn new(
        name: impl Into<String>,
        column: impl Into<String>,
        op: ComparisonOp,
        threshold: f64,
    ) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            op,
            threshold,
        }
    }
}

impl Rule for ComparisonRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Comparison
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
        if !self.op.holds(actual, self.threshold) {
            return Some(ValidationError::for_column(
                &self.column,
                row_index,
                &self.name,
                format!(
                    "value must be {} {}, actual: {actual}",
                    self.op, self.threshold
                ),
            ));
        }
        None
    }
}

/// Fires when the raw value strictly equals the forbidden value.
/// No numeric coercion: `Text("48")` and `Number(48.0)` never match.
#[derive(Debug, Clone)]
pub struct NotEqualRule {
    name: String,
    column: String,
    forbidden: Value,
}

impl NotEqualRule {
    pub fn new(name: impl Into<String>, column: impl Into<String>, forbidden: Value) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            forbidden,
        }
    }
}

impl Rule for NotEqualRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RuleKind {
        RuleKind::NotEqual
    }

    fn column(&self) -> Option<&str> {
        Some(&self.column)
    }

    fn validate(&self, value: &Value, _row: &Row, row_index: usize) -> Option<ValidationError> {
        if *value == self.forbidden {
            return Some(ValidationError::for_column(
                &self.column,
                row_index,
                &self.name,
                format!("value must not equal {}", self.forbidden),
            ));
        }
        None
    }
}
