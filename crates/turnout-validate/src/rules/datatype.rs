//! Data type rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use turnout_model::{Row, ValidationError, Value};

use crate::rules::{Rule, RuleKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedType {
    Number,
    Text,
}

impl ExpectedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpectedType::Number => "number",
            ExpectedType::Text => "text",
        }
    }
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fires when the cell is blank, or when its type after coercion does
/// not match the expectation. Unlike the bound rules, absence itself is
/// a violation here: a type-checked cell must hold something of the
/// right shape.
#[derive(Debug, Clone)]
pub struct TypeRule {
    name: String,
    column: String,
    expected: ExpectedType,
}

impl TypeRule {
    pub fn new(name: impl Into<String>, column: impl Into<String>, expected: ExpectedType) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            expected,
        }
    }

    fn violation(&self, row_index: usize, actual: &str) -> ValidationError {
        ValidationError::for_column(
            &self.column,
            row_index,
            &self.name,
            format!("expected {}, actual: {actual}", self.expected),
        )
    }
}

impl Rule for TypeRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Type
    }

    fn column(&self) -> Option<&str> {
        Some(&self.column)
    }

    fn validate(&self, value: &Value, _row: &Row, row_index: usize) -> Option<ValidationError> {
        if value.is_blank() {
            return Some(self.violation(row_index, "empty value"));
        }
        match self.expected {
            // String-to-number coercion applies to the numeric expectation.
            ExpectedType::Number => {
                if value.as_number().is_none() {
                    return Some(self.violation(row_index, &format!("non-numeric text: {value}")));
                }
            }
            ExpectedType::Text => {
                if let Value::Number(number) = value {
                    return Some(self.violation(row_index, &format!("number: {number}")));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_expectation_accepts_numeric_text() {
        let rule = TypeRule::new("gauge_value_type", "g", ExpectedType::Number);
        let row = Row::new();
        assert!(rule.validate(&Value::Number(1.0), &row, 0).is_none());
        assert!(rule.validate(&Value::text("1.5"), &row, 0).is_none());

        let error = rule.validate(&Value::text("narrow"), &row, 0).expect("junk");
        assert!(error.message.contains("expected number"));
        assert!(error.message.contains("narrow"));
    }

    #[test]
    fn absence_is_a_type_violation() {
        let rule = TypeRule::new("gauge_value_type", "g", ExpectedType::Number);
        let error = rule.validate(&Value::Absent, &Row::new(), 2).expect("absent");
        assert_eq!(error.row_index, 2);
        assert!(error.message.contains("empty value"));
    }

    #[test]
    fn text_expectation_rejects_numbers() {
        let rule = TypeRule::new("note_type", "note", ExpectedType::Text);
        let row = Row::new();
        assert!(rule.validate(&Value::text("worn tip"), &row, 0).is_none());
        // Numeric text still counts as text for this expectation.
        assert!(rule.validate(&Value::text("48"), &row, 0).is_none());
        assert!(rule.validate(&Value::Number(48.0), &row, 0).is_some());
    }
}
