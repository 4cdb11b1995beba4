//! Cross-column relation rules.

use turnout_model::{Row, ValidationError, Value};

use crate::rules::{Rule, RuleKind};

/// Row rule bounding the sum of two columns. Skips silently when either
/// cell is blank; a populated non-numeric cell in either column yields a
/// coercion finding naming both.
#[derive(Debug, Clone)]
pub struct SumRangeRule {
    name: String,
    column_a: String,
    column_b: String,
    min: f64,
    max: f64,
}

impl SumRangeRule {
    pub fn new(
        name: impl Into<String>,
        column_a: impl Into<String>,
        column_b: impl Into<String>,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            name: name.into(),
            column_a: column_a.into(),
            column_b: column_b.into(),
            min,
            max,
        }
    }

    fn both_columns(&self) -> Vec<String> {
        vec![self.column_a.clone(), self.column_b.clone()]
    }
}

impl Rule for SumRangeRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RuleKind {
        RuleKind::SumRange
    }

    fn validate(&self, _value: &Value, row: &Row, row_index: usize) -> Option<ValidationError> {
        let a = row.get(&self.column_a);
        let b = row.get(&self.column_b);
        if a.is_blank() || b.is_blank() {
            return None;
        }

        let (Some(a_number), Some(b_number)) = (a.as_number(), b.as_number()) else {
            return Some(ValidationError::new(
                self.both_columns(),
                row_index,
                &self.name,
                format!(
                    "values must be numbers, actual: {}={a}, {}={b}",
                    self.column_a, self.column_b
                ),
            ));
        };

        let sum = a_number + b_number;
        if sum < self.min || sum > self.max {
            return Some(ValidationError::new(
                self.both_columns(),
                row_index,
                &self.name,
                format!(
                    "sum of {} and {} out of range [{}, {}], actual: {sum}",
                    self.column_a, self.column_b, self.min, self.max
                ),
            ));
        }
        None
    }
}
