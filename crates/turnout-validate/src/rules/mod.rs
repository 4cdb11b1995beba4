//! Validation rule catalog.
//!
//! Each module implements one family of checks. Every rule is a pure
//! function of `(value, row, row_index)` with constructor-bound
//! thresholds; blank input is "not applicable" to the numeric rules
//! (only [`RequiredRule`] and [`TypeRule`] treat absence itself as a
//! violation).

mod bounds;
mod comparison;
mod custom;
mod datatype;
mod depression;
mod presence;
mod relations;

pub use bounds::{
    GreaterThanOrEqualRule, GreaterThanRule, LessThanOrEqualRule, LessThanRule, RangeRule,
};
pub use comparison::{ComparisonOp, ComparisonRule, NotEqualRule};
pub use custom::CustomRule;
pub use datatype::{ExpectedType, TypeRule};
pub use depression::{TRIANGLE_DEPRESSION_LIMIT, TriangleDepressionRule};
pub use presence::{RequiredEmptyRule, RequiredRule};
pub use relations::SumRangeRule;

use std::fmt;

use serde::{Deserialize, Serialize};

use turnout_model::{Row, ValidationError, Value};

/// Discriminant for the closed set of rule kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Range,
    Comparison,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    NotEqual,
    Required,
    RequiredEmpty,
    Custom,
    Type,
    SumRange,
    TriangleDepression,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Range => "range",
            RuleKind::Comparison => "comparison",
            RuleKind::LessThan => "less_than",
            RuleKind::LessThanOrEqual => "less_than_or_equal",
            RuleKind::GreaterThan => "greater_than",
            RuleKind::GreaterThanOrEqual => "greater_than_or_equal",
            RuleKind::NotEqual => "not_equal",
            RuleKind::Required => "required",
            RuleKind::RequiredEmpty => "required_empty",
            RuleKind::Custom => "custom",
            RuleKind::Type => "type",
            RuleKind::SumRange => "sum_range",
            RuleKind::TriangleDepression => "triangle_depression",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single validation check bound to a column or to a row as a whole.
///
/// Column rules are invoked with the value found at their column; row
/// rules are invoked with [`Value::Absent`] and read whatever columns
/// they need from the row directly.
pub trait Rule: Send + Sync {
    /// Rule name, used as the aggregation key and preserved verbatim in
    /// findings (including any `_fatal` suffix).
    fn name(&self) -> &str;

    fn kind(&self) -> RuleKind;

    /// Column this rule reads; `None` for row-scoped rules.
    fn column(&self) -> Option<&str> {
        None
    }

    fn validate(&self, value: &Value, row: &Row, row_index: usize) -> Option<ValidationError>;
}

/// Coerce a cell for the numeric rules. Blank cells are not applicable;
/// a present value that fails to parse yields the standard coercion
/// finding under the invoking rule's name.
pub(crate) fn coerce_numeric(
    value: &Value,
    column: &str,
    rule_name: &str,
    row_index: usize,
) -> Result<Option<f64>, ValidationError> {
    if value.is_blank() {
        return Ok(None);
    }
    match value.as_number() {
        Some(number) => Ok(Some(number)),
        None => Err(ValidationError::for_column(
            column,
            row_index,
            rule_name,
            format!("value must be a number, actual: {value}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_snake_case() {
        assert_eq!(RuleKind::LessThanOrEqual.as_str(), "less_than_or_equal");
        assert_eq!(RuleKind::TriangleDepression.as_str(), "triangle_depression");
        let json = serde_json::to_string(&RuleKind::SumRange).expect("serialize kind");
        assert_eq!(json, "\"sum_range\"");
    }

    #[test]
    fn coercion_distinguishes_blank_from_junk() {
        let blank = coerce_numeric(&Value::text("  "), "c", "r", 0).expect("blank passes");
        assert_eq!(blank, None);

        let number = coerce_numeric(&Value::text("48"), "c", "r", 0).expect("numeric text");
        assert_eq!(number, Some(48.0));

        let error = coerce_numeric(&Value::text("abc"), "c", "r", 3).unwrap_err();
        assert_eq!(error.columns, vec!["c".to_string()]);
        assert_eq!(error.row_index, 3);
        assert!(error.message.contains("must be a number"));
        assert!(error.message.contains("abc"));
    }
}
