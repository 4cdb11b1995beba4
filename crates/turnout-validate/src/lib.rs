//! Rule-based validation engine for turnout geometry measurements.
//!
//! The catalog in [`rules`] provides composable column-level and
//! row-level checks; [`DataValidator`] applies a configured set of them
//! to measurement rows and aggregates the findings. Violations are
//! return values, never panics: a rule that panics is a programming bug
//! and propagates to the caller.

pub mod rules;
mod validator;

pub use rules::{
    ComparisonOp, ComparisonRule, CustomRule, ExpectedType, GreaterThanOrEqualRule,
    GreaterThanRule, LessThanOrEqualRule, LessThanRule, NotEqualRule, RangeRule,
    RequiredEmptyRule, RequiredRule, Rule, RuleKind, SumRangeRule, TRIANGLE_DEPRESSION_LIMIT,
    TriangleDepressionRule, TypeRule,
};
pub use validator::DataValidator;
