//! Integration tests for the rule catalog through the public API.

use turnout_model::{Row, Value};
use turnout_validate::{
    ComparisonOp, ComparisonRule, CustomRule, DataValidator, NotEqualRule, RangeRule,
    RequiredRule, Rule, RuleKind, SumRangeRule, TriangleDepressionRule,
};

#[test]
fn rule_kinds_match_their_implementations() {
    let range = RangeRule::new("r", "c", 0.0, 1.0);
    assert_eq!(range.kind(), RuleKind::Range);
    assert_eq!(range.column(), Some("c"));

    let sum = SumRangeRule::new("s", "a", "b", 0.0, 1.0);
    assert_eq!(sum.kind(), RuleKind::SumRange);
    assert_eq!(sum.column(), None, "row rules are not bound to a column");

    let triangle = TriangleDepressionRule::new("t", vec!["a".to_string(), "b".to_string()]);
    assert_eq!(triangle.kind(), RuleKind::TriangleDepression);
    assert_eq!(triangle.column(), None);
}

#[test]
fn worst_pair_selection_through_the_validator() {
    let mut validator = DataValidator::new();
    validator.add_row_rule(Box::new(TriangleDepressionRule::new(
        "triangle_depression_lead",
        vec!["A".to_string(), "B".to_string(), "C".to_string()],
    )));

    // Pairs: A-B = 5, A-C = 11, B-C = 6; only A-C exceeds the limit.
    let rows = vec![Row::new().with("A", 0.0).with("B", 5.0).with("C", 11.0)];
    let errors = validator.validate_all(&rows);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].columns, vec!["A".to_string(), "C".to_string()]);
    assert!(errors[0].message.contains("11"));
}

#[test]
fn comparison_and_not_equal_coexist_on_one_column() {
    let mut validator = DataValidator::new();
    validator.add_column_rule(
        "frog_number",
        Box::new(ComparisonRule::new("frog_number_min", "frog_number", ComparisonOp::Ge, 6.0)),
    );
    validator.add_column_rule(
        "frog_number",
        Box::new(NotEqualRule::new("frog_number_reserved", "frog_number", Value::Number(13.0))),
    );

    let rows = vec![
        Row::new().with("frog_number", 9.0),  // fine
        Row::new().with("frog_number", 4.0),  // below minimum
        Row::new().with("frog_number", 13.0), // reserved designation
    ];
    let errors = validator.validate_all(&rows);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].row_index, 1);
    assert_eq!(errors[0].rule_name, "frog_number_min");
    assert_eq!(errors[1].row_index, 2);
    assert_eq!(errors[1].rule_name, "frog_number_reserved");
}

#[test]
fn custom_rules_read_sibling_columns() {
    let mut validator = DataValidator::new();
    validator.add_column_rule(
        "groove_rear",
        Box::new(CustomRule::new("groove_taper", "groove_rear", |value, row, _index| {
            let rear = value.as_number()?;
            let front = row.get("groove_front").as_number()?;
            (rear < front - 2.0).then(|| {
                format!("rear groove {rear} tapers more than 2 below front groove {front}")
            })
        })),
    );

    let rows = vec![
        Row::new().with("groove_front", 44.0).with("groove_rear", 43.0),
        Row::new().with("groove_front", 45.0).with("groove_rear", 42.0),
    ];
    let errors = validator.validate_all(&rows);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].row_index, 1);
    assert!(errors[0].message.contains("tapers"));
}

#[test]
fn required_and_range_cover_different_failure_modes() {
    let mut validator = DataValidator::new();
    validator.add_column_rule(
        "check_interval",
        Box::new(RequiredRule::new("check_interval_required", "check_interval")),
    );
    validator.add_column_rule(
        "check_interval",
        Box::new(RangeRule::new("check_interval_range", "check_interval", 1391.0, 1396.0)),
    );

    // Blank: only the required rule fires; the range rule stays silent.
    let blank = vec![Row::new()];
    let errors = validator.validate_all(&blank);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule_name, "check_interval_required");

    // Populated out of range: only the range rule fires.
    let wide = vec![Row::new().with("check_interval", 1400.0)];
    let errors = validator.validate_all(&wide);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule_name, "check_interval_range");
}

#[test]
fn numeric_strings_behave_like_numbers() {
    let mut validator = DataValidator::new();
    validator.add_column_rule(
        "switch_tip_gauge",
        Box::new(RangeRule::new("gauge_range", "switch_tip_gauge", -3.0, 6.0)),
    );

    let rows = vec![
        Row::new().with("switch_tip_gauge", "6"),    // boundary, as text
        Row::new().with("switch_tip_gauge", " 6.5 "), // over, with padding
    ];
    let errors = validator.validate_all(&rows);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].row_index, 1);
    assert!(errors[0].message.contains("6.5"));
}
