//! Integration tests for the shared data model.

use turnout_model::{ErrorStatistics, Row, ValidationError, Value};

fn error(columns: &[&str], row_index: usize, rule_name: &str) -> ValidationError {
    ValidationError::new(
        columns.iter().map(|c| (*c).to_string()).collect(),
        row_index,
        rule_name,
        format!("{rule_name} fired"),
    )
}

#[test]
fn statistics_key_by_rule_binding_not_just_rule_name() {
    // Two findings share the rule name "X" but implicate different
    // columns; one more names a second column alongside the shared one.
    let errors = vec![
        error(&["switch_tip_gauge"], 0, "X"),
        error(&["frog_front_gauge"], 0, "X"),
        error(&["switch_tip_gauge", "frog_front_gauge"], 1, "guard_span"),
    ];
    let stats = ErrorStatistics::from_errors(&errors);

    assert_eq!(stats.total, 3);
    // Same rule name, different column bindings: two distinct keys.
    assert_eq!(stats.by_rule.len(), 3);
    assert_eq!(stats.by_rule["X_switch_tip_gauge"].count, 1);
    assert_eq!(stats.by_rule["X_frog_front_gauge"].count, 1);
    assert_eq!(stats.by_rule["guard_span_switch_tip_gauge_frog_front_gauge"].count, 1);

    // The two-column finding increments both of its columns.
    assert_eq!(stats.by_column["switch_tip_gauge"].count, 2);
    assert_eq!(stats.by_column["frog_front_gauge"].count, 2);

    assert_eq!(stats.by_row["0"].count, 2);
    assert_eq!(stats.by_row["1"].count, 1);
}

#[test]
fn statistics_of_nothing_are_empty() {
    let stats = ErrorStatistics::from_errors(&[]);
    assert_eq!(stats.total, 0);
    assert!(stats.by_column.is_empty());
    assert!(stats.by_rule.is_empty());
    assert!(stats.by_row.is_empty());
}

#[test]
fn row_round_trips_through_json() {
    let row = Row::new()
        .with("check_interval", 1392.0)
        .with("remark", "tip wear visible")
        .with("back_distance", Value::Absent);

    let json = serde_json::to_string(&row).expect("serialize row");
    let round: Row = serde_json::from_str(&json).expect("deserialize row");
    assert_eq!(round, row);
    assert_eq!(round.get("check_interval").as_number(), Some(1392.0));
    assert!(round.get("back_distance").is_absent());
    assert!(round.get("never_written").is_absent());
}

#[test]
fn fatal_classification_is_purely_name_based() {
    let fatal = error(&["check_interval"], 0, "check_interval_min_fatal");
    let normal = error(&["groove_front"], 0, "groove_width_range");
    assert!(fatal.is_fatal());
    assert!(!normal.is_fatal());

    // The suffix is preserved verbatim through serialization.
    let json = serde_json::to_string(&fatal).expect("serialize");
    assert!(json.contains("check_interval_min_fatal"));
}
