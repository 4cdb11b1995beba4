//! Binds the tolerance tables onto a validator.

use tracing::debug;

use turnout_model::{ColumnDef, ColumnLookup};
use turnout_validate::{
    DataValidator, ExpectedType, GreaterThanOrEqualRule, LessThanOrEqualRule, RangeRule,
    RequiredEmptyRule, RequiredRule, SumRangeRule, TriangleDepressionRule, TypeRule,
};

use crate::tables::{TableKind, TrackVariant, table_rules};

/// Build the validator for one measurement table.
///
/// Rules are only registered for columns that are present in `columns`
/// and not marked hidden; this is the sole visibility mechanism, so the
/// rule catalog itself never has to know which variant is active.
pub fn build_validator(
    table: TableKind,
    variant: TrackVariant,
    columns: &[ColumnDef],
) -> DataValidator {
    let rules = table_rules(table, variant);
    let lookup = ColumnLookup::new(columns);
    let mut validator = DataValidator::new();

    for spec in rules.tolerances {
        if !lookup.is_visible(spec.column) {
            debug!(%table, column = spec.column, "skipping tolerance for absent or hidden column");
            continue;
        }
        validator.add_column_rule(
            spec.column,
            Box::new(RangeRule::new(spec.rule_name, spec.column, spec.min, spec.max)),
        );
        validator.add_column_rule(
            spec.column,
            Box::new(TypeRule::new(
                rules.type_rule_name,
                spec.column,
                ExpectedType::Number,
            )),
        );
    }

    for spec in rules.required {
        if !lookup.is_visible(spec.column) {
            debug!(%table, column = spec.column, "skipping required rule for absent or hidden column");
            continue;
        }
        validator.add_column_rule(
            spec.column,
            Box::new(RequiredRule::new(spec.rule_name, spec.column)),
        );
    }

    for spec in rules.required_empty {
        if !lookup.is_visible(spec.column) {
            debug!(%table, column = spec.column, "skipping required-empty rule for absent or hidden column");
            continue;
        }
        validator.add_column_rule(
            spec.column,
            Box::new(RequiredEmptyRule::new(spec.rule_name, spec.column)),
        );
    }

    if let Some(limits) = rules.guard_limits
        && lookup.is_visible(limits.check_interval_column)
        && lookup.is_visible(limits.back_distance_column)
    {
        validator.add_column_rule(
            limits.check_interval_column,
            Box::new(GreaterThanOrEqualRule::new(
                limits.check_interval_rule,
                limits.check_interval_column,
                limits.check_interval_min,
            )),
        );
        validator.add_column_rule(
            limits.back_distance_column,
            Box::new(LessThanOrEqualRule::new(
                limits.back_distance_rule,
                limits.back_distance_column,
                limits.back_distance_max,
            )),
        );
        validator.add_row_rule(Box::new(SumRangeRule::new(
            limits.span_rule,
            limits.check_interval_column,
            limits.back_distance_column,
            limits.span_min,
            limits.span_max,
        )));
    }

    for group in rules.depression_groups {
        let visible: Vec<String> = group
            .columns
            .iter()
            .filter(|column| lookup.is_visible(column))
            .map(|column| (*column).to_string())
            .collect();
        if visible.len() < 2 {
            debug!(%table, rule = group.rule_name, "skipping depression group with fewer than two visible columns");
            continue;
        }
        validator.add_row_rule(Box::new(TriangleDepressionRule::new(group.rule_name, visible)));
    }

    debug!(
        %table,
        %variant,
        column_rules = validator.column_rule_count(),
        row_rules = validator.row_rule_count(),
        "configured validator"
    );
    validator
}
