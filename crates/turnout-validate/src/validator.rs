//! Row/table validator.

use tracing::debug;

use turnout_model::{ErrorStatistics, Row, ValidationError, Value};

use crate::rules::Rule;

/// Holds the rules configured for one logical table plus the findings
/// from the most recent full-table pass.
///
/// Output order is contractual: columns in registration order, rules in
/// registration order within a column, column findings before row
/// findings, rows in input order. Column rules are therefore kept in an
/// order-preserving vec rather than a map.
///
/// Single-owner state: build one validator per table per pass. Distinct
/// validators are independent and may run on distinct threads.
#[derive(Default)]
pub struct DataValidator {
    column_rules: Vec<(String, Vec<Box<dyn Rule>>)>,
    row_rules: Vec<Box<dyn Rule>>,
    errors: Vec<ValidationError>,
}

impl DataValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule for `column`. Every registered rule runs on every
    /// pass — there is no short-circuiting, so one cell may accumulate
    /// several findings.
    pub fn add_column_rule(&mut self, column: impl Into<String>, rule: Box<dyn Rule>) {
        let column = column.into();
        if let Some((_, rules)) = self
            .column_rules
            .iter_mut()
            .find(|(registered, _)| *registered == column)
        {
            rules.push(rule);
        } else {
            self.column_rules.push((column, vec![rule]));
        }
    }

    /// Append a row-scoped rule.
    pub fn add_row_rule(&mut self, rule: Box<dyn Rule>) {
        self.row_rules.push(rule);
    }

    pub fn column_rule_count(&self) -> usize {
        self.column_rules.iter().map(|(_, rules)| rules.len()).sum()
    }

    pub fn row_rule_count(&self) -> usize {
        self.row_rules.len()
    }

    /// Validate one row without touching the stored snapshot: all column
    /// rules first, then all row rules.
    pub fn validate_row(&self, row: &Row, row_index: usize) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (column, rules) in &self.column_rules {
            let value = row.get(column);
            for rule in rules {
                if let Some(error) = rule.validate(value, row, row_index) {
                    errors.push(error);
                }
            }
        }
        for rule in &self.row_rules {
            if let Some(error) = rule.validate(&Value::Absent, row, row_index) {
                errors.push(error);
            }
        }
        errors
    }

    /// Validate every row in input order, replacing the stored snapshot
    /// consumed by [`Self::error_statistics`].
    pub fn validate_all(&mut self, rows: &[Row]) -> Vec<ValidationError> {
        self.errors.clear();
        for (row_index, row) in rows.iter().enumerate() {
            let row_errors = self.validate_row(row, row_index);
            self.errors.extend(row_errors);
        }
        debug!(
            rows = rows.len(),
            errors = self.errors.len(),
            "validated table"
        );
        self.errors.clone()
    }

    /// Findings from the most recent [`Self::validate_all`].
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Aggregate the most recent findings by column, rule binding and row.
    pub fn error_statistics(&self) -> ErrorStatistics {
        ErrorStatistics::from_errors(&self.errors)
    }
}
