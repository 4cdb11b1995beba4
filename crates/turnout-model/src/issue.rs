//! Validation findings and their aggregation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Suffix that marks a rule as blocking for the export layer.
const FATAL_SUFFIX: &str = "_fatal";

/// One validation finding, created by a rule when it detects a
/// violation and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// The implicated column(s), ordered; pairwise row rules name two.
    pub columns: Vec<String>,
    /// Zero-based index of the offending row.
    pub row_index: usize,
    /// Name of the rule that fired, preserved verbatim. The `_fatal`
    /// suffix is a contract with the export layer, not branched on here.
    pub rule_name: String,
    /// Human-readable description embedding the offending value(s) and
    /// the rule's threshold(s).
    pub message: String,
    /// Creation time; informational only and excluded from equality.
    pub timestamp: DateTime<Utc>,
}

impl ValidationError {
    pub fn new(
        columns: Vec<String>,
        row_index: usize,
        rule_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            columns,
            row_index,
            rule_name: rule_name.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Shorthand for the common single-column finding.
    pub fn for_column(
        column: impl Into<String>,
        row_index: usize,
        rule_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(vec![column.into()], row_index, rule_name, message)
    }

    /// Whether the export layer renders this finding as blocking,
    /// per the `_fatal` rule-naming convention.
    pub fn is_fatal(&self) -> bool {
        self.rule_name.ends_with(FATAL_SUFFIX)
    }
}

impl PartialEq for ValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.row_index == other.row_index
            && self.rule_name == other.rule_name
            && self.message == other.message
    }
}

impl Eq for ValidationError {}

/// Findings sharing one aggregation key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorGroup {
    pub count: usize,
    pub errors: Vec<ValidationError>,
}

impl ErrorGroup {
    fn add(&mut self, error: &ValidationError) {
        self.count += 1;
        self.errors.push(error.clone());
    }
}

/// Aggregate view over one validation pass, consumed by summary widgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorStatistics {
    /// Keyed by column name; a finding naming two columns counts once
    /// under each.
    pub by_column: BTreeMap<String, ErrorGroup>,
    /// Keyed by `{rule_name}_{columns joined by '_'}` so the same rule
    /// name bound to different columns stays distinct.
    pub by_rule: BTreeMap<String, ErrorGroup>,
    /// Keyed by the row index rendered as a string.
    pub by_row: BTreeMap<String, ErrorGroup>,
    pub total: usize,
}

impl ErrorStatistics {
    /// Pure aggregation over an already-produced finding list.
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        let mut stats = Self::default();
        for error in errors {
            for column in &error.columns {
                stats.by_column.entry(column.clone()).or_default().add(error);
            }
            let rule_key = format!("{}_{}", error.rule_name, error.columns.join("_"));
            stats.by_rule.entry(rule_key).or_default().add(error);
            stats
                .by_row
                .entry(error.row_index.to_string())
                .or_default()
                .add(error);
        }
        stats.total = errors.len();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_timestamp() {
        let a = ValidationError::for_column("col", 0, "rule", "message");
        let mut b = a.clone();
        b.timestamp = b.timestamp + chrono::Duration::seconds(90);
        assert_eq!(a, b);
    }

    #[test]
    fn fatal_suffix_detection() {
        assert!(ValidationError::for_column("c", 0, "check_interval_min_fatal", "m").is_fatal());
        assert!(!ValidationError::for_column("c", 0, "groove_width_range", "m").is_fatal());
    }
}
