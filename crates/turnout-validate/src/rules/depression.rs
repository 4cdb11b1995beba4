//! Triangle depression detection.
//!
//! A group of physically co-located measurement points (e.g. the
//! front/middle/rear readings along a frog) must not diverge pairwise by
//! more than a fixed tolerance; a larger spread indicates a local dip in
//! the track bed. Only the worst offending pair per row is reported so
//! the caller is pointed at the most actionable repair without being
//! flooded by every violating combination.

use turnout_model::{Row, ValidationError, Value};

use crate::rules::{Rule, RuleKind};

/// Maximum tolerated pairwise difference within a measurement group.
pub const TRIANGLE_DEPRESSION_LIMIT: f64 = 9.0;

/// Row rule performing the pairwise spread check over a named group of
/// columns. Blank cells are skipped entirely, never substituted with
/// zero; fewer than two populated cells cannot form a pair and pass.
#[derive(Debug, Clone)]
pub struct TriangleDepressionRule {
    name: String,
    columns: Vec<String>,
}

impl TriangleDepressionRule {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

impl Rule for TriangleDepressionRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RuleKind {
        RuleKind::TriangleDepression
    }

    fn validate(&self, _value: &Value, row: &Row, row_index: usize) -> Option<ValidationError> {
        let mut points: Vec<(&str, f64)> = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let cell = row.get(column);
            if cell.is_blank() {
                continue;
            }
            let Some(number) = cell.as_number() else {
                return Some(ValidationError::for_column(
                    column,
                    row_index,
                    &self.name,
                    format!("value must be a number, actual: {cell}"),
                ));
            };
            points.push((column, number));
        }

        if points.len() < 2 {
            return None;
        }

        // Pairs in increasing (i, j) order; strict comparison keeps the
        // first pair on ties.
        let mut worst: Option<(&str, &str, f64)> = None;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let difference = (points[i].1 - points[j].1).abs();
                if difference <= TRIANGLE_DEPRESSION_LIMIT {
                    continue;
                }
                if worst.is_none_or(|(_, _, d)| difference > d) {
                    worst = Some((points[i].0, points[j].0, difference));
                }
            }
        }

        let (first, second, difference) = worst?;
        Some(ValidationError::new(
            vec![first.to_string(), second.to_string()],
            row_index,
            &self.name,
            format!(
                "triangle depression anomaly: {first}-{second} = {difference} > {TRIANGLE_DEPRESSION_LIMIT}"
            ),
        ))
    }
}
