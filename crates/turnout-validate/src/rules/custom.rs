//! Caller-supplied predicate rule.

use turnout_model::{Row, ValidationError, Value};

use crate::rules::{Rule, RuleKind};

type Predicate = dyn Fn(&Value, &Row, usize) -> Option<String> + Send + Sync;

/// Wraps an arbitrary predicate as a column rule. The predicate returns
/// `Some(message)` to flag a violation; a panicking predicate is a
/// programming bug and propagates to the caller.
pub struct CustomRule {
    name: String,
    column: String,
    predicate: Box<Predicate>,
}

impl CustomRule {
    pub fn new<F>(name: impl Into<String>, column: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value, &Row, usize) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            column: column.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl Rule for CustomRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Custom
    }

    fn column(&self) -> Option<&str> {
        Some(&self.column)
    }

    fn validate(&self, value: &Value, row: &Row, row_index: usize) -> Option<ValidationError> {
        (self.predicate)(value, row, row_index)
            .map(|message| ValidationError::for_column(&self.column, row_index, &self.name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_message_becomes_the_finding() {
        let rule = CustomRule::new("even_only", "c", |value, _row, _index| {
            let number = value.as_number()?;
            (number % 2.0 != 0.0).then(|| format!("value must be even, actual: {number}"))
        });
        let row = Row::new();

        assert!(rule.validate(&Value::Number(4.0), &row, 0).is_none());
        let error = rule.validate(&Value::Number(5.0), &row, 1).expect("odd");
        assert_eq!(error.rule_name, "even_only");
        assert_eq!(error.row_index, 1);
        assert!(error.message.contains("even"));
    }
}
