//! Column metadata.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One named measurable field of a logical table.
///
/// Definitions are static per table and track variant; `hidden` columns
/// are excluded from rule configuration, which is how variant-specific
/// visibility suppresses irrelevant checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub hidden: bool,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            hidden: false,
        }
    }

    pub fn hidden(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            hidden: true,
        }
    }
}

/// Name-indexed view over a slice of column definitions.
#[derive(Debug, Clone, Default)]
pub struct ColumnLookup<'a> {
    inner: HashMap<&'a str, &'a ColumnDef>,
}

impl<'a> ColumnLookup<'a> {
    pub fn new(columns: &'a [ColumnDef]) -> Self {
        Self {
            inner: columns
                .iter()
                .map(|column| (column.name.as_str(), column))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&'a ColumnDef> {
        self.inner.get(name).copied()
    }

    /// Present in the metadata and not marked hidden.
    pub fn is_visible(&self, name: &str) -> bool {
        self.get(name).is_some_and(|column| !column.hidden)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_requires_presence_and_not_hidden() {
        let columns = vec![
            ColumnDef::new("check_interval", "Check interval"),
            ColumnDef::hidden("lead_front_gauge", "Gauge at lead curve front"),
        ];
        let lookup = ColumnLookup::new(&columns);

        assert!(lookup.is_visible("check_interval"));
        assert!(!lookup.is_visible("lead_front_gauge"));
        assert!(!lookup.is_visible("no_such_column"));
        assert_eq!(lookup.len(), 2);
    }
}
