//! Tolerance tables for the five turnout measurement tables.
//!
//! Values are deviations from nominal in millimetres unless a column
//! label says otherwise; guard-rail check interval and back distance are
//! absolute. Rule names ending in `_fatal` are rendered as blocking by
//! the export layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use turnout_model::{ColumnDef, TurnoutError};

/// The logical measurement tables of one turnout inspection record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// Rail gauge deviations along the turnout.
    Gauge,
    /// Horizontal (cross-level) deviations.
    Level,
    /// Lead curve offsets.
    Offset,
    /// Switch rail reductions.
    Reduction,
    /// Guard rail flange grooves plus check interval and back distance.
    GuardRail,
}

impl TableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Gauge => "gauge",
            TableKind::Level => "level",
            TableKind::Offset => "offset",
            TableKind::Reduction => "reduction",
            TableKind::GuardRail => "guard_rail",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = TurnoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "gauge" => Ok(TableKind::Gauge),
            "level" => Ok(TableKind::Level),
            "offset" => Ok(TableKind::Offset),
            "reduction" => Ok(TableKind::Reduction),
            "guard_rail" => Ok(TableKind::GuardRail),
            other => Err(TurnoutError::UnknownTable(other.to_string())),
        }
    }
}

/// Track alignment variant of the inspected turnout route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackVariant {
    Straight,
    Curved,
}

impl TrackVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackVariant::Straight => "straight",
            TrackVariant::Curved => "curved",
        }
    }
}

impl fmt::Display for TrackVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrackVariant {
    type Err = TurnoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "straight" => Ok(TrackVariant::Straight),
            "curved" => Ok(TrackVariant::Curved),
            other => Err(TurnoutError::UnknownVariant(other.to_string())),
        }
    }
}

/// Numeric bounds for one column of a table.
#[derive(Debug, Clone, Copy)]
pub struct ToleranceSpec {
    pub rule_name: &'static str,
    pub column: &'static str,
    pub min: f64,
    pub max: f64,
}

/// A presence constraint bound to one column.
#[derive(Debug, Clone, Copy)]
pub struct RequiredSpec {
    pub rule_name: &'static str,
    pub column: &'static str,
}

/// A group of physically co-located measurement points checked pairwise
/// for triangle depression.
#[derive(Debug, Clone, Copy)]
pub struct DepressionGroup {
    pub rule_name: &'static str,
    pub columns: &'static [&'static str],
}

/// Fixed guard-rail check thresholds (mm, absolute).
#[derive(Debug, Clone, Copy)]
pub struct GuardLimits {
    pub check_interval_rule: &'static str,
    pub check_interval_column: &'static str,
    pub check_interval_min: f64,
    pub back_distance_rule: &'static str,
    pub back_distance_column: &'static str,
    pub back_distance_max: f64,
    pub span_rule: &'static str,
    pub span_min: f64,
    pub span_max: f64,
}

/// Everything the configurator needs for one table and variant.
#[derive(Debug, Clone, Copy)]
pub struct TableRules {
    /// Shared name for the per-column numeric type rule; the statistics
    /// key still distinguishes bindings by column.
    pub type_rule_name: &'static str,
    pub tolerances: &'static [ToleranceSpec],
    pub required: &'static [RequiredSpec],
    pub required_empty: &'static [RequiredSpec],
    pub depression_groups: &'static [DepressionGroup],
    pub guard_limits: Option<GuardLimits>,
}

const NO_TOLERANCES: &[ToleranceSpec] = &[];
const NO_REQUIRED: &[RequiredSpec] = &[];
const NO_GROUPS: &[DepressionGroup] = &[];

const GAUGE_TOLERANCES: &[ToleranceSpec] = &[
    ToleranceSpec { rule_name: "gauge_switch_range_fatal", column: "switch_tip_gauge", min: -3.0, max: 6.0 },
    ToleranceSpec { rule_name: "gauge_switch_range_fatal", column: "switch_mid_gauge", min: -3.0, max: 6.0 },
    ToleranceSpec { rule_name: "gauge_switch_range_fatal", column: "switch_heel_gauge", min: -3.0, max: 6.0 },
    ToleranceSpec { rule_name: "gauge_lead_range_fatal", column: "lead_front_gauge", min: -3.0, max: 6.0 },
    ToleranceSpec { rule_name: "gauge_lead_range_fatal", column: "lead_mid_gauge", min: -3.0, max: 6.0 },
    ToleranceSpec { rule_name: "gauge_lead_range_fatal", column: "lead_rear_gauge", min: -3.0, max: 6.0 },
    ToleranceSpec { rule_name: "gauge_frog_range_fatal", column: "frog_front_gauge", min: -2.0, max: 3.0 },
    ToleranceSpec { rule_name: "gauge_frog_range_fatal", column: "frog_mid_gauge", min: -2.0, max: 3.0 },
    ToleranceSpec { rule_name: "gauge_frog_range_fatal", column: "frog_rear_gauge", min: -2.0, max: 3.0 },
];

const LEVEL_TOLERANCES: &[ToleranceSpec] = &[
    ToleranceSpec { rule_name: "level_range", column: "switch_front_level", min: -4.0, max: 4.0 },
    ToleranceSpec { rule_name: "level_range", column: "switch_mid_level", min: -4.0, max: 4.0 },
    ToleranceSpec { rule_name: "level_range", column: "switch_heel_level", min: -4.0, max: 4.0 },
    ToleranceSpec { rule_name: "level_range", column: "lead_front_level", min: -4.0, max: 4.0 },
    ToleranceSpec { rule_name: "level_range", column: "lead_mid_level", min: -4.0, max: 4.0 },
    ToleranceSpec { rule_name: "level_range", column: "lead_rear_level", min: -4.0, max: 4.0 },
    ToleranceSpec { rule_name: "level_range", column: "frog_front_level", min: -4.0, max: 4.0 },
    ToleranceSpec { rule_name: "level_range", column: "frog_mid_level", min: -4.0, max: 4.0 },
    ToleranceSpec { rule_name: "level_range", column: "frog_rear_level", min: -4.0, max: 4.0 },
];

const LEVEL_GROUPS: &[DepressionGroup] = &[
    DepressionGroup {
        rule_name: "triangle_depression_switch",
        columns: &["switch_front_level", "switch_mid_level", "switch_heel_level"],
    },
    DepressionGroup {
        rule_name: "triangle_depression_lead",
        columns: &["lead_front_level", "lead_mid_level", "lead_rear_level"],
    },
    DepressionGroup {
        rule_name: "triangle_depression_frog",
        columns: &["frog_front_level", "frog_mid_level", "frog_rear_level"],
    },
];

const OFFSET_TOLERANCES: &[ToleranceSpec] = &[
    ToleranceSpec { rule_name: "offset_range", column: "lead_offset_1", min: -2.0, max: 2.0 },
    ToleranceSpec { rule_name: "offset_range", column: "lead_offset_2", min: -2.0, max: 2.0 },
    ToleranceSpec { rule_name: "offset_range", column: "lead_offset_3", min: -2.0, max: 2.0 },
    ToleranceSpec { rule_name: "offset_range", column: "lead_offset_4", min: -2.0, max: 2.0 },
    ToleranceSpec { rule_name: "offset_range", column: "lead_offset_5", min: -2.0, max: 2.0 },
];

/// On the straight route the lead curve has no offsets to measure; any
/// populated cell is an entry mistake.
const OFFSET_REQUIRED_EMPTY: &[RequiredSpec] = &[
    RequiredSpec { rule_name: "offset_not_applicable", column: "lead_offset_1" },
    RequiredSpec { rule_name: "offset_not_applicable", column: "lead_offset_2" },
    RequiredSpec { rule_name: "offset_not_applicable", column: "lead_offset_3" },
    RequiredSpec { rule_name: "offset_not_applicable", column: "lead_offset_4" },
    RequiredSpec { rule_name: "offset_not_applicable", column: "lead_offset_5" },
];

const REDUCTION_TOLERANCES: &[ToleranceSpec] = &[
    ToleranceSpec { rule_name: "reduction_range_fatal", column: "tip_reduction", min: -1.0, max: 1.0 },
    ToleranceSpec { rule_name: "reduction_range", column: "mid_reduction", min: -1.0, max: 1.0 },
    ToleranceSpec { rule_name: "reduction_range", column: "heel_reduction", min: -1.0, max: 1.0 },
];

const REDUCTION_REQUIRED: &[RequiredSpec] = &[
    RequiredSpec { rule_name: "tip_reduction_required", column: "tip_reduction" },
];

const GUARD_TOLERANCES: &[ToleranceSpec] = &[
    ToleranceSpec { rule_name: "groove_width_range", column: "groove_front", min: 41.0, max: 45.0 },
    ToleranceSpec { rule_name: "groove_width_range", column: "groove_mid", min: 41.0, max: 45.0 },
    ToleranceSpec { rule_name: "groove_width_range", column: "groove_rear", min: 41.0, max: 45.0 },
];

const GUARD_LIMITS: GuardLimits = GuardLimits {
    check_interval_rule: "check_interval_min_fatal",
    check_interval_column: "check_interval",
    check_interval_min: 1391.0,
    back_distance_rule: "back_distance_max_fatal",
    back_distance_column: "back_distance",
    back_distance_max: 1348.0,
    span_rule: "guard_span_range_fatal",
    span_min: 2736.0,
    span_max: 2742.0,
};

/// Rule data for one (table, variant).
pub fn table_rules(table: TableKind, variant: TrackVariant) -> TableRules {
    match (table, variant) {
        (TableKind::Gauge, _) => TableRules {
            type_rule_name: "gauge_value_type",
            tolerances: GAUGE_TOLERANCES,
            required: NO_REQUIRED,
            required_empty: NO_REQUIRED,
            depression_groups: NO_GROUPS,
            guard_limits: None,
        },
        (TableKind::Level, _) => TableRules {
            type_rule_name: "level_value_type",
            tolerances: LEVEL_TOLERANCES,
            required: NO_REQUIRED,
            required_empty: NO_REQUIRED,
            depression_groups: LEVEL_GROUPS,
            guard_limits: None,
        },
        (TableKind::Offset, TrackVariant::Curved) => TableRules {
            type_rule_name: "offset_value_type",
            tolerances: OFFSET_TOLERANCES,
            required: NO_REQUIRED,
            required_empty: NO_REQUIRED,
            depression_groups: NO_GROUPS,
            guard_limits: None,
        },
        (TableKind::Offset, TrackVariant::Straight) => TableRules {
            type_rule_name: "offset_value_type",
            tolerances: NO_TOLERANCES,
            required: NO_REQUIRED,
            required_empty: OFFSET_REQUIRED_EMPTY,
            depression_groups: NO_GROUPS,
            guard_limits: None,
        },
        (TableKind::Reduction, _) => TableRules {
            type_rule_name: "reduction_value_type",
            tolerances: REDUCTION_TOLERANCES,
            required: REDUCTION_REQUIRED,
            required_empty: NO_REQUIRED,
            depression_groups: NO_GROUPS,
            guard_limits: None,
        },
        (TableKind::GuardRail, _) => TableRules {
            type_rule_name: "guard_value_type",
            tolerances: GUARD_TOLERANCES,
            required: NO_REQUIRED,
            required_empty: NO_REQUIRED,
            depression_groups: NO_GROUPS,
            guard_limits: Some(GUARD_LIMITS),
        },
    }
}

/// Standard column metadata per table and variant. Callers with their
/// own table definitions may substitute any metadata of the same shape.
pub fn default_columns(table: TableKind, variant: TrackVariant) -> Vec<ColumnDef> {
    let straight = variant == TrackVariant::Straight;
    match table {
        TableKind::Gauge => vec![
            ColumnDef::new("switch_tip_gauge", "Gauge at switch tip"),
            ColumnDef::new("switch_mid_gauge", "Gauge at switch midpoint"),
            ColumnDef::new("switch_heel_gauge", "Gauge at switch heel"),
            lead_column(straight, "lead_front_gauge", "Gauge at lead curve front"),
            lead_column(straight, "lead_mid_gauge", "Gauge at lead curve middle"),
            lead_column(straight, "lead_rear_gauge", "Gauge at lead curve rear"),
            ColumnDef::new("frog_front_gauge", "Gauge at frog front"),
            ColumnDef::new("frog_mid_gauge", "Gauge at frog middle"),
            ColumnDef::new("frog_rear_gauge", "Gauge at frog rear"),
        ],
        TableKind::Level => vec![
            ColumnDef::new("switch_front_level", "Cross level at switch front"),
            ColumnDef::new("switch_mid_level", "Cross level at switch midpoint"),
            ColumnDef::new("switch_heel_level", "Cross level at switch heel"),
            lead_column(straight, "lead_front_level", "Cross level at lead curve front"),
            lead_column(straight, "lead_mid_level", "Cross level at lead curve middle"),
            lead_column(straight, "lead_rear_level", "Cross level at lead curve rear"),
            ColumnDef::new("frog_front_level", "Cross level at frog front"),
            ColumnDef::new("frog_mid_level", "Cross level at frog middle"),
            ColumnDef::new("frog_rear_level", "Cross level at frog rear"),
        ],
        TableKind::Offset => vec![
            ColumnDef::new("lead_offset_1", "Lead curve offset at point 1"),
            ColumnDef::new("lead_offset_2", "Lead curve offset at point 2"),
            ColumnDef::new("lead_offset_3", "Lead curve offset at point 3"),
            ColumnDef::new("lead_offset_4", "Lead curve offset at point 4"),
            ColumnDef::new("lead_offset_5", "Lead curve offset at point 5"),
        ],
        TableKind::Reduction => vec![
            ColumnDef::new("tip_reduction", "Reduction at switch tip"),
            ColumnDef::new("mid_reduction", "Reduction at planing midpoint"),
            ColumnDef::new("heel_reduction", "Reduction at planing end"),
        ],
        TableKind::GuardRail => vec![
            ColumnDef::new("groove_front", "Flange groove at guard front"),
            ColumnDef::new("groove_mid", "Flange groove at guard middle"),
            ColumnDef::new("groove_rear", "Flange groove at guard rear"),
            ColumnDef::new("check_interval", "Check interval"),
            ColumnDef::new("back_distance", "Guard back distance"),
        ],
    }
}

fn lead_column(straight: bool, name: &str, label: &str) -> ColumnDef {
    if straight {
        ColumnDef::hidden(name, label)
    } else {
        ColumnDef::new(name, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_variant_parse() {
        assert_eq!("guard_rail".parse::<TableKind>().unwrap(), TableKind::GuardRail);
        assert_eq!("curved".parse::<TrackVariant>().unwrap(), TrackVariant::Curved);
        assert!("diamond".parse::<TableKind>().is_err());
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&TableKind::GuardRail).expect("serialize kind");
        assert_eq!(json, "\"guard_rail\"");
        let round: TableKind = serde_json::from_str(&json).expect("deserialize kind");
        assert_eq!(round, TableKind::GuardRail);
    }

    #[test]
    fn straight_variant_hides_the_lead_curve() {
        let columns = default_columns(TableKind::Gauge, TrackVariant::Straight);
        let hidden: Vec<&str> = columns
            .iter()
            .filter(|c| c.hidden)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(hidden, vec!["lead_front_gauge", "lead_mid_gauge", "lead_rear_gauge"]);

        let columns = default_columns(TableKind::Gauge, TrackVariant::Curved);
        assert!(columns.iter().all(|c| !c.hidden));
    }

    #[test]
    fn every_tolerance_column_exists_in_the_metadata() {
        for table in [
            TableKind::Gauge,
            TableKind::Level,
            TableKind::Offset,
            TableKind::Reduction,
            TableKind::GuardRail,
        ] {
            for variant in [TrackVariant::Straight, TrackVariant::Curved] {
                let columns = default_columns(table, variant);
                let rules = table_rules(table, variant);
                for spec in rules.tolerances {
                    assert!(
                        columns.iter().any(|c| c.name == spec.column),
                        "{table}/{variant}: tolerance column {} missing",
                        spec.column
                    );
                }
                for group in rules.depression_groups {
                    for column in group.columns {
                        assert!(
                            columns.iter().any(|c| c.name == *column),
                            "{table}/{variant}: group column {column} missing"
                        );
                    }
                }
            }
        }
    }
}
