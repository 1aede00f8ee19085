//! Per-column validation rules.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ColanderError, Result};
use crate::input::Table;

/// The kind of check a rule applies to its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// No check beyond the required flag.
    #[default]
    Text,
    /// Values must parse as numbers; optional min/max bounds.
    Numeric,
    /// Values must parse as calendar dates; optional min/max bounds.
    Date,
}

impl RuleKind {
    /// Get a human-readable label for the rule kind.
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::Text => "Text",
            RuleKind::Numeric => "Numeric",
            RuleKind::Date => "Date",
        }
    }
}

/// Validation policy for a single column.
///
/// `min` and `max` are raw strings interpreted per [`RuleKind`]: numbers for
/// `Numeric`, dates for `Date`, ignored for `Text`. A bound that fails to
/// parse disables only that bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRule {
    /// Name of the column this rule applies to (matched case-insensitively).
    pub column: String,
    /// What kind of check to apply.
    #[serde(default)]
    pub kind: RuleKind,
    /// Whether an empty (after trim) value is an issue.
    #[serde(default)]
    pub required: bool,
    /// Optional lower bound, interpreted per `kind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    /// Optional upper bound, interpreted per `kind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

impl ColumnRule {
    /// Create a rule with the given column name and kind, nothing required.
    pub fn new(column: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            column: column.into(),
            kind,
            required: false,
            min: None,
            max: None,
        }
    }

    /// Mark the column as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the lower bound.
    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Set the upper bound.
    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }
}

/// Derive a permissive default rule set from a table: one `Text` rule per
/// column, nothing required.
pub fn default_rules(table: &Table) -> Vec<ColumnRule> {
    table
        .columns
        .iter()
        .map(|name| ColumnRule::new(name.clone(), RuleKind::Text))
        .collect()
}

/// Build the lookup index used during analysis: lowercased column name to
/// rule, first occurrence wins, blank column names skipped.
///
/// This is an explicit ordered deduplication step, not incidental container
/// behavior; rules later in the slice never shadow earlier ones.
pub fn rule_index(rules: &[ColumnRule]) -> IndexMap<String, &ColumnRule> {
    let mut index = IndexMap::new();
    for rule in rules {
        if rule.column.trim().is_empty() {
            continue;
        }
        index.entry(rule.column.to_lowercase()).or_insert(rule);
    }
    index
}

/// Load a rule set from a JSON file.
pub fn load_rules(path: impl AsRef<Path>) -> Result<Vec<ColumnRule>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| ColanderError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save a rule set to a JSON file.
pub fn save_rules(path: impl AsRef<Path>, rules: &[ColumnRule]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(rules)?;
    fs::write(path, json).map_err(|e| ColanderError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
