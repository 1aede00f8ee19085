//! Issue types for detected data anomalies.

use serde::{Deserialize, Serialize};

/// Kind of anomaly detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A row repeats an earlier row verbatim.
    Duplicate,
    /// A required value is empty.
    Required,
    /// A value does not parse as the rule's kind.
    Type,
    /// A value is outside the rule's min/max bounds.
    Range,
}

impl IssueKind {
    /// Get a human-readable label for the issue kind.
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::Duplicate => "Duplicate",
            IssueKind::Required => "Required",
            IssueKind::Type => "Type",
            IssueKind::Range => "Range",
        }
    }
}

/// A single detected anomaly.
///
/// Issues are pure output values, immutable once created, ordered by
/// detection order (row-major; within a row the duplicate check comes before
/// the per-cell checks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// What was detected.
    pub kind: IssueKind,
    /// 1-based position in the data rows, 0 if row-independent.
    pub row: usize,
    /// Affected column name, empty for row-level issues.
    pub column: String,
    /// Human-readable description.
    pub description: String,
}

impl Issue {
    /// Create a new issue.
    pub fn new(
        kind: IssueKind,
        row: usize,
        column: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            row,
            column: column.into(),
            description: description.into(),
        }
    }

    /// Create a row-level duplicate issue.
    pub fn duplicate(row: usize) -> Self {
        Self::new(IssueKind::Duplicate, row, "", "Duplicate row detected.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_issue_is_row_level() {
        let issue = Issue::duplicate(3);
        assert_eq!(issue.kind, IssueKind::Duplicate);
        assert_eq!(issue.row, 3);
        assert!(issue.column.is_empty());
    }

    #[test]
    fn test_serde_kind_names() {
        let json = serde_json::to_string(&IssueKind::Type).unwrap();
        assert_eq!(json, "\"type\"");
    }
}
