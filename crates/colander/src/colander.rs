//! Main Colander struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::{Loader, SourceMetadata, Table};
use crate::rules::ColumnRule;
use crate::validation::{Issue, IssueKind, Validator};

/// Result of analyzing a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Detected issues in detection order.
    pub issues: Vec<Issue>,
    /// Summary statistics.
    pub summary: ReportSummary,
}

/// Summary of an analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of data rows.
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// Total number of issues.
    pub total_issues: usize,
    /// Issues broken down by kind.
    pub issues_by_kind: IssueCounts,
    /// Quality score in [0, 100].
    pub quality_score: f64,
}

/// Counts of issues by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCounts {
    pub duplicate: usize,
    pub required: usize,
    #[serde(rename = "type")]
    pub type_mismatch: usize,
    pub range: usize,
}

impl IssueCounts {
    /// Tally issues by kind.
    pub fn tally(issues: &[Issue]) -> Self {
        let mut counts = Self::default();
        for issue in issues {
            match issue.kind {
                IssueKind::Duplicate => counts.duplicate += 1,
                IssueKind::Required => counts.required += 1,
                IssueKind::Type => counts.type_mismatch += 1,
                IssueKind::Range => counts.range += 1,
            }
        }
        counts
    }
}

/// The main analysis engine: loader and validator behind one call.
///
/// Holds no state between calls; tables, rules, and issues are owned by the
/// caller. Independent tables may be analyzed from independent threads.
#[derive(Debug, Default)]
pub struct Colander {
    loader: Loader,
    validator: Validator,
}

impl Colander {
    /// Create a new instance.
    pub fn new() -> Self {
        Self {
            loader: Loader::new(),
            validator: Validator::new(),
        }
    }

    /// Load a file, validate it against the given rules, and report.
    pub fn analyze(&self, path: impl AsRef<Path>, rules: &[ColumnRule]) -> Result<AnalysisReport> {
        let (table, source) = self.loader.load_file(path)?;
        let issues = self.validator.analyze(&table, rules);
        let summary = self.summarize(&table, &issues);

        Ok(AnalysisReport {
            source,
            issues,
            summary,
        })
    }

    /// Validate an already-loaded table and summarize the result.
    pub fn analyze_table(&self, table: &Table, rules: &[ColumnRule]) -> (Vec<Issue>, ReportSummary) {
        let issues = self.validator.analyze(table, rules);
        let summary = self.summarize(table, &issues);
        (issues, summary)
    }

    fn summarize(&self, table: &Table, issues: &[Issue]) -> ReportSummary {
        ReportSummary {
            row_count: table.row_count(),
            column_count: table.column_count(),
            total_issues: issues.len(),
            issues_by_kind: IssueCounts::tally(issues),
            quality_score: self.validator.quality_score(table, issues),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_analyze_reports_summary() {
        let file = create_test_file("Name;Age\nAnna;30\nAnna;30\nBen;abc\n");
        let rules = vec![ColumnRule::new("Age", RuleKind::Numeric)];

        let report = Colander::new().analyze(file.path(), &rules).unwrap();

        assert_eq!(report.summary.row_count, 3);
        assert_eq!(report.summary.column_count, 2);
        assert_eq!(report.summary.total_issues, 2);
        assert_eq!(report.summary.issues_by_kind.duplicate, 1);
        assert_eq!(report.summary.issues_by_kind.type_mismatch, 1);
        assert!((report.summary.quality_score - (100.0 - 200.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_clean_file_scores_high() {
        let file = create_test_file("Name;Age\nAnna;30\nBen;25\n");
        let rules = vec![ColumnRule::new("Age", RuleKind::Numeric).required()];

        let report = Colander::new().analyze(file.path(), &rules).unwrap();

        assert!(report.issues.is_empty());
        assert_eq!(report.summary.quality_score, 100.0);
    }

    #[test]
    fn test_report_serializes() {
        let file = create_test_file("a;b\n1;2\n");
        let report = Colander::new().analyze(file.path(), &[]).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"quality_score\":100.0"));
    }
}
