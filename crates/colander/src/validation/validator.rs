//! Rule-based table validation, autofixes, and quality scoring.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::input::Table;
use crate::rules::{ColumnRule, RuleKind, rule_index};

use super::issue::{Issue, IssueKind};

/// Joiner for row fingerprints; two characters so a legitimate single-character
/// delimiter inside a cell cannot collide with it by accident.
const ROW_JOINER: &str = "||";

/// Date/time formats tried by the permissive date parser, most specific first.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

/// Date-only formats tried after the date/time formats.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y", "%Y/%m/%d"];

/// Validates tables against per-column rules and scores the result.
///
/// The validator is pure with respect to its inputs except for
/// [`Validator::apply_auto_fixes`], the one mutation the core performs.
/// Malformed cell content is reported as an [`Issue`], never as an error.
#[derive(Debug, Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Analyze a table against a rule set and return issues in detection
    /// order: row-major, duplicate check first within each row, then columns
    /// left-to-right.
    pub fn analyze(&self, table: &Table, rules: &[ColumnRule]) -> Vec<Issue> {
        let mut issues = Vec::new();
        if table.row_count() == 0 {
            return issues;
        }

        let index = rule_index(rules);
        let mut seen: HashSet<String> = HashSet::new();

        for (r, row) in table.rows.iter().enumerate() {
            let row_number = r + 1;

            // All-empty rows are exempt from the duplicate check; a repeated
            // empty row is never flagged. Documented behavior, not a bug.
            if !row.iter().all(|cell| cell.is_empty()) {
                let fingerprint = row.join(ROW_JOINER);
                if !seen.insert(fingerprint) {
                    issues.push(Issue::duplicate(row_number));
                }
            }

            for (c, column) in table.columns.iter().enumerate() {
                let Some(rule) = index.get(&column.to_lowercase()).copied() else {
                    continue;
                };

                // The loader keeps cells verbatim, so trim here.
                let value = row.get(c).map(|s| s.as_str()).unwrap_or("").trim();

                if rule.required && value.is_empty() {
                    issues.push(Issue::new(
                        IssueKind::Required,
                        row_number,
                        column.clone(),
                        "Required field is empty.",
                    ));
                }

                if value.is_empty() {
                    continue;
                }

                match rule.kind {
                    RuleKind::Text => {}
                    RuleKind::Numeric => {
                        check_numeric(&mut issues, row_number, column, value, rule);
                    }
                    RuleKind::Date => {
                        check_date(&mut issues, row_number, column, value, rule);
                    }
                }
            }
        }

        issues
    }

    /// Trim leading/trailing whitespace from every cell, in place.
    ///
    /// Idempotent: cells that are already trimmed are left untouched, so a
    /// second application is a no-op.
    pub fn apply_auto_fixes(&self, table: &mut Table) {
        for row in &mut table.rows {
            for cell in row {
                let trimmed = cell.trim();
                if trimmed.len() != cell.len() {
                    *cell = trimmed.to_string();
                }
            }
        }
    }

    /// Compute the quality score for a table given its issues.
    ///
    /// An empty table scores a vacuous 100.0. Otherwise each issue costs
    /// `100 / (rows * cols + 1)` points, and the score is clamped at 0.0.
    pub fn quality_score(&self, table: &Table, issues: &[Issue]) -> f64 {
        if table.row_count() == 0 {
            return 100.0;
        }

        let cells = (table.row_count() * table.column_count()) as f64;
        let penalty_per_issue = 100.0 / (cells + 1.0);
        let score = 100.0 - issues.len() as f64 * penalty_per_issue;
        score.max(0.0)
    }
}

/// Parse a number after normalizing a comma decimal separator to a period.
///
/// Locale-invariant: accepts leading sign and exponent notation.
fn parse_number(value: &str) -> Option<f64> {
    value.replace(',', ".").parse::<f64>().ok()
}

/// Permissive calendar-date/time parser over a fixed format list.
fn parse_date(value: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

fn check_numeric(issues: &mut Vec<Issue>, row: usize, column: &str, value: &str, rule: &ColumnRule) {
    let Some(number) = parse_number(value) else {
        issues.push(Issue::new(
            IssueKind::Type,
            row,
            column,
            format!("Value '{value}' is not numeric."),
        ));
        return;
    };

    // Min and max checks are independent; with min > max a single value can
    // legitimately produce two range issues.
    if let Some(min) = rule.min.as_deref().and_then(parse_number) {
        if number < min {
            issues.push(Issue::new(
                IssueKind::Range,
                row,
                column,
                format!("Value {number} is below minimum {min}."),
            ));
        }
    }
    if let Some(max) = rule.max.as_deref().and_then(parse_number) {
        if number > max {
            issues.push(Issue::new(
                IssueKind::Range,
                row,
                column,
                format!("Value {number} exceeds maximum {max}."),
            ));
        }
    }
}

fn check_date(issues: &mut Vec<Issue>, row: usize, column: &str, value: &str, rule: &ColumnRule) {
    let Some(date) = parse_date(value) else {
        issues.push(Issue::new(
            IssueKind::Type,
            row,
            column,
            format!("Value '{value}' is not a valid date."),
        ));
        return;
    };

    if let Some(min) = rule.min.as_deref().and_then(parse_date) {
        if date < min {
            issues.push(Issue::new(
                IssueKind::Range,
                row,
                column,
                format!(
                    "Date {} is before minimum {}.",
                    date.format("%Y-%m-%d"),
                    min.format("%Y-%m-%d")
                ),
            ));
        }
    }
    if let Some(max) = rule.max.as_deref().and_then(parse_date) {
        if date > max {
            issues.push(Issue::new(
                IssueKind::Range,
                row,
                column,
                format!(
                    "Date {} is after maximum {}.",
                    date.format("%Y-%m-%d"),
                    max.format("%Y-%m-%d")
                ),
            ));
        }
    }
}
