//! Semicolon-delimited export of tables and issue lists.
//!
//! Export quoting is independent of the no-quoting read grammar: any field
//! containing `;`, `"`, or a newline is wrapped in double quotes with
//! internal quotes doubled, so exported files survive round trips through
//! spreadsheet tools.

use crate::input::Table;
use crate::validation::Issue;

/// The delimiter used for all exports, regardless of the input separator.
const EXPORT_SEPARATOR: char = ';';

/// Escape a single field for semicolon-delimited output.
///
/// Pure: returns the value unchanged unless it contains the delimiter, a
/// double quote, or a newline.
pub fn escape(value: &str) -> String {
    if value.contains(EXPORT_SEPARATOR) || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render a table as semicolon-delimited text, header first.
pub fn table_to_csv(table: &Table) -> String {
    let mut out = String::new();
    push_record(&mut out, table.columns.iter().map(|c| c.as_str()));
    for row in &table.rows {
        push_record(&mut out, row.iter().map(|c| c.as_str()));
    }
    out
}

/// Render an issue list as semicolon-delimited text.
pub fn issues_to_csv(issues: &[Issue]) -> String {
    let mut out = String::from("Kind;Row;Column;Description\n");
    for issue in issues {
        let row = issue.row.to_string();
        push_record(
            &mut out,
            [
                issue.kind.label(),
                row.as_str(),
                issue.column.as_str(),
                issue.description.as_str(),
            ]
            .into_iter(),
        );
    }
    out
}

fn push_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(EXPORT_SEPARATOR);
        }
        out.push_str(&escape(field));
    }
    out.push('\n');
}
