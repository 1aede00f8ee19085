//! Delimited-text loader with separator detection.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::table::{SourceMetadata, Table};
use crate::error::{ColanderError, Result};

/// Prefix for synthesized names of blank header tokens.
const BLANK_COLUMN_PREFIX: &str = "Spalte_";

/// Loads delimited text files into [`Table`]s.
///
/// The parse grammar is a plain per-line split on the detected separator:
/// best-effort, not RFC 4180. Quoted fields are not recognized on read; if
/// stricter CSV compliance is ever needed it belongs behind this same
/// contract so the validator is unaffected.
#[derive(Debug, Default)]
pub struct Loader;

impl Loader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Load a file and return the table plus metadata about the source.
    ///
    /// Fails with [`ColanderError::InvalidArgument`] for a blank path,
    /// [`ColanderError::NotFound`] for a missing file, and
    /// [`ColanderError::EmptyInput`] for a file with zero lines.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();

        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(ColanderError::InvalidArgument);
        }
        if !path.exists() {
            return Err(ColanderError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|e| ColanderError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(contents.as_bytes());
        let hash = format!("sha256:{:x}", hasher.finalize());
        let size_bytes = contents.len() as u64;

        let table = self.parse_str(&contents)?;

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            table.separator,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse in-memory text with the same grammar as [`Loader::load_file`].
    pub fn parse_str(&self, text: &str) -> Result<Table> {
        // Tolerate a stray BOM even though BOM-less input is expected.
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut lines = text.lines();
        let first = lines
            .next()
            .ok_or_else(|| ColanderError::EmptyInput("no lines to parse".to_string()))?;

        let separator = detect_separator(first);
        let columns = build_columns(first, separator);

        let mut rows = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }

            let mut tokens = line.split(separator);
            let row: Vec<String> = (0..columns.len())
                .map(|_| tokens.next().unwrap_or("").to_string())
                .collect();
            rows.push(row);
        }

        Ok(Table::new(columns, rows, separator))
    }
}

/// Choose the field separator by inspecting the first line only.
///
/// Counts `,` and `;` occurrences; ties favor `;`. A heuristic, not a
/// grammar: quoted fields are not considered.
fn detect_separator(line: &str) -> char {
    let commas = line.chars().filter(|&c| c == ',').count();
    let semicolons = line.chars().filter(|&c| c == ';').count();
    if semicolons >= commas { ';' } else { ',' }
}

/// Build deduplicated column names from the header line.
fn build_columns(line: &str, separator: char) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();

    for token in line.split(separator) {
        let base = if token.trim().is_empty() {
            format!("{}{}", BLANK_COLUMN_PREFIX, columns.len() + 1)
        } else {
            token.trim().to_string()
        };

        let mut name = base.clone();
        let mut suffix = 2;
        while columns.iter().any(|c| c.eq_ignore_ascii_case(&name)) {
            name = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        columns.push(name);
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_separator_comma() {
        assert_eq!(detect_separator("a,b,c"), ',');
    }

    #[test]
    fn test_detect_separator_semicolon() {
        assert_eq!(detect_separator("a;b;c"), ';');
    }

    #[test]
    fn test_detect_separator_tie_favors_semicolon() {
        assert_eq!(detect_separator("a,b;c"), ';');
        assert_eq!(detect_separator("abc"), ';');
    }

    #[test]
    fn test_header_dedup() {
        let table = Loader::new().parse_str("a,a,b").unwrap();
        assert_eq!(table.columns, vec!["a", "a_2", "b"]);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_header_dedup_case_insensitive() {
        let table = Loader::new().parse_str("id,ID,Id").unwrap();
        assert_eq!(table.columns, vec!["id", "ID_2", "Id_3"]);
    }

    #[test]
    fn test_blank_header_tokens_synthesized() {
        let table = Loader::new().parse_str(";Name; ").unwrap();
        assert_eq!(table.columns, vec!["Spalte_1", "Name", "Spalte_3"]);
    }

    #[test]
    fn test_header_names_trimmed() {
        let table = Loader::new().parse_str(" Name ; Age ").unwrap();
        assert_eq!(table.columns, vec!["Name", "Age"]);
    }

    #[test]
    fn test_short_rows_padded() {
        let table = Loader::new().parse_str("a,b,c\n1,2\n").unwrap();
        assert_eq!(table.rows, vec![vec!["1", "2", ""]]);
    }

    #[test]
    fn test_long_rows_truncated() {
        let table = Loader::new().parse_str("a,b\n1,2,3,4\n").unwrap();
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_cells_kept_verbatim() {
        let table = Loader::new().parse_str("a;b\n x ; y\n").unwrap();
        assert_eq!(table.rows, vec![vec![" x ", " y"]]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = Loader::new().parse_str("a,b\n1,2\n\n   \n3,4\n").unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_empty_input() {
        let err = Loader::new().parse_str("").unwrap_err();
        assert!(matches!(err, ColanderError::EmptyInput(_)));
    }

    #[test]
    fn test_bom_stripped() {
        let table = Loader::new().parse_str("\u{feff}a,b\n1,2\n").unwrap();
        assert_eq!(table.columns, vec!["a", "b"]);
    }
}
