//! Command implementations.

pub mod analyze;
pub mod fix;
pub mod rules;

use std::path::{Path, PathBuf};

use colander::ColumnRule;

/// Load rules from a file, or fall back to an empty set.
pub fn load_rules_or_default(
    rules_path: Option<PathBuf>,
    verbose: bool,
) -> Result<Vec<ColumnRule>, Box<dyn std::error::Error>> {
    match rules_path {
        Some(path) => Ok(colander::load_rules(path)?),
        None => {
            if verbose {
                eprintln!("No rule file given; only duplicate rows will be detected.");
            }
            Ok(Vec::new())
        }
    }
}

/// Derive `<stem>.<suffix>` next to the input file.
pub fn sibling_path(file: &Path, suffix: &str) -> PathBuf {
    let mut path = file.to_path_buf();
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    path.set_file_name(format!("{}.{}", stem, suffix));
    path
}
