//! Fix command - trim whitespace, re-analyze, export the cleaned table.

use std::fs;
use std::path::PathBuf;

use colander::{Loader, Validator, export};
use colored::Colorize;

pub fn run(
    file: PathBuf,
    rules_path: Option<PathBuf>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let rules = super::load_rules_or_default(rules_path, verbose)?;

    let loader = Loader::new();
    let validator = Validator::new();

    let (mut table, _) = loader.load_file(&file)?;

    let before_issues = validator.analyze(&table, &rules);
    let before_score = validator.quality_score(&table, &before_issues);

    validator.apply_auto_fixes(&mut table);

    let after_issues = validator.analyze(&table, &rules);
    let after_score = validator.quality_score(&table, &after_issues);

    let output_path = output.unwrap_or_else(|| super::sibling_path(&file, "cleaned.csv"));
    fs::write(&output_path, export::table_to_csv(&table))?;

    println!(
        "{} {}",
        "Cleaned file written to".green().bold(),
        output_path.display().to_string().white()
    );
    println!(
        "Quality score: {} -> {} ({} -> {} issues)",
        format!("{:.1}%", before_score).white(),
        format!("{:.1}%", after_score).white().bold(),
        before_issues.len(),
        after_issues.len()
    );

    Ok(())
}
