//! Analyze command - report issues and the quality score for a file.

use std::fs;
use std::path::PathBuf;

use colander::{Colander, export};
use colored::Colorize;

pub fn run(
    file: PathBuf,
    rules_path: Option<PathBuf>,
    json: bool,
    issues_out: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let rules = super::load_rules_or_default(rules_path, verbose)?;

    if !json {
        println!(
            "{} {}",
            "Analyzing".cyan().bold(),
            file.display().to_string().white()
        );
    }

    let report = Colander::new().analyze(&file, &rules)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if verbose {
            println!();
            println!("{}", "Source:".yellow().bold());
            println!("  separator   '{}'", report.source.separator);
            println!(
                "  dimensions  {} rows x {} columns",
                report.source.row_count, report.source.column_count
            );
            println!("  hash        {}", report.source.hash);
        }

        println!();
        if report.issues.is_empty() {
            println!("{}", "No issues found - data looks clean!".green());
        } else {
            for issue in &report.issues {
                let location = if issue.column.is_empty() {
                    format!("row {}", issue.row)
                } else {
                    format!("row {}, {}", issue.row, issue.column)
                };
                println!(
                    "  {:9} {:16} {}",
                    issue.kind.label().red(),
                    location.white(),
                    issue.description
                );
            }
        }

        let counts = &report.summary.issues_by_kind;
        println!();
        println!(
            "Found {} issues ({} duplicate, {} required, {} type, {} range)",
            report.summary.total_issues.to_string().white().bold(),
            counts.duplicate.to_string().yellow(),
            counts.required.to_string().yellow(),
            counts.type_mismatch.to_string().yellow(),
            counts.range.to_string().yellow()
        );
        println!(
            "Quality score: {}",
            format!("{:.1}%", report.summary.quality_score).white().bold()
        );
    }

    if let Some(path) = issues_out {
        fs::write(&path, export::issues_to_csv(&report.issues))?;
        if !json {
            println!();
            println!(
                "{} {}",
                "Issues written to".green().bold(),
                path.display().to_string().white()
            );
        }
    }

    Ok(())
}
