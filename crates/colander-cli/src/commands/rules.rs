//! Rules command - write a default rule file template for a data file.

use std::path::PathBuf;

use colander::{Loader, default_rules, save_rules};
use colored::Colorize;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (table, _) = Loader::new().load_file(&file)?;

    let rules = default_rules(&table);
    if verbose {
        for rule in &rules {
            println!("  {} ({})", rule.column, rule.kind.label());
        }
    }

    let output_path = output.unwrap_or_else(|| super::sibling_path(&file, "rules.json"));
    save_rules(&output_path, &rules)?;

    println!(
        "{} {} ({} columns)",
        "Rule template written to".green().bold(),
        output_path.display().to_string().white(),
        rules.len()
    );
    println!("Edit kinds, required flags, and min/max bounds, then run:");
    println!(
        "  {}",
        format!(
            "colander analyze {} --rules {}",
            file.display(),
            output_path.display()
        )
        .cyan()
        .bold()
    );

    Ok(())
}
