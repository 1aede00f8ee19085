//! Colander CLI - validate delimited text tables from the terminal.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            file,
            rules,
            json,
            issues_out,
        } => commands::analyze::run(file, rules, json, issues_out, cli.verbose),

        Commands::Fix {
            file,
            rules,
            output,
        } => commands::fix::run(file, rules, output, cli.verbose),

        Commands::Rules { file, output } => commands::rules::run(file, output, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
