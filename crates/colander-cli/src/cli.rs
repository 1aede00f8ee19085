//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Colander: validate delimited text tables against per-column rules
#[derive(Parser)]
#[command(name = "colander")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a data file and report issues plus a quality score
    Analyze {
        /// Path to the data file (CSV with `,` or `;` separator)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Rule file (JSON); without it only duplicate rows are detected
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Output the full report as JSON
        #[arg(long)]
        json: bool,

        /// Write the issue list as semicolon-delimited CSV to this path
        #[arg(long, value_name = "PATH")]
        issues_out: Option<PathBuf>,
    },

    /// Trim cell whitespace, re-analyze, and export the cleaned table
    Fix {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Rule file (JSON) used for the before/after comparison
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Output path for the cleaned file (default: <file>.cleaned.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a default rule file template from a data file's columns
    Rules {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the rule file (default: <file>.rules.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
