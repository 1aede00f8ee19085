//! Colander: rule-based validation and quality scoring for delimited text
//! tables.
//!
//! Colander loads a delimited text file into a rectangular table of string
//! cells, checks each column against user-declared rules, reports anomalies
//! as ordered issues, and condenses the result into a single 0-100 quality
//! score. The read grammar is a deliberate simplification: one record per
//! line, separator sniffed from the header, no quoting.
//!
//! # Core Principles
//!
//! - **Issues are data**: malformed cell content is reported, never thrown
//! - **One mutation**: whitespace trimming is the only built-in fix
//! - **Caller-owned**: tables, rules, and issues never outlive a call
//!
//! # Example
//!
//! ```no_run
//! use colander::{Colander, ColumnRule, RuleKind};
//!
//! let rules = vec![ColumnRule::new("Age", RuleKind::Numeric).with_min("0")];
//! let report = Colander::new().analyze("people.csv", &rules).unwrap();
//!
//! println!("Issues: {}", report.issues.len());
//! println!("Quality: {:.1}%", report.summary.quality_score);
//! ```

pub mod error;
pub mod export;
pub mod input;
pub mod rules;
pub mod validation;

mod colander;

pub use crate::colander::{AnalysisReport, Colander, IssueCounts, ReportSummary};
pub use error::{ColanderError, Result};
pub use input::{Loader, SourceMetadata, Table};
pub use rules::{ColumnRule, RuleKind, default_rules, load_rules, rule_index, save_rules};
pub use validation::{Issue, IssueKind, Validator};
