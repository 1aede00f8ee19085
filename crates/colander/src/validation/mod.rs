//! Validation engine for detecting data quality issues.

mod issue;
mod validator;

pub use issue::{Issue, IssueKind};
pub use validator::Validator;
