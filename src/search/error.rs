//! Search error types.

use crate::search::limits::LimitViolation;
use thiserror::Error;

/// Errors that can stop a bounded search
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// One or more configured limits were hit before a solution was found
    #[error("Search limits exceeded: {}", join_violations(.0))]
    LimitExceeded(Vec<LimitViolation>),

    /// Limits configuration could not be parsed
    #[error("Invalid search limits: {0}")]
    InvalidLimits(String),
}

fn join_violations(violations: &[LimitViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
