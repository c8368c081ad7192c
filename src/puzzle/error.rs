//! Input errors for puzzle construction.

use std::fmt;
use thiserror::Error;

/// Which quantity list a violation was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityRole {
    Initial,
    Target,
}

impl fmt::Display for QuantityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// A single problem with the puzzle input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputViolation {
    #[error(
        "Length mismatch: {capacities} capacities, {initial} initial quantities, {target} target quantities"
    )]
    LengthMismatch {
        capacities: usize,
        initial: usize,
        target: usize,
    },

    #[error("Container {index} has zero capacity")]
    ZeroCapacity { index: usize },

    #[error("Container {index} {role} quantity {quantity} exceeds capacity {capacity}")]
    QuantityExceedsCapacity {
        index: usize,
        role: QuantityRole,
        quantity: u32,
        capacity: u32,
    },
}

/// Errors that can occur when constructing a puzzle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PuzzleError {
    /// Every violation found in the input, in discovery order
    #[error("Invalid puzzle input: {}", join_violations(.0))]
    InvalidInput(Vec<InputViolation>),
}

impl PuzzleError {
    pub fn violations(&self) -> &[InputViolation] {
        match self {
            Self::InvalidInput(violations) => violations,
        }
    }
}

fn join_violations(violations: &[InputViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
