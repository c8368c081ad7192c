//! Validated puzzle input.
//!
//! A [`Puzzle`] can only be built from input that passed every check, so the
//! search itself never has to handle malformed data. Validation uses
//! Stillwater's `Validation` to report every problem at once instead of
//! stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use decant::puzzle::{InputViolation, Puzzle};
//!
//! let puzzle = Puzzle::new(&[5, 3], &[0, 0], &[4, 0]).unwrap();
//! assert_eq!(puzzle.len(), 2);
//!
//! let err = Puzzle::new(&[5, 0], &[6, 0], &[0, 0]).unwrap_err();
//! assert_eq!(err.violations().len(), 2);
//! assert!(err
//!     .violations()
//!     .iter()
//!     .any(|v| matches!(v, InputViolation::ZeroCapacity { index: 1 })));
//! ```

pub mod error;
pub mod validation;

pub use error::{InputViolation, PuzzleError, QuantityRole};
pub use validation::validate_input;

use crate::core::{replay, Container, Containers, Move};
use stillwater::validation::Validation;

/// A validated puzzle: initial and target states over the same containers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    initial: Containers,
    target: Containers,
}

impl Puzzle {
    /// Validate the raw lists and build the puzzle.
    ///
    /// Returns [`PuzzleError::InvalidInput`] listing every violation when the
    /// lists differ in length, a capacity is zero, or a quantity exceeds its
    /// container's capacity.
    pub fn new(capacities: &[u32], initial: &[u32], target: &[u32]) -> Result<Self, PuzzleError> {
        match validate_input(capacities, initial, target) {
            Validation::Success(_) => Ok(Self {
                initial: build_state(capacities, initial),
                target: build_state(capacities, target),
            }),
            Validation::Failure(errors) => Err(PuzzleError::InvalidInput(
                errors.iter().cloned().collect(),
            )),
        }
    }

    pub fn initial(&self) -> &Containers {
        &self.initial
    }

    pub fn target(&self) -> &Containers {
        &self.target
    }

    pub fn capacities(&self) -> Vec<u32> {
        self.initial.capacities()
    }

    /// Number of containers.
    pub fn len(&self) -> usize {
        self.initial.len()
    }

    pub fn is_empty(&self) -> bool {
        self.initial.is_empty()
    }

    /// Size of the full state space, `∏(capacity + 1)`, saturating.
    pub fn state_space_size(&self) -> u64 {
        self.initial
            .iter()
            .map(|c| u64::from(c.capacity()) + 1)
            .fold(1u64, u64::saturating_mul)
    }

    /// Whether replaying `moves` from the initial state ends on the target.
    ///
    /// Moves that reference a container outside the puzzle make this `false`.
    pub fn is_solved_by(&self, moves: &[Move]) -> bool {
        if moves
            .iter()
            .any(|mv| mv.indices().any(|i| i >= self.len()))
        {
            return false;
        }
        replay(&self.initial, moves).last() == Some(&self.target)
    }
}

fn build_state(capacities: &[u32], quantities: &[u32]) -> Containers {
    capacities
        .iter()
        .zip(quantities)
        .map(|(&capacity, &current)| Container::from_validated(capacity, current))
        .collect()
}
