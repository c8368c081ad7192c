//! Breadth-first search over container states.
//!
//! The search expands the whole frontier one level at a time, drops every
//! successor whose state was already discovered, and stops at the first
//! frontier node matching the target. Optional [`SearchLimits`] bound depth,
//! discovered states, and wall-clock time.
//!
//! # Example
//!
//! ```rust
//! use decant::puzzle::Puzzle;
//! use decant::search::Solver;
//!
//! let puzzle = Puzzle::new(&[8, 5, 3], &[8, 0, 0], &[4, 4, 0]).unwrap();
//! let solution = Solver::new(puzzle).solve().unwrap().unwrap();
//!
//! assert_eq!(solution.len(), 7);
//! ```

pub mod error;
pub mod frontier;
pub mod limits;
pub mod solver;
pub mod stats;
pub mod visited;

pub use error::SearchError;
pub use frontier::{expand, find_successors};
pub use limits::{LimitContext, LimitViolation, SearchLimits, SearchLimitsBuilder};
pub use solver::{Search, SearchPhase, Solution, Solver, StepResult};
pub use stats::SearchStats;
pub use visited::{distinct_states, filter_successors, first_per_state, VisitedSet};
