//! Decant: a shortest-path solver for the water-pouring puzzle
//!
//! Given containers with fixed capacities, an initial fill state and a
//! target fill state, Decant finds a shortest sequence of empty, fill and
//! pour moves that reaches the target, or reports that none exists.
//!
//! The solver follows a "pure core, imperative shell" layout. Containers,
//! moves and search nodes are immutable values, and every transformation
//! returns a new value. Only the breadth-first driver owns mutable state.
//!
//! # Core Concepts
//!
//! - **Container**: a vessel with a capacity and a current fill level
//! - **Move**: `Empty`, `Fill` or `Pour`, dispatched with `match`
//! - **Search**: level-by-level BFS with visited-state deduplication
//! - **Puzzle**: validated input; all violations are reported at once
//!
//! # Example
//!
//! ```rust
//! use decant::Move;
//!
//! let moves = decant::solve(&[1, 1], &[0, 0], &[1, 1]).unwrap();
//! assert_eq!(moves, Some(vec![Move::Fill { to: 0 }, Move::Fill { to: 1 }]));
//!
//! // A single container can only be empty or full
//! assert_eq!(decant::solve(&[2], &[0], &[1]).unwrap(), None);
//!
//! // Invalid input is rejected before the search starts
//! assert!(decant::solve(&[2], &[3], &[0]).is_err());
//! ```

pub mod core;
pub mod puzzle;
pub mod report;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Container, Containers, Move, SearchNode};
pub use puzzle::{Puzzle, PuzzleError};
pub use report::{ReportError, SolutionReport};
pub use search::{SearchError, SearchLimits, Solution, Solver};

use search::Search;

/// Find a shortest move sequence from `initial` to `target`.
///
/// Returns `Err` when the input is invalid, `Ok(None)` when the target is
/// unreachable, and `Ok(Some(moves))` otherwise. The search is unbounded;
/// use [`Solver::with_limits`] to bound it.
pub fn solve(
    capacities: &[u32],
    initial: &[u32],
    target: &[u32],
) -> Result<Option<Vec<Move>>, PuzzleError> {
    let puzzle = Puzzle::new(capacities, initial, target)?;
    Ok(Search::new(&puzzle).run().map(Solution::into_moves))
}
