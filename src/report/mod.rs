//! Serializable records of solved and unsolved puzzles.
//!
//! A report captures the puzzle input, the move sequence (or its absence),
//! the replayed state path, and the search statistics. Reports can be
//! written as JSON or compact binary and checked again later with
//! [`SolutionReport::verify`]. Search state itself is never persisted; a
//! report only describes a finished search.

use crate::core::{replay, Containers, Move};
use crate::puzzle::Puzzle;
use crate::search::{Search, SearchLimits, SearchStats, Solution, Solver};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::ReportError;

/// Version identifier for report format
pub const REPORT_VERSION: u32 = 1;

/// Record of one search outcome.
///
/// # Example
///
/// ```rust
/// use decant::puzzle::Puzzle;
/// use decant::report::SolutionReport;
/// use decant::search::Solver;
///
/// let puzzle = Puzzle::new(&[5, 3], &[0, 0], &[4, 0]).unwrap();
/// let solution = Solver::new(puzzle.clone()).solve().unwrap().unwrap();
///
/// let report = SolutionReport::solved(&puzzle, &solution);
/// let json = report.to_json().unwrap();
///
/// let restored = SolutionReport::from_json(&json).unwrap();
/// assert!(restored.is_solved());
/// assert!(restored.verify().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    /// Report format version
    pub version: u32,

    /// Unique report identifier
    pub id: Uuid,

    /// When the report was created
    pub created_at: DateTime<Utc>,

    /// Container capacities, in order
    pub capacities: Vec<u32>,

    /// Initial fill levels
    pub initial: Vec<u32>,

    /// Target fill levels
    pub target: Vec<u32>,

    /// Shortest move sequence, or `None` when the target is unreachable
    pub moves: Option<Vec<Move>>,

    /// States visited along `moves`, starting with the initial state
    pub path: Vec<Containers>,

    /// Statistics of the search that produced this report
    pub stats: SearchStats,
}

impl SolutionReport {
    /// Report for a solved puzzle.
    pub fn solved(puzzle: &Puzzle, solution: &Solution) -> Self {
        Self::build(
            puzzle,
            Some(solution.moves().to_vec()),
            solution.path().to_vec(),
            solution.stats().clone(),
        )
    }

    /// Report for a puzzle whose target cannot be reached.
    pub fn unreachable(puzzle: &Puzzle, stats: SearchStats) -> Self {
        Self::build(puzzle, None, Vec::new(), stats)
    }

    /// Run an unbounded search on `puzzle` and report the outcome.
    pub fn from_search(puzzle: &Puzzle) -> Self {
        let mut search = Search::new(puzzle);
        while !search.phase().is_final() {
            search.step();
        }
        let stats = search.stats().clone();
        match search.into_solution() {
            Some(solution) => Self::solved(puzzle, &solution),
            None => Self::unreachable(puzzle, stats),
        }
    }

    fn build(
        puzzle: &Puzzle,
        moves: Option<Vec<Move>>,
        path: Vec<Containers>,
        stats: SearchStats,
    ) -> Self {
        Self {
            version: REPORT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            capacities: puzzle.capacities(),
            initial: puzzle.initial().quantities(),
            target: puzzle.target().quantities(),
            moves,
            path,
            stats,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.moves.is_some()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self).map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON, rejecting unknown versions.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))?;
        report.check_version()
    }

    /// Serialize to compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ReportError> {
        bincode::serialize(self).map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from binary, rejecting unknown versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReportError> {
        let report: Self = bincode::deserialize(bytes)
            .map_err(|e| ReportError::DeserializationFailed(e.to_string()))?;
        report.check_version()
    }

    fn check_version(self) -> Result<Self, ReportError> {
        if self.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: self.version,
                supported: REPORT_VERSION,
            });
        }
        Ok(self)
    }

    /// Rebuild the puzzle and check the recorded outcome against it.
    ///
    /// A solved report must replay to the target along exactly `path`. An
    /// unsolved report is confirmed by searching the puzzle again without
    /// bounds; use [`verify_within`](Self::verify_within) for reports from
    /// untrusted sources.
    pub fn verify(&self) -> Result<Puzzle, ReportError> {
        self.verify_within(&SearchLimits::unbounded())
    }

    /// Like [`verify`](Self::verify), but an unreachable claim is re-checked
    /// within `limits`. Hitting a limit yields [`ReportError::Search`].
    pub fn verify_within(&self, limits: &SearchLimits) -> Result<Puzzle, ReportError> {
        let puzzle = Puzzle::new(&self.capacities, &self.initial, &self.target)
            .map_err(|e| ReportError::ValidationFailed(e.to_string()))?;

        match &self.moves {
            Some(moves) => {
                if !puzzle.is_solved_by(moves) {
                    return Err(ReportError::ValidationFailed(
                        "moves do not reach the target".to_string(),
                    ));
                }
                if replay(puzzle.initial(), moves) != self.path {
                    return Err(ReportError::ValidationFailed(
                        "recorded path does not match the moves".to_string(),
                    ));
                }
            }
            None => {
                let solver = Solver::new(puzzle.clone()).with_limits(limits.clone());
                if solver.solve()?.is_some() {
                    return Err(ReportError::ValidationFailed(
                        "target is reachable but no moves were recorded".to_string(),
                    ));
                }
            }
        }

        Ok(puzzle)
    }
}
