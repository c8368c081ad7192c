//! Breadth-first solver.
//!
//! A [`Search`] is a small state machine. It starts in
//! [`SearchPhase::Searching`] and advances one BFS level per
//! [`step`](Search::step) until it reaches a final phase: `Solved` when a
//! frontier node matches the target, or `Exhausted` when the frontier runs
//! dry. BFS visits states in non-decreasing move count, so the first match
//! is a shortest solution.

use crate::core::{replay, Containers, Move, SearchNode};
use crate::puzzle::Puzzle;
use crate::search::error::SearchError;
use crate::search::frontier::find_successors;
use crate::search::limits::{LimitContext, LimitViolation, SearchLimits};
use crate::search::stats::SearchStats;
use crate::search::visited::{distinct_states, filter_successors, first_per_state, VisitedSet};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::Duration;
use stillwater::validation::Validation;
use tracing::{debug, info, trace, warn};

/// Position of a search in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    Searching,
    Solved,
    Exhausted,
}

impl SearchPhase {
    pub fn name(&self) -> &str {
        match self {
            Self::Searching => "Searching",
            Self::Solved => "Solved",
            Self::Exhausted => "Exhausted",
        }
    }

    /// Check if no further step can change the outcome.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// Result of executing a single step
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// A frontier node at `depth` matches the target
    Solved { depth: usize },

    /// The frontier advanced to `depth` and now holds `frontier` nodes
    Expanded { depth: usize, frontier: usize },

    /// No node is left to expand; the target is unreachable
    Exhausted,
}

/// A shortest move sequence together with what the search learned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    moves: Vec<Move>,
    path: Vec<Containers>,
    stats: SearchStats,
}

impl Solution {
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Every state from the initial one to the target, one per move plus one.
    pub fn path(&self) -> &[Containers] {
        &self.path
    }

    /// The state reached by the moves, equal to the puzzle target.
    pub fn final_state(&self) -> &Containers {
        // path always holds at least the initial state
        &self.path[self.path.len() - 1]
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Level-by-level breadth-first search over container states.
///
/// # Example
///
/// ```rust
/// use decant::puzzle::Puzzle;
/// use decant::search::{Search, SearchPhase, StepResult};
///
/// let puzzle = Puzzle::new(&[1, 1], &[0, 0], &[1, 1]).unwrap();
/// let mut search = Search::new(&puzzle);
///
/// assert_eq!(search.step(), StepResult::Expanded { depth: 1, frontier: 2 });
/// assert_eq!(search.step(), StepResult::Expanded { depth: 2, frontier: 1 });
/// assert_eq!(search.step(), StepResult::Solved { depth: 2 });
/// assert_eq!(search.phase(), SearchPhase::Solved);
/// ```
#[derive(Clone, Debug)]
pub struct Search {
    initial: Containers,
    target: Containers,
    frontier: Vec<SearchNode>,
    visited: VisitedSet,
    depth: usize,
    phase: SearchPhase,
    solution: Option<SearchNode>,
    stats: SearchStats,
    started_at: DateTime<Utc>,
}

impl Search {
    /// Seed the frontier with the puzzle's initial state.
    pub fn new(puzzle: &Puzzle) -> Self {
        let initial = puzzle.initial().clone();
        let visited = VisitedSet::seeded(&initial);
        let mut stats = SearchStats::default();
        stats.set_states_visited(visited.len() as u64);

        Self {
            frontier: vec![SearchNode::root(initial.clone())],
            initial,
            target: puzzle.target().clone(),
            visited,
            depth: 0,
            phase: SearchPhase::Searching,
            solution: None,
            stats,
            started_at: Utc::now(),
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Move count of every node in the current frontier.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn frontier(&self) -> &[SearchNode] {
        &self.frontier
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The matching node, once the search is solved.
    pub fn solution(&self) -> Option<&SearchNode> {
        self.solution.as_ref()
    }

    /// Execute one step of the search without any bounds.
    pub fn step(&mut self) -> StepResult {
        match self.check_frontier() {
            Some(result) => result,
            None => {
                let level = self.next_level();
                self.commit_level(level)
            }
        }
    }

    /// Execute one step, refusing to expand past `limits`.
    ///
    /// Depth, visited states and elapsed time are checked before the level
    /// is expanded. The expanded level is then refused if it would grow the
    /// visited set past `max_states`. A limit error leaves the search
    /// untouched; it may be resumed with looser limits or with
    /// [`step`](Self::step).
    pub fn step_within(&mut self, limits: &SearchLimits) -> Result<StepResult, SearchError> {
        if let Some(result) = self.check_frontier() {
            return Ok(result);
        }

        if let Validation::Failure(errors) = limits.enforce(&self.limit_context()) {
            let violations: Vec<_> = errors.iter().cloned().collect();
            warn!(
                depth = self.depth,
                visited = self.visited.len(),
                "search stopped by limits: {:?}",
                violations
            );
            return Err(SearchError::LimitExceeded(violations));
        }

        let level = self.next_level();
        if let Some(max) = limits.max_states {
            let discovered = self.visited.len() + level.discovered.len();
            if discovered > max {
                let violation = LimitViolation::StatesExceeded {
                    max,
                    current: discovered,
                };
                warn!(
                    depth = self.depth,
                    visited = self.visited.len(),
                    "search stopped by limits: {}",
                    violation
                );
                return Err(SearchError::LimitExceeded(vec![violation]));
            }
        }

        Ok(self.commit_level(level))
    }

    /// Step until a final phase is reached.
    pub fn run(mut self) -> Option<Solution> {
        while !self.phase.is_final() {
            self.step();
        }
        self.into_solution()
    }

    /// Consume the search, returning the solution if it was solved.
    pub fn into_solution(self) -> Option<Solution> {
        let node = self.solution?;
        let (_, moves) = node.into_parts();
        let path = replay(&self.initial, &moves);
        Some(Solution {
            moves,
            path,
            stats: self.stats,
        })
    }

    fn limit_context(&self) -> LimitContext {
        LimitContext {
            depth: self.depth + 1,
            states_visited: self.visited.len(),
            started_at: self.started_at,
        }
    }

    fn elapsed(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Report a final phase, detecting a target match or an empty frontier.
    fn check_frontier(&mut self) -> Option<StepResult> {
        match self.phase {
            SearchPhase::Solved => return Some(StepResult::Solved { depth: self.depth }),
            SearchPhase::Exhausted => return Some(StepResult::Exhausted),
            SearchPhase::Searching => {}
        }

        let elapsed = self.elapsed();

        // First match in frontier order wins ties.
        if let Some(node) = self.frontier.iter().find(|n| n.state() == &self.target) {
            info!(
                depth = self.depth,
                visited = self.visited.len(),
                "solution found: {}",
                format_moves(node.moves())
            );
            self.solution = Some(node.clone());
            self.phase = SearchPhase::Solved;
            self.stats.set_elapsed(elapsed);
            return Some(StepResult::Solved { depth: self.depth });
        }

        if self.frontier.is_empty() {
            self.phase = SearchPhase::Exhausted;
            self.stats.set_elapsed(elapsed);
            info!(
                depth = self.depth,
                visited = self.visited.len(),
                "search exhausted, target {} is unreachable",
                self.target
            );
            return Some(StepResult::Exhausted);
        }

        None
    }

    /// Compute the next level from the current frontier without committing it.
    fn next_level(&self) -> Level {
        let successors = find_successors(&self.frontier);
        let generated = successors.len();
        trace!(
            depth = self.depth,
            expanded = self.frontier.len(),
            generated,
            "expanded frontier"
        );

        let valid = filter_successors(successors, &self.visited);
        Level {
            expanded: self.frontier.len(),
            generated,
            discovered: distinct_states(&valid),
            frontier: first_per_state(valid),
        }
    }

    fn commit_level(&mut self, level: Level) -> StepResult {
        self.visited.extend(level.discovered);
        self.frontier = level.frontier;
        self.depth += 1;

        self.stats.on_level(self.depth as u64);
        self.stats.on_nodes_expanded(level.expanded as u64);
        self.stats.on_successors_generated(level.generated as u64);
        self.stats
            .on_duplicates_pruned((level.generated - self.frontier.len()) as u64);
        self.stats.set_states_visited(self.visited.len() as u64);
        let elapsed = self.elapsed();
        self.stats.set_elapsed(elapsed);

        debug!(
            depth = self.depth,
            frontier = self.frontier.len(),
            visited = self.visited.len(),
            "level expanded"
        );

        StepResult::Expanded {
            depth: self.depth,
            frontier: self.frontier.len(),
        }
    }
}

/// One expanded BFS level, not yet merged into the search.
struct Level {
    expanded: usize,
    generated: usize,
    discovered: HashSet<Containers>,
    frontier: Vec<SearchNode>,
}

/// Solves one puzzle, optionally within [`SearchLimits`].
///
/// # Example
///
/// ```rust
/// use decant::puzzle::Puzzle;
/// use decant::search::{SearchLimits, Solver};
///
/// let puzzle = Puzzle::new(&[5, 3], &[0, 0], &[4, 0]).unwrap();
/// let solver = Solver::new(puzzle).with_limits(SearchLimits::builder().max_depth(10).build());
///
/// let solution = solver.solve().unwrap().expect("puzzle is solvable");
/// assert_eq!(solution.len(), 7);
/// assert_eq!(solution.final_state().quantities(), vec![4, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct Solver {
    puzzle: Puzzle,
    limits: SearchLimits,
}

impl Solver {
    /// Create an unbounded solver for `puzzle`.
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            limits: SearchLimits::unbounded(),
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Find a shortest move sequence.
    ///
    /// Returns `Ok(None)` when the target is unreachable and
    /// [`SearchError::LimitExceeded`] when a configured bound is hit first.
    pub fn solve(&self) -> Result<Option<Solution>, SearchError> {
        debug!(
            containers = self.puzzle.len(),
            initial = %self.puzzle.initial(),
            target = %self.puzzle.target(),
            "starting search"
        );

        let mut search = Search::new(&self.puzzle);
        loop {
            match search.step_within(&self.limits)? {
                StepResult::Expanded { .. } => {}
                StepResult::Solved { .. } | StepResult::Exhausted => {
                    return Ok(search.into_solution());
                }
            }
        }
    }
}

fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(capacities: &[u32], initial: &[u32], target: &[u32]) -> Puzzle {
        Puzzle::new(capacities, initial, target).unwrap()
    }

    #[test]
    fn phase_names_and_finality() {
        assert_eq!(SearchPhase::Searching.name(), "Searching");
        assert!(!SearchPhase::Searching.is_final());
        assert!(SearchPhase::Solved.is_final());
        assert!(SearchPhase::Exhausted.is_final());
    }

    #[test]
    fn initial_equal_to_target_solves_immediately() {
        let mut search = Search::new(&puzzle(&[5, 3], &[2, 1], &[2, 1]));

        assert_eq!(search.step(), StepResult::Solved { depth: 0 });
        assert_eq!(search.stats().nodes_expanded, 0);

        let solution = search.into_solution().unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.path().len(), 1);
    }

    #[test]
    fn two_fills_reach_both_full() {
        let solution = Search::new(&puzzle(&[1, 1], &[0, 0], &[1, 1]))
            .run()
            .unwrap();

        assert_eq!(
            solution.moves(),
            &[Move::Fill { to: 0 }, Move::Fill { to: 1 }]
        );
    }

    #[test]
    fn single_container_cannot_hold_half() {
        let mut search = Search::new(&puzzle(&[2], &[0], &[1]));

        assert_eq!(search.step(), StepResult::Expanded { depth: 1, frontier: 1 });
        assert_eq!(search.step(), StepResult::Expanded { depth: 2, frontier: 0 });
        assert_eq!(search.step(), StepResult::Exhausted);
        assert_eq!(search.phase(), SearchPhase::Exhausted);
        assert_eq!(search.visited().len(), 2);
        assert!(search.run().is_none());
    }

    #[test]
    fn final_phases_are_sticky() {
        let mut search = Search::new(&puzzle(&[3], &[0], &[3]));
        search.step();
        assert_eq!(search.step(), StepResult::Solved { depth: 1 });
        assert_eq!(search.step(), StepResult::Solved { depth: 1 });
        assert_eq!(search.depth(), 1);
    }

    #[test]
    fn frontier_holds_one_node_per_state() {
        let mut search = Search::new(&puzzle(&[5, 3], &[0, 0], &[4, 0]));
        while !search.phase().is_final() {
            let states = distinct_states(search.frontier());
            assert_eq!(states.len(), search.frontier().len());
            search.step();
        }
    }

    #[test]
    fn stats_track_search_work() {
        let solution = Search::new(&puzzle(&[5, 3], &[0, 0], &[4, 0]))
            .run()
            .unwrap();
        let stats = solution.stats();

        assert_eq!(stats.depth, 7);
        assert!(stats.nodes_expanded > 0);
        assert!(stats.successors_generated >= stats.nodes_expanded);
        assert_eq!(
            stats.successors_generated - stats.duplicates_pruned,
            stats.states_visited - 1
        );
    }

    #[test]
    fn solver_honours_depth_limit() {
        let tight = Solver::new(puzzle(&[5, 3], &[0, 0], &[4, 0]))
            .with_limits(SearchLimits::builder().max_depth(6).build());

        match tight.solve() {
            Err(SearchError::LimitExceeded(violations)) => {
                assert_eq!(
                    violations,
                    vec![LimitViolation::DepthExceeded { max: 6, current: 7 }]
                );
            }
            other => panic!("Expected depth limit, got {other:?}"),
        }

        let exact = Solver::new(puzzle(&[5, 3], &[0, 0], &[4, 0]))
            .with_limits(SearchLimits::builder().max_depth(7).build());
        assert_eq!(exact.solve().unwrap().map(|s| s.len()), Some(7));
    }

    #[test]
    fn solver_honours_state_limit() {
        let solver = Solver::new(puzzle(&[5, 3], &[0, 0], &[4, 0]))
            .with_limits(SearchLimits::builder().max_states(3).build());

        assert!(matches!(
            solver.solve(),
            Err(SearchError::LimitExceeded(ref v))
                if matches!(v.as_slice(), [LimitViolation::StatesExceeded { max: 3, .. }])
        ));
    }

    #[test]
    fn state_limit_covers_states_found_by_the_last_level() {
        let target = puzzle(&[5, 3], &[0, 0], &[5, 3]);

        let tight = Solver::new(target.clone())
            .with_limits(SearchLimits::builder().max_states(3).build());
        match tight.solve() {
            Err(SearchError::LimitExceeded(violations)) => {
                assert_eq!(
                    violations,
                    vec![LimitViolation::StatesExceeded { max: 3, current: 6 }]
                );
            }
            other => panic!("Expected state limit, got {other:?}"),
        }

        let exact = Solver::new(target).with_limits(SearchLimits::builder().max_states(6).build());
        assert_eq!(exact.limits().max_states, Some(6));
        let solution = exact.solve().unwrap().unwrap();
        assert_eq!(solution.len(), 2);
        assert_eq!(solution.stats().states_visited, 6);
        assert_eq!(solution.final_state(), exact.puzzle().target());
    }

    #[test]
    fn refused_level_is_not_merged() {
        let mut search = Search::new(&puzzle(&[5, 3], &[0, 0], &[4, 0]));
        let limits = SearchLimits::builder().max_states(2).build();

        assert!(search.step_within(&limits).is_err());
        assert_eq!(search.depth(), 0);
        assert_eq!(search.visited().len(), 1);
        assert_eq!(search.frontier().len(), 1);
        assert_eq!(search.stats().nodes_expanded, 0);

        assert_eq!(
            search.step(),
            StepResult::Expanded {
                depth: 1,
                frontier: 2
            }
        );
    }

    #[test]
    fn limit_error_leaves_search_resumable() {
        let mut search = Search::new(&puzzle(&[5, 3], &[0, 0], &[4, 0]));
        let limits = SearchLimits::builder().max_depth(0).build();

        assert!(search.step_within(&limits).is_err());
        assert_eq!(search.phase(), SearchPhase::Searching);
        assert_eq!(search.depth(), 0);

        assert_eq!(search.run().map(|s| s.len()), Some(7));
    }

    #[test]
    fn unreachable_target_is_not_a_limit_error() {
        let solver = Solver::new(puzzle(&[4, 6], &[0, 0], &[1, 0]))
            .with_limits(SearchLimits::builder().max_depth(100).build());
        assert_eq!(solver.solve().unwrap(), None);
    }
}
