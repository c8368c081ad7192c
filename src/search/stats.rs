//! Counters collected while searching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Statistics collected during one breadth-first search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Deepest level reached.
    pub depth: u64,
    /// Frontier nodes expanded.
    pub nodes_expanded: u64,
    /// Successor nodes produced by expansion.
    pub successors_generated: u64,
    /// Successors dropped because their state was already known.
    pub duplicates_pruned: u64,
    /// Distinct states discovered, the initial state included.
    pub states_visited: u64,
    /// Time spent searching.
    pub elapsed: Duration,
}

impl SearchStats {
    #[inline]
    pub fn on_level(&mut self, depth: u64) {
        self.depth = self.depth.max(depth);
    }

    #[inline]
    pub fn on_nodes_expanded(&mut self, count: u64) {
        self.nodes_expanded = self.nodes_expanded.saturating_add(count);
    }

    #[inline]
    pub fn on_successors_generated(&mut self, count: u64) {
        self.successors_generated = self.successors_generated.saturating_add(count);
    }

    #[inline]
    pub fn on_duplicates_pruned(&mut self, count: u64) {
        self.duplicates_pruned = self.duplicates_pruned.saturating_add(count);
    }

    #[inline]
    pub fn set_states_visited(&mut self, count: u64) {
        self.states_visited = count;
    }

    #[inline]
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "depth {} | expanded {} | generated {} | pruned {} | visited {} | {:.3}s",
            self.depth,
            self.nodes_expanded,
            self.successors_generated,
            self.duplicates_pruned,
            self.states_visited,
            self.elapsed.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut stats = SearchStats::default();
        stats.on_nodes_expanded(2);
        stats.on_nodes_expanded(3);
        stats.on_successors_generated(10);
        stats.on_duplicates_pruned(4);

        assert_eq!(stats.nodes_expanded, 5);
        assert_eq!(stats.successors_generated, 10);
        assert_eq!(stats.duplicates_pruned, 4);
    }

    #[test]
    fn depth_only_grows() {
        let mut stats = SearchStats::default();
        stats.on_level(3);
        stats.on_level(1);
        assert_eq!(stats.depth, 3);
    }

    #[test]
    fn counters_saturate() {
        let mut stats = SearchStats {
            nodes_expanded: u64::MAX,
            ..SearchStats::default()
        };
        stats.on_nodes_expanded(1);
        assert_eq!(stats.nodes_expanded, u64::MAX);
    }

    #[test]
    fn display_summarizes_counters() {
        let stats = SearchStats {
            depth: 7,
            nodes_expanded: 20,
            successors_generated: 60,
            duplicates_pruned: 45,
            states_visited: 16,
            elapsed: Duration::from_millis(1500),
        };

        assert_eq!(
            stats.to_string(),
            "depth 7 | expanded 20 | generated 60 | pruned 45 | visited 16 | 1.500s"
        );
    }
}
