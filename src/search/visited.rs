//! Visited-state bookkeeping and successor deduplication.

use crate::core::{Containers, SearchNode};
use std::collections::HashSet;

/// Every container collection discovered so far.
///
/// The set only grows: states are never removed once seen.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    states: HashSet<Containers>,
}

impl VisitedSet {
    /// Visited set seeded with the initial state.
    pub fn seeded(initial: &Containers) -> Self {
        let mut states = HashSet::new();
        states.insert(initial.clone());
        Self { states }
    }

    pub fn contains(&self, state: &Containers) -> bool {
        self.states.contains(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Add a batch of states discovered at one level.
    pub fn extend(&mut self, states: HashSet<Containers>) {
        self.states.extend(states);
    }
}

/// Successors whose state has not been visited, in their original order.
pub fn filter_successors(successors: Vec<SearchNode>, visited: &VisitedSet) -> Vec<SearchNode> {
    successors
        .into_iter()
        .filter(|node| !visited.contains(node.state()))
        .collect()
}

/// The unique states among `successors`.
pub fn distinct_states(successors: &[SearchNode]) -> HashSet<Containers> {
    successors.iter().map(|node| node.state().clone()).collect()
}

/// Keep only the first node reaching each state, preserving order.
///
/// Later duplicates at the same depth expand into the same successors
/// further down the frontier, so dropping them never changes which node
/// matches the target first.
pub fn first_per_state(successors: Vec<SearchNode>) -> Vec<SearchNode> {
    let mut seen = HashSet::with_capacity(successors.len());
    successors
        .into_iter()
        .filter(|node| seen.insert(node.state().clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Container, Move};

    fn jugs(a: u32, b: u32) -> Containers {
        Containers::from(vec![
            Container::new(5, a).unwrap(),
            Container::new(3, b).unwrap(),
        ])
    }

    #[test]
    fn seeded_set_contains_initial_state() {
        let visited = VisitedSet::seeded(&jugs(0, 0));
        assert!(visited.contains(&jugs(0, 0)));
        assert!(!visited.contains(&jugs(5, 0)));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn filter_removes_visited_states_in_order() {
        let root = SearchNode::root(jugs(5, 0));
        let successors = vec![
            root.extend(Move::Empty { from: 0 }),
            root.extend(Move::Fill { to: 1 }),
            root.extend(Move::Pour { from: 0, to: 1 }),
        ];
        let visited = VisitedSet::seeded(&jugs(0, 0));

        let valid = filter_successors(successors, &visited);

        assert_eq!(valid.len(), 2);
        assert_eq!(valid[0].state(), &jugs(5, 3));
        assert_eq!(valid[1].state(), &jugs(2, 3));
    }

    #[test]
    fn distinct_states_collapses_duplicates() {
        let a = SearchNode::root(jugs(0, 0)).extend(Move::Fill { to: 0 });
        let b = SearchNode::root(jugs(5, 3)).extend(Move::Empty { from: 1 });
        let c = SearchNode::root(jugs(0, 3)).extend(Move::Fill { to: 0 });

        let states = distinct_states(&[a, b, c]);

        assert_eq!(states.len(), 2);
        assert!(states.contains(&jugs(5, 0)));
        assert!(states.contains(&jugs(5, 3)));
    }

    #[test]
    fn visited_set_grows_monotonically() {
        let mut visited = VisitedSet::seeded(&jugs(0, 0));
        visited.extend([jugs(5, 0), jugs(0, 3)].into_iter().collect());
        visited.extend([jugs(5, 0)].into_iter().collect());

        assert_eq!(visited.len(), 3);
        assert!(visited.contains(&jugs(0, 0)));
    }

    #[test]
    fn first_per_state_keeps_earliest_path() {
        let first = SearchNode::root(jugs(0, 0)).extend(Move::Fill { to: 0 });
        let second = SearchNode::root(jugs(5, 3)).extend(Move::Empty { from: 0 });
        let duplicate = SearchNode::root(jugs(2, 0)).extend(Move::Fill { to: 0 });

        let kept = first_per_state(vec![first.clone(), second.clone(), duplicate]);

        assert_eq!(kept, vec![first, second]);
    }
}
