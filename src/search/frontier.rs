//! Frontier expansion.

use crate::core::{available_moves, SearchNode};

/// Every child of `node`, one per available move, in catalog order.
pub fn expand(node: &SearchNode) -> Vec<SearchNode> {
    available_moves(node.state())
        .into_iter()
        .map(|mv| node.extend(mv))
        .collect()
}

/// Concatenate [`expand`] over the frontier, preserving frontier order.
pub fn find_successors(frontier: &[SearchNode]) -> Vec<SearchNode> {
    frontier.iter().flat_map(expand).collect()
}
