//! Search nodes: a state paired with the moves that produced it.
//!
//! Nodes are immutable. Extending a node returns a new node with the move
//! appended, the same way a history records a transition.

use super::containers::Containers;
use super::moves::Move;
use super::transition::apply_move;
use serde::{Deserialize, Serialize};

/// A container collection together with the exact move path from the
/// initial state.
///
/// # Example
///
/// ```rust
/// use decant::core::{Container, Containers, Move, SearchNode};
///
/// let root = SearchNode::root(Containers::from(vec![Container::empty(3)]));
/// let child = root.extend(Move::Fill { to: 0 });
///
/// assert_eq!(child.depth(), 1);
/// assert_eq!(child.state().quantities(), vec![3]);
/// assert_eq!(root.depth(), 0); // Original unchanged
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchNode {
    state: Containers,
    moves: Vec<Move>,
}

impl SearchNode {
    /// Node for the initial state, with an empty move path.
    pub fn root(state: Containers) -> Self {
        Self {
            state,
            moves: Vec::new(),
        }
    }

    /// Apply `mv` and return the child node.
    ///
    /// This is a pure function - `self` is not modified.
    pub fn extend(&self, mv: Move) -> Self {
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(mv);
        Self {
            state: apply_move(&self.state, mv),
            moves,
        }
    }

    pub fn state(&self) -> &Containers {
        &self.state
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves from the initial state.
    pub fn depth(&self) -> usize {
        self.moves.len()
    }

    /// Split into state and move path.
    pub fn into_parts(self) -> (Containers, Vec<Move>) {
        (self.state, self.moves)
    }
}

/// Replay `moves` from `initial`, returning every intermediate state.
///
/// The result starts with `initial` and has `moves.len() + 1` entries.
pub fn replay(initial: &Containers, moves: &[Move]) -> Vec<Containers> {
    let mut path = Vec::with_capacity(moves.len() + 1);
    let mut current = initial.clone();
    for mv in moves {
        let next = apply_move(&current, *mv);
        path.push(std::mem::replace(&mut current, next));
    }
    path.push(current);
    path
}
