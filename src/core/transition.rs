//! Transition function: apply one move to a container collection.

use super::containers::Containers;
use super::moves::Move;

/// Apply `mv` to `containers`, returning the resulting collection.
///
/// Only the indices touched by the move differ from the input. A pour moves
/// `min(current[from], remaining[to])` units, and the same quantity is taken
/// from the source and added to the destination, so total volume is
/// conserved.
///
/// # Panics
///
/// Panics if the move refers to an index outside the collection. Moves
/// produced by [`available_moves`](super::available_moves) never do; use
/// [`try_apply_move`] for untrusted input.
///
/// # Example
///
/// ```rust
/// use decant::core::{apply_move, Container, Containers, Move};
///
/// let state = Containers::from(vec![
///     Container::new(5, 5).unwrap(),
///     Container::new(3, 1).unwrap(),
/// ]);
///
/// let next = apply_move(&state, Move::Pour { from: 0, to: 1 });
/// assert_eq!(next.quantities(), vec![3, 3]);
/// assert_eq!(next.total_volume(), state.total_volume());
/// ```
pub fn apply_move(containers: &Containers, mv: Move) -> Containers {
    match mv {
        Move::Empty { from } => containers.replace(from, containers[from].pour()),
        Move::Fill { to } => containers.replace(to, containers[to].fill()),
        Move::Pour { from, to } if from == to => {
            assert!(from < containers.len(), "pour index {from} out of range");
            containers.clone()
        }
        Move::Pour { from, to } => {
            let source = containers[from];
            let destination = containers[to];
            let quantity = source.current().min(destination.remaining());

            containers
                .replace(from, source.pour_quantity(quantity))
                .replace(to, destination.fill_quantity(quantity))
        }
    }
}

/// Apply `mv` if every index it touches exists, otherwise `None`.
///
/// A self-pour is accepted and leaves the collection unchanged.
pub fn try_apply_move(containers: &Containers, mv: Move) -> Option<Containers> {
    if mv.indices().all(|i| i < containers.len()) {
        Some(apply_move(containers, mv))
    } else {
        None
    }
}
