//! Move generation.
//!
//! Only moves that change the state are emitted: emptying an empty
//! container, filling a full one, and pouring a container into itself are
//! skipped. No state reachable through a useful move is lost by this.

use super::containers::Containers;
use super::moves::Move;

/// Enumerate every non-trivial move available from `containers`.
///
/// Order is deterministic: all empties by index, then all fills by index,
/// then all pours in lexicographic `(from, to)` order.
///
/// # Example
///
/// ```rust
/// use decant::core::{available_moves, Container, Containers, Move};
///
/// let state = Containers::from(vec![
///     Container::new(5, 5).unwrap(),
///     Container::empty(3),
/// ]);
///
/// assert_eq!(
///     available_moves(&state),
///     vec![
///         Move::Empty { from: 0 },
///         Move::Fill { to: 1 },
///         Move::Pour { from: 0, to: 1 },
///     ]
/// );
/// ```
pub fn available_moves(containers: &Containers) -> Vec<Move> {
    let non_empty: Vec<usize> = containers
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_empty())
        .map(|(i, _)| i)
        .collect();
    let non_full: Vec<usize> = containers
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_full())
        .map(|(i, _)| i)
        .collect();

    let empties = non_empty.iter().map(|&from| Move::Empty { from });
    let fills = non_full.iter().map(|&to| Move::Fill { to });
    let pours = non_empty.iter().flat_map(|&from| {
        non_full
            .iter()
            .filter(move |&&to| to != from)
            .map(move |&to| Move::Pour { from, to })
    });

    empties.chain(fills).chain(pours).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Container;

    fn state(pairs: &[(u32, u32)]) -> Containers {
        pairs
            .iter()
            .map(|&(capacity, current)| Container::new(capacity, current).unwrap())
            .collect()
    }

    #[test]
    fn all_empty_only_offers_fills() {
        let moves = available_moves(&state(&[(5, 0), (3, 0)]));
        assert_eq!(moves, vec![Move::Fill { to: 0 }, Move::Fill { to: 1 }]);
    }

    #[test]
    fn all_full_only_offers_empties() {
        let moves = available_moves(&state(&[(5, 5), (3, 3)]));
        assert_eq!(moves, vec![Move::Empty { from: 0 }, Move::Empty { from: 1 }]);
    }

    #[test]
    fn partial_containers_offer_every_kind_in_order() {
        let moves = available_moves(&state(&[(5, 2), (3, 1)]));
        assert_eq!(
            moves,
            vec![
                Move::Empty { from: 0 },
                Move::Empty { from: 1 },
                Move::Fill { to: 0 },
                Move::Fill { to: 1 },
                Move::Pour { from: 0, to: 1 },
                Move::Pour { from: 1, to: 0 },
            ]
        );
    }

    #[test]
    fn pours_are_lexicographic_and_skip_self() {
        let moves = available_moves(&state(&[(4, 1), (4, 2), (4, 3)]));
        let pours: Vec<Move> = moves
            .into_iter()
            .filter(|mv| matches!(mv, Move::Pour { .. }))
            .collect();

        assert_eq!(
            pours,
            vec![
                Move::Pour { from: 0, to: 1 },
                Move::Pour { from: 0, to: 2 },
                Move::Pour { from: 1, to: 0 },
                Move::Pour { from: 1, to: 2 },
                Move::Pour { from: 2, to: 0 },
                Move::Pour { from: 2, to: 1 },
            ]
        );
    }

    #[test]
    fn zero_capacity_container_offers_nothing() {
        assert!(available_moves(&state(&[(0, 0)])).is_empty());
        assert!(available_moves(&Containers::default()).is_empty());
    }
}
