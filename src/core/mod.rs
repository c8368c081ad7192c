//! Core puzzle model and move semantics.
//!
//! This module contains the pure functional core of the solver:
//! - Containers and ordered container collections
//! - The closed move vocabulary and the move catalog
//! - The transition function and immutable search nodes
//!
//! Every operation here returns a fresh value; nothing is mutated in place.

mod catalog;
mod container;
mod containers;
mod moves;
mod node;
mod transition;

pub use catalog::available_moves;
pub use container::Container;
pub use containers::Containers;
pub use moves::Move;
pub use node::{replay, SearchNode};
pub use transition::{apply_move, try_apply_move};
