//! Move vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An atomic state transition between two container collections.
///
/// The vocabulary is closed: callers dispatch with `match`.
///
/// # Example
///
/// ```rust
/// use decant::core::Move;
///
/// let mv = Move::Pour { from: 1, to: 0 };
/// assert_eq!(mv.name(), "pour");
/// assert_eq!(mv.to_string(), "pour(1 -> 0)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    /// Drain the container at `from` to zero
    Empty { from: usize },
    /// Fill the container at `to` to its capacity
    Fill { to: usize },
    /// Transfer from `from` into `to` until `from` is empty or `to` is full
    Pour { from: usize, to: usize },
}

impl Move {
    /// Tag of this move, for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "empty",
            Self::Fill { .. } => "fill",
            Self::Pour { .. } => "pour",
        }
    }

    /// Source index, if the move takes liquid out of a container.
    pub fn source(&self) -> Option<usize> {
        match *self {
            Self::Empty { from } | Self::Pour { from, .. } => Some(from),
            Self::Fill { .. } => None,
        }
    }

    /// Destination index, if the move adds liquid to a container.
    pub fn destination(&self) -> Option<usize> {
        match *self {
            Self::Fill { to } | Self::Pour { to, .. } => Some(to),
            Self::Empty { .. } => None,
        }
    }

    /// Every container index this move touches.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        self.source().into_iter().chain(self.destination())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { from } => write!(f, "empty({from})"),
            Self::Fill { to } => write!(f, "fill({to})"),
            Self::Pour { from, to } => write!(f, "pour({from} -> {to})"),
        }
    }
}
