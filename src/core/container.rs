//! Single vessel model.
//!
//! A container is an immutable value: every transformation returns a new
//! container and leaves the original untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A vessel with a fixed capacity and a current fill level.
///
/// The invariant `current <= capacity` holds for every value of this type,
/// including values produced by deserialization.
///
/// # Example
///
/// ```rust
/// use decant::core::Container;
///
/// let jug = Container::empty(5);
/// let full = jug.fill();
///
/// assert_eq!(full.current(), 5);
/// assert_eq!(jug.current(), 0); // Original unchanged
/// assert_eq!(full.pour_quantity(7).current(), 0); // Clamped
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ContainerRepr")]
pub struct Container {
    capacity: u32,
    current: u32,
}

impl Container {
    /// Create a container, returning `None` if `current` exceeds `capacity`.
    pub fn new(capacity: u32, current: u32) -> Option<Self> {
        (current <= capacity).then_some(Self { capacity, current })
    }

    /// Create an empty container of the given capacity.
    pub const fn empty(capacity: u32) -> Self {
        Self {
            capacity,
            current: 0,
        }
    }

    /// Construct from already validated parts.
    pub(crate) fn from_validated(capacity: u32, current: u32) -> Self {
        debug_assert!(current <= capacity);
        Self { capacity, current }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// Space left before the container is full.
    pub fn remaining(&self) -> u32 {
        self.capacity - self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current == self.capacity
    }

    /// Drain the container completely.
    pub fn pour(&self) -> Self {
        Self {
            current: 0,
            ..*self
        }
    }

    /// Drain up to `quantity`, never going below zero.
    pub fn pour_quantity(&self, quantity: u32) -> Self {
        Self {
            current: self.current - self.current.min(quantity),
            ..*self
        }
    }

    /// Fill the container to its capacity.
    pub fn fill(&self) -> Self {
        Self {
            current: self.capacity,
            ..*self
        }
    }

    /// Add up to `quantity`, never exceeding capacity.
    pub fn fill_quantity(&self, quantity: u32) -> Self {
        Self {
            current: self.current + self.remaining().min(quantity),
            ..*self
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.capacity)
    }
}

/// Wire shape used to re-check the invariant on deserialization.
#[derive(Deserialize)]
struct ContainerRepr {
    capacity: u32,
    current: u32,
}

impl TryFrom<ContainerRepr> for Container {
    type Error = String;

    fn try_from(repr: ContainerRepr) -> Result<Self, Self::Error> {
        Container::new(repr.capacity, repr.current).ok_or_else(|| {
            format!(
                "container quantity {} exceeds capacity {}",
                repr.current, repr.capacity
            )
        })
    }
}
