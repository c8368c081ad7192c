//! Ordered collection of containers forming one puzzle state.

use super::container::Container;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Ordered sequence of containers, indexed positionally.
///
/// Equality and hashing are structural over every `(capacity, current)`
/// pair, so two collections reached by different move paths compare equal
/// when their contents match. This is what the visited set keys on.
///
/// # Example
///
/// ```rust
/// use decant::core::{Container, Containers};
///
/// let state = Containers::from(vec![Container::empty(5), Container::empty(3)]);
/// let next = state.replace(0, state[0].fill());
///
/// assert_eq!(next.quantities(), vec![5, 0]);
/// assert_eq!(state.quantities(), vec![0, 0]); // Original unchanged
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Containers {
    containers: Vec<Container>,
}

impl Containers {
    pub fn new(containers: Vec<Container>) -> Self {
        Self { containers }
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Container> {
        self.containers.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Container> {
        self.containers.iter()
    }

    pub fn as_slice(&self) -> &[Container] {
        &self.containers
    }

    /// Return a new collection with the container at `index` replaced.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace(&self, index: usize, container: Container) -> Self {
        let mut containers = self.containers.clone();
        containers[index] = container;
        Self { containers }
    }

    /// Current fill level of every container, in order.
    pub fn quantities(&self) -> Vec<u32> {
        self.containers.iter().map(Container::current).collect()
    }

    /// Capacity of every container, in order.
    pub fn capacities(&self) -> Vec<u32> {
        self.containers.iter().map(Container::capacity).collect()
    }

    /// Total liquid across all containers.
    pub fn total_volume(&self) -> u64 {
        self.containers.iter().map(|c| u64::from(c.current())).sum()
    }
}

impl From<Vec<Container>> for Containers {
    fn from(containers: Vec<Container>) -> Self {
        Self::new(containers)
    }
}

impl FromIterator<Container> for Containers {
    fn from_iter<I: IntoIterator<Item = Container>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Containers {
    type Output = Container;

    fn index(&self, index: usize) -> &Self::Output {
        &self.containers[index]
    }
}

impl<'a> IntoIterator for &'a Containers {
    type Item = &'a Container;
    type IntoIter = std::slice::Iter<'a, Container>;

    fn into_iter(self) -> Self::IntoIter {
        self.containers.iter()
    }
}

impl fmt::Display for Containers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, container) in self.containers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{container}")?;
        }
        write!(f, "]")
    }
}
