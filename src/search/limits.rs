//! Caller-imposed search bounds.
//!
//! Every configured bound is checked before a level is expanded, and all
//! violated bounds are reported together. The state bound is checked once
//! more against the states a level would discover, before it is merged.

use crate::search::error::SearchError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A bound that stopped the search
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LimitViolation {
    #[error("Maximum depth ({max}) exceeded (next level: {current})")]
    DepthExceeded { max: usize, current: usize },

    #[error("Maximum visited states ({max}) exceeded (current: {current})")]
    StatesExceeded { max: usize, current: usize },

    #[error("Timeout ({timeout:?}) exceeded (elapsed: {elapsed:?})")]
    TimeoutExceeded {
        timeout: Duration,
        elapsed: Duration,
    },
}

/// Snapshot of a running search, taken before expanding a level.
#[derive(Clone, Debug)]
pub struct LimitContext {
    /// Depth the next expansion would produce
    pub depth: usize,
    pub states_visited: usize,
    pub started_at: DateTime<Utc>,
}

impl LimitContext {
    /// Elapsed time since the search started
    pub fn elapsed(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

/// Optional bounds on a search. The default is unbounded.
///
/// # Example
///
/// ```rust
/// use decant::search::SearchLimits;
/// use std::time::Duration;
///
/// let limits = SearchLimits::builder()
///     .max_depth(20)
///     .timeout(Duration::from_secs(5))
///     .build();
///
/// assert_eq!(limits.max_depth, Some(20));
/// assert!(SearchLimits::default().is_unbounded());
///
/// let from_config = SearchLimits::from_json(r#"{"max_states": 1000}"#).unwrap();
/// assert_eq!(from_config.max_states, Some(1000));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Longest move sequence the search will consider
    pub max_depth: Option<usize>,
    /// Most distinct states the search may discover, the initial one included
    pub max_states: Option<usize>,
    /// Wall-clock budget for the whole search
    pub timeout: Option<Duration>,
}

impl SearchLimits {
    pub fn builder() -> SearchLimitsBuilder {
        SearchLimitsBuilder::new()
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_depth.is_none() && self.max_states.is_none() && self.timeout.is_none()
    }

    /// Load limits from a JSON document. Missing fields stay unbounded.
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        serde_json::from_str(json).map_err(|e| SearchError::InvalidLimits(e.to_string()))
    }

    /// Check every configured bound, accumulating ALL violations.
    pub fn enforce(&self, context: &LimitContext) -> Validation<(), NonEmptyVec<LimitViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<LimitViolation>>> = Vec::new();

        if let Some(max) = self.max_depth {
            let check = if context.depth > max {
                Validation::fail(LimitViolation::DepthExceeded {
                    max,
                    current: context.depth,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        if let Some(max) = self.max_states {
            let check = if context.states_visited > max {
                Validation::fail(LimitViolation::StatesExceeded {
                    max,
                    current: context.states_visited,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        if let Some(timeout) = self.timeout {
            let elapsed = context.elapsed();
            let check = if elapsed > timeout {
                Validation::fail(LimitViolation::TimeoutExceeded { timeout, elapsed })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

/// Builder for [`SearchLimits`]
#[derive(Clone, Debug, Default)]
pub struct SearchLimitsBuilder {
    limits: SearchLimits,
}

impl SearchLimitsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the longest move sequence to explore
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.limits.max_depth = Some(depth);
        self
    }

    /// Set the most distinct states to discover
    pub fn max_states(mut self, states: usize) -> Self {
        self.limits.max_states = Some(states);
        self
    }

    /// Set timeout duration
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.limits.timeout = Some(duration);
        self
    }

    pub fn build(self) -> SearchLimits {
        self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(depth: usize, states_visited: usize, age_secs: i64) -> LimitContext {
        LimitContext {
            depth,
            states_visited,
            started_at: Utc::now() - chrono::Duration::seconds(age_secs),
        }
    }

    #[test]
    fn unbounded_limits_always_pass() {
        let limits = SearchLimits::unbounded();
        assert!(limits.is_unbounded());
        assert!(limits.enforce(&context(10_000, 10_000, 3_600)).is_success());
    }

    #[test]
    fn enforcement_accumulates_all_violations() {
        let limits = SearchLimits::builder()
            .max_depth(3)
            .max_states(10)
            .timeout(Duration::from_secs(1))
            .build();

        match limits.enforce(&context(4, 11, 5)) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, LimitViolation::DepthExceeded { max: 3, current: 4 })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, LimitViolation::StatesExceeded { max: 10, current: 11 })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, LimitViolation::TimeoutExceeded { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let limits = SearchLimits::builder().max_depth(3).max_states(10).build();
        assert!(limits.enforce(&context(3, 10, 0)).is_success());
    }

    #[test]
    fn timeout_enforcement() {
        let limits = SearchLimits::builder()
            .timeout(Duration::from_secs(60))
            .build();

        assert!(limits.enforce(&context(1, 1, 0)).is_success());
        assert!(limits.enforce(&context(1, 1, 120)).is_failure());
    }

    #[test]
    fn limits_load_from_json() {
        let limits =
            SearchLimits::from_json(r#"{"max_depth": 12, "timeout": {"secs": 2, "nanos": 0}}"#)
                .unwrap();

        assert_eq!(limits.max_depth, Some(12));
        assert_eq!(limits.max_states, None);
        assert_eq!(limits.timeout, Some(Duration::from_secs(2)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = SearchLimits::from_json(r#"{"max_depth": "deep"}"#);
        assert!(matches!(result, Err(SearchError::InvalidLimits(_))));
    }

    #[test]
    fn limits_roundtrip_through_json() {
        let limits = SearchLimits::builder().max_states(500).build();
        let json = serde_json::to_string(&limits).unwrap();
        assert_eq!(SearchLimits::from_json(&json).unwrap(), limits);
    }
}
