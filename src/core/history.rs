//! State transition history tracking.
//!
//! Provides immutable tracking of state machine transitions over time,
//! following functional programming principles. History is what makes
//! undo possible for a driver: every recorded transition keeps the value
//! it started from.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Record of a single state transition.
///
/// Transitions are immutable values representing a move from one state
/// to another at a specific point in time.
///
/// # Example
///
/// ```rust
/// use crossroads::core::StateTransition;
/// use crossroads::{Color, Light};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Light::default(),
///     to: Light::new(Color::Green),
///     timestamp: Utc::now(),
///     step: 1,
/// };
/// assert!(transition.to.is_green());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Ordinal of this transition since the driver was created or reset
    pub step: usize,
}

/// Ordered history of state transitions.
///
/// History is immutable - `record` and `pop` return a new history,
/// leaving the original untouched. An optional retention limit keeps
/// only the most recent transitions.
///
/// # Example
///
/// ```rust
/// use crossroads::core::{StateHistory, StateTransition};
/// use crossroads::{Color, Light};
/// use chrono::Utc;
///
/// let red = Light::default();
/// let green = Light::new(Color::Green);
/// let orange = Light::new(Color::Orange);
///
/// let history = StateHistory::new()
///     .record(StateTransition { from: red, to: green, timestamp: Utc::now(), step: 1 })
///     .record(StateTransition { from: green, to: orange, timestamp: Utc::now(), step: 2 });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // red -> green -> orange
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    #[serde(default)]
    limit: Option<NonZeroUsize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create a new empty history that retains at most `limit` transitions.
    ///
    /// ```rust
    /// use crossroads::core::{StateHistory, StateTransition};
    /// use crossroads::Light;
    /// use chrono::Utc;
    /// use std::num::NonZeroUsize;
    ///
    /// let limit = NonZeroUsize::new(2).unwrap();
    /// let mut history = StateHistory::with_limit(limit);
    /// let mut light = Light::default();
    /// for step in 1..=5 {
    ///     let next = light.advance();
    ///     history = history.record(StateTransition {
    ///         from: light,
    ///         to: next,
    ///         timestamp: Utc::now(),
    ///         step,
    ///     });
    ///     light = next;
    /// }
    /// assert_eq!(history.len(), 2);
    /// assert_eq!(history.transitions()[0].step, 4);
    /// ```
    pub fn with_limit(limit: NonZeroUsize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Retention limit, if any.
    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// When a retention limit is set, the oldest transitions are dropped
    /// so that at most `limit` remain.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = transitions.len().saturating_sub(limit.get());
            transitions.drain(..excess);
        }
        Self {
            transitions,
            limit: self.limit,
        }
    }

    /// Remove the most recent transition.
    ///
    /// Returns the shortened history together with the removed transition,
    /// or `None` if the history is empty. The original is not modified.
    pub fn pop(&self) -> Option<(Self, StateTransition<S>)> {
        let mut transitions = self.transitions.clone();
        let last = transitions.pop()?;
        Some((
            Self {
                transitions,
                limit: self.limit,
            },
            last,
        ))
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the first retained `from`
    /// state, then the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// All retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{Color, Light};

    fn transition(from: Color, to: Color, step: usize) -> StateTransition<Light> {
        StateTransition {
            from: Light::new(from),
            to: Light::new(to),
            timestamp: Utc::now(),
            step,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Light> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
        assert!(history.limit().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(transition(Color::Red, Color::Green, 1));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(Color::Red, Color::Green, 1))
            .record(transition(Color::Green, Color::Orange, 2));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &Light::new(Color::Red));
        assert_eq!(path[1], &Light::new(Color::Green));
        assert_eq!(path[2], &Light::new(Color::Orange));
    }

    #[test]
    fn pop_returns_last_transition_and_keeps_original() {
        let history = StateHistory::new()
            .record(transition(Color::Red, Color::Green, 1))
            .record(transition(Color::Green, Color::Orange, 2));

        let (shorter, popped) = history.pop().unwrap();

        assert_eq!(popped.step, 2);
        assert_eq!(popped.from, Light::new(Color::Green));
        assert_eq!(shorter.len(), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn pop_on_empty_history_is_none() {
        let history: StateHistory<Light> = StateHistory::new();
        assert!(history.pop().is_none());
    }

    #[test]
    fn limit_drops_oldest_transitions() {
        let limit = NonZeroUsize::new(2).unwrap();
        let history = StateHistory::with_limit(limit)
            .record(transition(Color::Red, Color::Green, 1))
            .record(transition(Color::Green, Color::Orange, 2))
            .record(transition(Color::Orange, Color::Red, 3));

        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions()[0].step, 2);
        assert_eq!(history.last().unwrap().step, 3);
        assert_eq!(history.get_path()[0], &Light::new(Color::Green));
    }

    #[test]
    fn limit_survives_pop() {
        let limit = NonZeroUsize::new(3).unwrap();
        let history = StateHistory::with_limit(limit).record(transition(Color::Red, Color::Green, 1));
        let (shorter, _) = history.pop().unwrap();

        assert_eq!(shorter.limit(), Some(limit));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(transition(Color::Red, Color::Green, 1));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition(Color::Red, Color::Green, 1));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Light> = serde_json::from_str(&json).unwrap();

        assert_eq!(history.len(), deserialized.len());
        assert_eq!(deserialized.last().unwrap().to, Light::new(Color::Green));
    }
}
