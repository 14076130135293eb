//! Controller that steps a signal and remembers where it has been.

use crate::core::{Advance, State, StateHistory, StateTransition};
use chrono::Utc;
use tracing::{debug, info};

/// Drives a signal one user action at a time.
///
/// The controller is the only mutable piece of the crate: it owns the
/// current value and swaps in the result of each pure `advance`. Every
/// step is recorded, so it can be undone.
///
/// # Example
///
/// ```rust
/// use crossroads::{Color, Controller, Intersection};
///
/// let mut controller = Controller::new(Intersection::reset());
/// controller.advance();
/// controller.advance();
/// assert_eq!(controller.current().active_light().color(), Color::Orange);
///
/// controller.undo();
/// assert_eq!(controller.current().active_light().color(), Color::Green);
///
/// controller.reset();
/// assert_eq!(controller.current(), &Intersection::reset());
/// ```
#[derive(Clone, Debug)]
pub struct Controller<M: Advance> {
    current: M,
    history: StateHistory<M>,
    steps: usize,
}

impl<M: Advance> Controller<M> {
    /// Create a controller at `initial` with unbounded history.
    pub fn new(initial: M) -> Self {
        Self::with_history(initial, StateHistory::new())
    }

    pub(crate) fn with_history(initial: M, history: StateHistory<M>) -> Self {
        Self {
            current: initial,
            history,
            steps: 0,
        }
    }

    /// Get current value (pure)
    pub fn current(&self) -> &M {
        &self.current
    }

    /// Get recorded history (pure)
    pub fn history(&self) -> &StateHistory<M> {
        &self.history
    }

    /// Number of steps taken since creation or the last reset, net of undos.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Advance one step and return the new current value.
    pub fn advance(&mut self) -> &M {
        let next = self.current.advance();
        self.steps += 1;

        debug!(
            step = self.steps,
            from = self.current.name(),
            to = next.name(),
            state = ?next,
            "advanced"
        );

        let record = StateTransition {
            from: self.current.clone(),
            to: next.clone(),
            timestamp: Utc::now(),
            step: self.steps,
        };
        self.history = self.history.record(record);
        self.current = next;
        &self.current
    }

    /// Return to the initial value and forget the history.
    pub fn reset(&mut self) {
        info!(steps = self.steps, "reset");
        self.current = M::default();
        self.history = match self.history.limit() {
            Some(limit) => StateHistory::with_limit(limit),
            None => StateHistory::new(),
        };
        self.steps = 0;
    }

    /// Step back to the value before the last recorded advance.
    ///
    /// Returns `None`, leaving the controller unchanged, when there is
    /// nothing left to undo.
    pub fn undo(&mut self) -> Option<&M> {
        let (history, last) = self.history.pop()?;
        info!(step = last.step, to = last.from.name(), "undo");
        self.history = history;
        self.current = last.from;
        self.steps = last.step.saturating_sub(1);
        Some(&self.current)
    }
}

impl<M: Advance> Default for Controller<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}
