//! Builder for constructing controllers.

use crate::builder::error::BuildError;
use crate::core::{Advance, StateHistory};
use crate::driver::Controller;
use std::num::NonZeroUsize;

/// Builder for configuring a `Controller` with a fluent API.
///
/// Both settings are optional: the initial value defaults to
/// `M::default()` and history is unbounded unless limited.
///
/// # Example
///
/// ```rust
/// use crossroads::{ControllerBuilder, Intersection};
///
/// let mut controller = ControllerBuilder::<Intersection>::new()
///     .history_limit(8)
///     .build()
///     .unwrap();
///
/// for _ in 0..20 {
///     controller.advance();
/// }
/// assert_eq!(controller.history().len(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct ControllerBuilder<M: Advance> {
    initial: Option<M>,
    history_limit: Option<usize>,
}

impl<M: Advance> ControllerBuilder<M> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            history_limit: None,
        }
    }

    /// Set the starting value (optional, defaults to `M::default()`).
    pub fn initial(mut self, state: M) -> Self {
        self.initial = Some(state);
        self
    }

    /// Keep only the most recent `limit` transitions (optional).
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the controller.
    /// Returns an error if a setting is invalid.
    pub fn build(self) -> Result<Controller<M>, BuildError> {
        let history = match self.history_limit {
            Some(limit) => {
                let limit = NonZeroUsize::new(limit).ok_or(BuildError::ZeroHistoryLimit)?;
                StateHistory::with_limit(limit)
            }
            None => StateHistory::new(),
        };

        let initial = self.initial.unwrap_or_default();
        Ok(Controller::with_history(initial, history))
    }
}

impl<M: Advance> Default for ControllerBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}
