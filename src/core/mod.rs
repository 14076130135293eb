//! Core state machine types and logic.
//!
//! This module contains the pure functional core shared by every signal:
//! - State definitions via the `State` trait
//! - One-step progression via the `Advance` trait
//! - Immutable history tracking
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::{Advance, State};
