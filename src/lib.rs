//! Crossroads: a pure functional traffic-light state machine
//!
//! Crossroads follows the "pure core, imperative shell" philosophy. The
//! signals themselves are immutable values moved forward by pure
//! functions; a small controller is the only place that holds mutable
//! state, on behalf of whatever drives it (a UI button, a test).
//!
//! # Core Concepts
//!
//! - **Light**: a single signal cycling red, green, orange, red, ...
//! - **Intersection**: four lights, one of them active; activity is handed
//!   to the next light exactly when the active one goes from orange to red
//! - **Controller**: steps a signal on demand and records its history,
//!   which makes undo possible
//!
//! # Example
//!
//! ```rust
//! use crossroads::{Color, Intersection, Slot};
//!
//! let mut intersection = Intersection::reset();
//! for _ in 0..3 {
//!     intersection = intersection.advance();
//! }
//! assert_eq!(intersection.active(), Slot::ALL[1]);
//! assert_eq!(intersection.colors(), [Color::Red; 4]);
//!
//! // Twelve steps bring an intersection back to where it started.
//! let full_cycle = (0..12).fold(Intersection::reset(), |i, _| i.advance());
//! assert_eq!(full_cycle, Intersection::reset());
//! ```

pub mod builder;
pub mod core;
pub mod driver;
pub mod signal;

// Re-export commonly used types
pub use builder::{BuildError, ControllerBuilder};
pub use crate::core::{Advance, State, StateHistory, StateTransition};
pub use driver::Controller;
pub use signal::{Color, Intersection, IntersectionError, Light, Slot, Violation, LIGHT_COUNT};
