//! Traffic signals: a single three-color light and a four-way intersection.
//!
//! Splitting the two keeps "which color comes next" (the light's concern)
//! apart from "whose turn is it" (the intersection's concern).

mod color;
mod error;
mod intersection;
mod light;
mod slot;

pub use color::Color;
pub use error::{IntersectionError, Violation};
pub use intersection::Intersection;
pub use light::Light;
pub use slot::{Slot, SlotOutOfRange};

/// Number of lights at an intersection.
pub const LIGHT_COUNT: usize = 4;
