//! Errors raised when an intersection is assembled from raw parts.

use super::{Color, Slot};
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single broken rule found while checking raw intersection parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("active index {index} does not name a light")]
    ActiveOutOfRange { index: usize },

    #[error("light {slot} shows {color} but is not the active light")]
    InactiveNotRed { slot: Slot, color: Color },
}

/// Errors that can occur when building an intersection from raw parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntersectionError {
    #[error("invalid intersection: {}", describe(.violations))]
    Invalid { violations: Vec<Violation> },
}

impl IntersectionError {
    /// Every violation found, in slot order.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Invalid { violations } => violations,
        }
    }
}

impl From<NonEmptyVec<Violation>> for IntersectionError {
    fn from(violations: NonEmptyVec<Violation>) -> Self {
        Self::Invalid {
            violations: violations.iter().cloned().collect(),
        }
    }
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
