//! Build errors for the controller builder.

use thiserror::Error;

/// Errors that can occur when building a controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("History limit must be at least 1. Omit .history_limit() for unbounded history")]
    ZeroHistoryLimit,
}
