//! Builder API for configuring controllers.
//!
//! There are no configuration files or environment variables: a driver
//! is configured in code, and invalid settings are reported by `build`.

pub mod controller;
pub mod error;

pub use controller::ControllerBuilder;
pub use error::BuildError;
