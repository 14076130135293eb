//! The imperative shell around the pure signal core.
//!
//! A driver (a UI button handler, a test harness) owns a `Controller`
//! and calls `advance` once per user action. Everything the controller
//! does to its signal goes through the pure `Advance` trait; the
//! controller only swaps values and keeps their history.

mod controller;

pub use controller::Controller;
