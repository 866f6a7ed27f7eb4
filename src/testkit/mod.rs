//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`clock`] — `ManualClock`, a settable [`Clock`](crate::port::Clock).
//! - [`record`] — Builders for conversions and history records.
//! - [`config`] — Canonical test configurations.

pub mod clock;
pub mod config;
pub mod record;
