//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`HistoryStore`] - Bounded, partitioned conversion history
//! - [`Clock`] - Creation timestamps for history records

mod clock;
mod store;

pub use clock::{Clock, SystemClock};
pub use store::HistoryStore;
