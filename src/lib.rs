//! Unitconv - exact decimal unit and currency conversion with bounded history.
//!
//! # Architecture
//!
//! - **`domain`** - Decimal arithmetic, the unit registry, the conversion
//!   engine, currency rates, and the two-field conversion session
//! - **`port`** - Traits for the history store and the clock
//! - **`adapter`** - SQLite and in-memory history stores, the CLI
//! - **`application`** - The history service: record, list, clear, restore
//! - **`infrastructure`** - Configuration, logging, and wiring
//!
//! # Example
//!
//! ```
//! use unitconv::domain::{engine, Category};
//!
//! let category = Category::Temperature;
//! let from = category.unit("celsius").unwrap();
//! let to = category.unit("fahrenheit").unwrap();
//! assert_eq!(engine::convert("100", from, to, category).unwrap(), "212");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
