//! Shared test fixtures for Groundwork crates.
//!
//! - [`scenarios`] - Areas with known minimum effort
//! - [`rejections`] - Malformed areas and the error kind each must raise
//! - [`generate`] - Seeded random areas and an independent effort oracle
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! groundwork-test = { workspace = true }
//! ```

pub mod generate;
pub mod rejections;
pub mod scenarios;

pub use generate::{oracle_minimum, random_area};
pub use rejections::{invalid_type_cases, rejections, Rejection};
pub use scenarios::{Scenario, SCENARIOS};
