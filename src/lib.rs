//! Lanternfish (workspace facade crate).
//!
//! Re-exports the `core`, `input` and `types` crates under one name and adds the
//! driver-side pieces: environment configuration, report rendering and logging
//! setup.

pub use lanternfish_core as core;
pub use lanternfish_input as input;
pub use lanternfish_types as types;

pub mod config;
pub mod logging;
pub mod report;
