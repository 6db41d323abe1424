//! Simulation configuration.
//!
//! Values come from environment variables, falling back to the reference
//! configuration when a variable is unset or unparsable:
//!
//! - `LANTERNFISH_DAYS`: last simulated day (default 256)
//! - `LANTERNFISH_CHECKPOINTS`: comma-separated days to report (default "80")
//! - `LANTERNFISH_BUCKETS`: number of age buckets (default 9)
//! - `LANTERNFISH_STRATEGY`: `shift-copy` or `three-reversal` (default `shift-copy`)
//!
//! Command-line flags override these in the binary.

use crate::types::{RotationStrategy, BUCKETS, FINAL_DAY, FIRST_CHECKPOINT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub days: u32,
    pub checkpoints: Vec<u32>,
    pub buckets: usize,
    pub strategy: RotationStrategy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: FINAL_DAY,
            checkpoints: vec![FIRST_CHECKPOINT],
            buckets: BUCKETS,
            strategy: RotationStrategy::default(),
        }
    }
}

impl SimConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let days = lookup("LANTERNFISH_DAYS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.days);

        let checkpoints = lookup("LANTERNFISH_CHECKPOINTS")
            .and_then(|s| parse_days(&s))
            .unwrap_or(defaults.checkpoints);

        let buckets = lookup("LANTERNFISH_BUCKETS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.buckets);

        let strategy = lookup("LANTERNFISH_STRATEGY")
            .and_then(|s| RotationStrategy::from_str(&s))
            .unwrap_or(defaults.strategy);

        Self {
            days,
            checkpoints,
            buckets,
            strategy,
        }
    }
}

/// Parse a comma-separated list of days; `None` if any entry is invalid.
/// A blank list is valid and empty.
fn parse_days(s: &str) -> Option<Vec<u32>> {
    s.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|f| f.parse().ok())
        .collect()
}
