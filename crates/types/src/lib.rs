//! Core types module - shared constants and the rotation strategy tag
//!
//! This module defines the fundamental types used throughout the simulator.
//! All types are pure data with no external dependencies, making them usable
//! from the core simulation, the input parser and the command-line driver.
//!
//! # Buckets
//!
//! A population is tracked as a histogram of "days until next spawn":
//!
//! - **Buckets**: 9 slots (indexed 0-8) in the reference domain
//! - **Spawn bucket**: index 0, entities about to reproduce
//! - **Newborn bucket**: index `buckets - 1` (8), reached by wrapping around
//! - **Reset bucket**: index `buckets - 1 - RESPAWN_GAP` (6), where parents re-enter
//!
//! # Reference Checkpoints
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIRST_CHECKPOINT` | 80 | First reported day |
//! | `FINAL_DAY` | 256 | Last simulated day |
//!
//! # Examples
//!
//! ```
//! use lanternfish_types::{RotationStrategy, BUCKETS, RESPAWN_GAP};
//!
//! let strategy = RotationStrategy::from_str("three-reversal").unwrap();
//! assert_eq!(strategy, RotationStrategy::ThreeReversal);
//! assert_eq!(strategy.as_str(), "three-reversal");
//!
//! assert_eq!(BUCKETS - 1 - RESPAWN_GAP, 6);
//! ```

/// Number of age buckets in the reference domain (ages 0-8)
pub const BUCKETS: usize = 9;

/// Extra ticks a newborn waits before its first spawn, compared with a parent
/// that has just spawned.
pub const RESPAWN_GAP: usize = 2;

/// Smallest bucket count for which the reset index resolves.
pub const MIN_BUCKETS: usize = RESPAWN_GAP + 1;

/// First reported checkpoint (day 80)
pub const FIRST_CHECKPOINT: u32 = 80;

/// Last simulated day (day 256)
pub const FINAL_DAY: u32 = 256;

/// Length of the permutation used to benchmark rotation strategies.
pub const BENCH_SAMPLE_LEN: usize = 1000;

/// Index of the bucket where spawning parents re-enter after a tick.
///
/// Returns `None` when `buckets` is too small for the rule to apply.
///
/// # Examples
///
/// ```
/// use lanternfish_types::reset_index;
///
/// assert_eq!(reset_index(9), Some(6));
/// assert_eq!(reset_index(3), Some(0));
/// assert_eq!(reset_index(2), None);
/// ```
pub const fn reset_index(buckets: usize) -> Option<usize> {
    if buckets < MIN_BUCKETS {
        None
    } else {
        Some(buckets - 1 - RESPAWN_GAP)
    }
}


/// In-place "rotate left by one" implementations
///
/// Both variants produce the same permutation; they differ only in cost:
/// - **ShiftCopy**: save the head, one bulk move of `n - 1` elements, one write
/// - **ThreeReversal**: reverse `[0, 1)`, reverse `[1, n)`, reverse `[0, n)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationStrategy {
    #[default]
    ShiftCopy,
    ThreeReversal,
}

impl RotationStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [RotationStrategy; 2] =
        [RotationStrategy::ShiftCopy, RotationStrategy::ThreeReversal];

    /// Parse strategy from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use lanternfish_types::RotationStrategy;
    ///
    /// assert_eq!(RotationStrategy::from_str("shift-copy"), Some(RotationStrategy::ShiftCopy));
    /// assert_eq!(RotationStrategy::from_str("threereversal"), Some(RotationStrategy::ThreeReversal));
    /// assert_eq!(RotationStrategy::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "shift-copy" | "shiftcopy" | "shift_copy" | "copy" => Some(RotationStrategy::ShiftCopy),
            "three-reversal" | "threereversal" | "three_reversal" | "reversal" => {
                Some(RotationStrategy::ThreeReversal)
            }
            _ => None,
        }
    }

    /// Convert to kebab-case string
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationStrategy::ShiftCopy => "shift-copy",
            RotationStrategy::ThreeReversal => "three-reversal",
        }
    }
}
