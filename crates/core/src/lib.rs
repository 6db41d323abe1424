//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the population model and the rotation primitives it is
//! built on. It has **zero dependencies** on I/O, parsing, or logging, making it:
//!
//! - **Deterministic**: Same initial ages produce identical histories with either strategy
//! - **Testable**: Every rule is observable through `counts()` and `total()`
//! - **Fast**: Ticks and rotations are allocation-free
//!
//! # Module Structure
//!
//! - [`bucket`]: histogram of entities by days-to-spawn, advanced one tick at a time
//! - [`rotate`]: in-place rotate-left primitives (shift-copy and three-reversal)
//! - [`simulate`]: runs a counter to a final day, reporting totals at checkpoints
//! - [`rng`]: seeded LCG for reproducible benchmark payloads
//! - [`error`]: construction failures
//!
//! # Tick Rule
//!
//! 1. Remember `spawning = counts[0]`
//! 2. Rotate all buckets left by one; bucket 0 wraps to the top as newborns
//! 3. Add `spawning` to bucket `buckets - 1 - RESPAWN_GAP` (the parents)
//!
//! The population therefore grows by exactly `spawning` each tick.
//!
//! # Example
//!
//! ```
//! use lanternfish_core::{BucketCounter, RotationStrategy};
//!
//! let mut school = BucketCounter::new(9, [3, 4, 3, 1, 2]).unwrap();
//! school.advance(80, RotationStrategy::ThreeReversal);
//! assert_eq!(school.total(), 5934);
//! ```

pub mod bucket;
pub mod error;
pub mod rng;
pub mod rotate;
pub mod simulate;

pub use lanternfish_types as types;

// Re-export commonly used types for convenience
pub use bucket::BucketCounter;
pub use error::BucketError;
pub use rng::SimpleRng;
pub use rotate::{rotate_left, rotate_left_by_reversal, rotate_left_copy, rotate_left_reversal};
pub use simulate::{reference_totals, run_checkpoints, Checkpoint};
pub use types::RotationStrategy;
