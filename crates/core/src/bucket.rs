//! Bucket counter module - population histogram by days-to-spawn
//!
//! Bucket `i` holds the number of entities that will spawn in `i` ticks.
//! A tick rotates the histogram left by one: every entity moves one bucket
//! closer to zero and bucket 0 wraps around to the top, where it stands for the
//! newborns. The parents that just spawned are then added back two buckets
//! below the top ([`RESPAWN_GAP`]).
//!
//! Storage is a boxed slice sized once at construction, so ticking never
//! allocates.
//!
//! # Overflow bound
//!
//! Totals are `u64`. In the reference domain (9 buckets) the population grows by
//! a factor of roughly 1.09 per tick, so a few hundred initial entities stay
//! below `u64::MAX` for about 400 ticks. The reference runs stop at 256. Running
//! past that bound is a caller error; `total` does not guard it.

use crate::error::BucketError;
use crate::rotate::rotate_left;
use crate::types::{reset_index, RotationStrategy, BUCKETS, RESPAWN_GAP};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCounter {
    counts: Box<[u64]>,
    /// Index parents re-enter at after spawning
    reset: usize,
    /// Ticks applied since construction
    day: u32,
}

impl BucketCounter {
    /// Build a counter from raw ages, one entity per age.
    ///
    /// Ages may be any integer type, signed or unsigned. Fails if `buckets` is
    /// below [`crate::types::MIN_BUCKETS`] or if any age is negative or
    /// `>= buckets`; an age too large for `i64` is reported as `i64::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanternfish_core::{BucketCounter, RotationStrategy};
    ///
    /// let mut school = BucketCounter::new(9, [3, 4, 3, 1, 2]).unwrap();
    /// school.advance(18, RotationStrategy::ShiftCopy);
    /// assert_eq!(school.total(), 26);
    /// ```
    pub fn new<I>(buckets: usize, ages: I) -> Result<Self, BucketError>
    where
        I: IntoIterator,
        I::Item: TryInto<i64>,
    {
        let reset = reset_index(buckets).ok_or(BucketError::TooFewBuckets { buckets })?;
        let mut counts = vec![0u64; buckets].into_boxed_slice();

        for age in ages {
            let age = age.try_into().unwrap_or(i64::MAX);
            let slot = usize::try_from(age)
                .ok()
                .and_then(|i| counts.get_mut(i))
                .ok_or(BucketError::AgeOutOfRange { age, buckets })?;
            *slot += 1;
        }

        Ok(Self {
            counts,
            reset,
            day: 0,
        })
    }

    /// Build a counter with the reference bucket count.
    pub fn with_reference_buckets<I>(ages: I) -> Result<Self, BucketError>
    where
        I: IntoIterator,
        I::Item: TryInto<i64>,
    {
        Self::new(BUCKETS, ages)
    }

    /// Build a counter from an existing histogram; its length is the bucket count.
    pub fn from_histogram(counts: &[u64]) -> Result<Self, BucketError> {
        let buckets = counts.len();
        let reset = reset_index(buckets).ok_or(BucketError::TooFewBuckets { buckets })?;
        Ok(Self {
            counts: counts.into(),
            reset,
            day: 0,
        })
    }

    /// Advance one tick.
    ///
    /// Postcondition: `total()` grows by exactly the value `counts()[0]` held
    /// before the call.
    #[inline]
    pub fn tick(&mut self, strategy: RotationStrategy) {
        let spawning = self.counts[0];
        rotate_left(strategy, &mut self.counts[..]);
        self.counts[self.reset] += spawning;
        self.day += 1;
    }

    /// Advance `days` ticks with the same strategy.
    pub fn advance(&mut self, days: u32, strategy: RotationStrategy) {
        for _ in 0..days {
            self.tick(strategy);
        }
    }

    /// Total population across all buckets.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn buckets(&self) -> usize {
        self.counts.len()
    }

    /// Index parents re-enter at; always `buckets() - 1 - RESPAWN_GAP`.
    pub fn reset_index(&self) -> usize {
        debug_assert_eq!(self.reset, self.counts.len() - 1 - RESPAWN_GAP);
        self.reset
    }

    /// Ticks applied since construction
    pub fn day(&self) -> u32 {
        self.day
    }
}
