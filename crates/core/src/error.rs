use std::fmt;

use crate::types::MIN_BUCKETS;

/// Construction failures for [`crate::BucketCounter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketError {
    /// An initial age was negative or not below the bucket count.
    AgeOutOfRange { age: i64, buckets: usize },
    /// The bucket count cannot host the reset bucket.
    TooFewBuckets { buckets: usize },
}

impl BucketError {
    pub fn code(self) -> &'static str {
        match self {
            BucketError::AgeOutOfRange { .. } => "age_out_of_range",
            BucketError::TooFewBuckets { .. } => "too_few_buckets",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            BucketError::AgeOutOfRange { .. } => "initial age does not fit in any bucket",
            BucketError::TooFewBuckets { .. } => "bucket count too small for the respawn rule",
        }
    }
}

impl fmt::Display for BucketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BucketError::AgeOutOfRange { age, buckets } => write!(
                f,
                "{}: age {} (expected 0..{})",
                self.message(),
                age,
                buckets
            ),
            BucketError::TooFewBuckets { buckets } => write!(
                f,
                "{}: {} (minimum {})",
                self.message(),
                buckets,
                MIN_BUCKETS
            ),
        }
    }
}

impl std::error::Error for BucketError {}
