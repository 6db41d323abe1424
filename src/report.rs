//! Run reports, as plain text or JSON.

use serde::Serialize;

use crate::core::{BucketError, Checkpoint};
use crate::input::ParseAgesError;
use crate::types::RotationStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckpointEntry {
    pub day: u32,
    pub total: u64,
}

impl From<Checkpoint> for CheckpointEntry {
    fn from(value: Checkpoint) -> Self {
        Self {
            day: value.day,
            total: value.total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub strategy: &'static str,
    pub buckets: usize,
    /// Population before the first tick
    pub initial: u64,
    pub checkpoints: Vec<CheckpointEntry>,
}

impl RunReport {
    pub fn new(
        strategy: RotationStrategy,
        buckets: usize,
        initial: u64,
        checkpoints: &[Checkpoint],
    ) -> Self {
        Self {
            strategy: strategy.as_str(),
            buckets,
            initial,
            checkpoints: checkpoints.iter().copied().map(CheckpointEntry::from).collect(),
        }
    }

    /// One total per line, in day order.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for c in &self.checkpoints {
            out.push_str(&c.total.to_string());
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Failure report printed instead of [`RunReport`] in JSON mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub code: &'static str,
    pub message: String,
}

impl ErrorReport {
    /// Take the code from the first typed error in the chain; `"error"` otherwise.
    pub fn from_error(err: &anyhow::Error) -> Self {
        let code = err
            .chain()
            .find_map(|e| {
                e.downcast_ref::<BucketError>()
                    .map(|b| b.code())
                    .or_else(|| e.downcast_ref::<ParseAgesError>().map(|p| p.code()))
            })
            .unwrap_or("error");
        Self {
            code,
            message: format!("{:#}", err),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
