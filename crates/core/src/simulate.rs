//! Checkpointed simulation runs.

use crate::bucket::BucketCounter;
use crate::types::{RotationStrategy, FINAL_DAY, FIRST_CHECKPOINT};

/// Population total observed after `day` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checkpoint {
    pub day: u32,
    pub total: u64,
}

/// Tick `counter` until it has been advanced `days` times, recording the total
/// whenever its day count matches one of `checkpoints`.
///
/// Checkpoints are reported in day order, duplicates collapse, and those past
/// `days` (or already behind the counter) are dropped. The final day is always
/// reported. A counter already past `days` is not ticked; the report then holds
/// a single entry for its current day.
pub fn run_checkpoints(
    counter: &mut BucketCounter,
    strategy: RotationStrategy,
    days: u32,
    checkpoints: &[u32],
) -> Vec<Checkpoint> {
    let mut wanted: Vec<u32> = checkpoints
        .iter()
        .copied()
        .filter(|&d| d >= counter.day() && d <= days)
        .chain(std::iter::once(days.max(counter.day())))
        .collect();
    wanted.sort_unstable();
    wanted.dedup();

    let mut out = Vec::with_capacity(wanted.len());
    for day in wanted {
        counter.advance(day - counter.day(), strategy);
        out.push(Checkpoint {
            day,
            total: counter.total(),
        });
    }
    out
}

/// The two reference answers: totals after day 80 and after day 256.
///
/// Returns `None` if `counter` has already been advanced past day 80.
pub fn reference_totals(
    counter: &mut BucketCounter,
    strategy: RotationStrategy,
) -> Option<(u64, u64)> {
    if counter.day() > FIRST_CHECKPOINT {
        return None;
    }
    let report = run_checkpoints(counter, strategy, FINAL_DAY, &[FIRST_CHECKPOINT]);
    let at = |day: u32| report.iter().find(|c| c.day == day).map(|c| c.total);
    Some((at(FIRST_CHECKPOINT)?, at(FINAL_DAY)?))
}
