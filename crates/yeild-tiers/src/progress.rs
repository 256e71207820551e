//! Progress toward the next tier.
//!
//! Percent is the *minimum* of task progress and referral progress, since
//! both gates must open. 100% of the tasks with none of the referrals is 0%.

use serde::Serialize;

use crate::tier::Tier;

/// Progress toward the next tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    /// In `[0, 100]`
    pub percent: f64,
    pub tasks_to_next: u64,
    pub referrals_to_next: u64,
}

impl Progress {
    /// Highest tier reached.
    pub const COMPLETE: Progress = Progress {
        percent: 100.0,
        tasks_to_next: 0,
        referrals_to_next: 0,
    };
}

/// Compute progress toward `next`.
///
/// Only the next tier's thresholds matter; the current tier is accepted so
/// callers can pass a [`Resolution`](crate::Resolution) straight through.
pub fn progress(_current: &Tier, next: Option<&Tier>, tasks_completed: u64, referrals_count: u64) -> Progress {
    let Some(next) = next else {
        return Progress::COMPLETE;
    };

    let task_progress = axis_percent(tasks_completed, next.min_tasks);
    let referral_progress = axis_percent(referrals_count, next.min_referrals);

    Progress {
        percent: task_progress.min(referral_progress).clamp(0.0, 100.0),
        tasks_to_next: next.min_tasks.saturating_sub(tasks_completed),
        referrals_to_next: next.min_referrals.saturating_sub(referrals_count),
    }
}

/// `have / need * 100`, or 100 when nothing is needed.
fn axis_percent(have: u64, need: u64) -> f64 {
    if need == 0 {
        return 100.0;
    }
    have as f64 * 100.0 / need as f64
}
