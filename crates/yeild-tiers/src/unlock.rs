//! Unlock diff: what did completing more tasks just unlock?
//!
//! Referral count is held fixed across both resolutions; only the task axis
//! is diffed.

use crate::resolver::resolve;
use crate::table::TierTable;
use crate::tier::FeatureId;

/// Features present at the tier for `tasks_completed` but absent at the tier
/// for `previous_tasks_completed`, in the current tier's order.
///
/// Empty when there was no forward progress.
pub fn unlock_diff(
    tasks_completed: u64,
    previous_tasks_completed: u64,
    referrals_count: u64,
    table: &TierTable,
) -> Vec<FeatureId> {
    let current = resolve(tasks_completed, referrals_count, table).current;
    let previous = resolve(previous_tasks_completed, referrals_count, table).current;

    if std::ptr::eq(current, previous) {
        return Vec::new();
    }

    current
        .features
        .iter()
        .filter(|feature| !previous.features.contains(feature))
        .cloned()
        .collect()
}
