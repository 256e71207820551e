//! Exactly-once unlock notifications.
//!
//! The diff functions are pure; the caller owns the last task count it has
//! seen. [`UnlockTracker::observe`] reads the diff and advances that count in
//! one step, so a given transition produces a notification at most once.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::resolver::resolve;
use crate::table::TierTable;
use crate::tier::{FeatureId, TierLevel};
use crate::unlock::unlock_diff;

/// Celebration shown when new features become available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnlockNotification {
    pub level: TierLevel,
    pub tier_name: String,
    pub features: Vec<FeatureId>,
}

impl fmt::Display for UnlockNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You reached {}! Unlocked: ", self.tier_name)?;
        for (i, feature) in self.features.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", feature)?;
        }
        Ok(())
    }
}

/// Caller-side record of the last task count observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockTracker {
    last_seen_task_count: u64,
}

impl UnlockTracker {
    /// Start from a count already shown to the user.
    pub fn new(last_seen_task_count: u64) -> Self {
        Self { last_seen_task_count }
    }

    pub fn last_seen_task_count(&self) -> u64 {
        self.last_seen_task_count
    }

    /// Diff against the last seen count, then record `tasks_completed`.
    ///
    /// The stored count follows the observation in both directions.
    pub fn observe(&mut self, tasks_completed: u64, referrals_count: u64, table: &TierTable) -> Option<UnlockNotification> {
        let features = unlock_diff(tasks_completed, self.last_seen_task_count, referrals_count, table);
        self.last_seen_task_count = tasks_completed;

        if features.is_empty() {
            return None;
        }

        let tier = resolve(tasks_completed, referrals_count, table).current;
        tracing::info!(
            tier = %tier.level,
            count = features.len(),
            "Features unlocked"
        );

        Some(UnlockNotification {
            level: tier.level,
            tier_name: tier.name.clone(),
            features,
        })
    }
}
