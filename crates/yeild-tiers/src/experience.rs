//! Per-user tier evaluation.
//!
//! A [`UserProgressSnapshot`] goes in, a [`TierResolutionResult`] comes out.
//! The result is never a source of truth; recompute it whenever the counts
//! change.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::progress::progress;
use crate::table::TierTable;
use crate::tier::{FeatureId, Tier};
use crate::unlock::unlock_diff;

/// The three counts a tier evaluation depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserProgressSnapshot {
    pub tasks_completed: u64,
    /// Count seen at the caller's last check; only feeds the unlock diff.
    pub previous_tasks_completed: u64,
    pub referrals_count: u64,
}

impl UserProgressSnapshot {
    pub fn new(tasks_completed: u64, previous_tasks_completed: u64, referrals_count: u64) -> Self {
        Self {
            tasks_completed,
            previous_tasks_completed,
            referrals_count,
        }
    }

    /// Build from loader-provided counts, coercing negatives to zero.
    pub fn from_signed(tasks_completed: i64, previous_tasks_completed: i64, referrals_count: i64) -> Self {
        Self {
            tasks_completed: non_negative("tasks_completed", tasks_completed),
            previous_tasks_completed: non_negative("previous_tasks_completed", previous_tasks_completed),
            referrals_count: non_negative("referrals_count", referrals_count),
        }
    }
}

fn non_negative(field: &'static str, value: i64) -> u64 {
    u64::try_from(value).unwrap_or_else(|_| {
        tracing::warn!(field, value, "Negative count coerced to zero");
        0
    })
}

/// Everything the navigation, progress bar and unlock notice need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierResolutionResult {
    pub current_tier: Tier,
    pub next_tier: Option<Tier>,
    pub tasks_to_next_tier: u64,
    pub referrals_to_next_tier: u64,
    /// In `[0, 100]`
    pub progress_percent: f64,
    pub just_unlocked_features: Vec<FeatureId>,
}

/// Evaluate a snapshot against a table.
pub fn evaluate(snapshot: UserProgressSnapshot, table: &TierTable) -> TierResolutionResult {
    let UserProgressSnapshot {
        tasks_completed,
        previous_tasks_completed,
        referrals_count,
    } = snapshot;

    let resolution = table.resolve(tasks_completed, referrals_count);
    let progress = progress(resolution.current, resolution.next, tasks_completed, referrals_count);
    let just_unlocked_features = unlock_diff(tasks_completed, previous_tasks_completed, referrals_count, table);

    TierResolutionResult {
        current_tier: resolution.current.clone(),
        next_tier: resolution.next.cloned(),
        tasks_to_next_tier: progress.tasks_to_next,
        referrals_to_next_tier: progress.referrals_to_next,
        progress_percent: progress.percent,
        just_unlocked_features,
    }
}

/// Evaluator that remembers the last snapshot and its result.
///
/// Repeated evaluation of an unchanged snapshot (every re-render) returns
/// the stored result. Output is identical to calling [`evaluate`] directly.
#[derive(Debug)]
pub struct ExperienceEvaluator {
    table: Arc<TierTable>,
    memo: Option<(UserProgressSnapshot, TierResolutionResult)>,
    hits: u64,
    misses: u64,
}

impl ExperienceEvaluator {
    pub fn new(table: Arc<TierTable>) -> Self {
        Self {
            table,
            memo: None,
            hits: 0,
            misses: 0,
        }
    }

    pub fn table(&self) -> &TierTable {
        &self.table
    }

    /// Evaluate, reusing the previous result if the snapshot is unchanged.
    pub fn evaluate(&mut self, snapshot: UserProgressSnapshot) -> &TierResolutionResult {
        if matches!(&self.memo, Some((key, _)) if *key != snapshot) {
            self.memo = None;
        }

        if self.memo.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
            tracing::debug!(
                tasks = snapshot.tasks_completed,
                previous_tasks = snapshot.previous_tasks_completed,
                referrals = snapshot.referrals_count,
                "Evaluating experience tier"
            );
        }

        let table = &self.table;
        let (_, result) = self
            .memo
            .get_or_insert_with(|| (snapshot, evaluate(snapshot, table)));
        result
    }

    /// Drop the stored result.
    pub fn invalidate(&mut self) {
        self.memo = None;
    }

    /// `(hits, misses)` since construction.
    pub fn cache_stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
