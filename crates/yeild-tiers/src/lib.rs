//! YEILD Experience Tiers
//!
//! Users earn points by completing brand tasks and referring friends. As
//! their counts grow they move through experience tiers, and each tier
//! unlocks part of the platform (leaderboard, community, premium tasks, ...).
//!
//! # Resolution
//!
//! A tier is held once **both** its task and referral thresholds are met:
//! - current tier: highest tier whose gates are both open (rank 0 otherwise)
//! - next tier: lowest tier with a gate still closed
//! - progress: `min(task %, referral %)` toward the next tier, clamped to `[0, 100]`
//!
//! # Unlocks
//!
//! The unlock diff compares the tier for the previous task count with the
//! tier for the current one (referrals held fixed) and lists the features
//! that are new. [`UnlockTracker`] wraps it so each unlock is announced once.
//!
//! # Example
//!
//! ```
//! use yeild_tiers::{evaluate, FeatureGate, TierTable, UserProgressSnapshot};
//!
//! let table = TierTable::reference();
//! let result = evaluate(UserProgressSnapshot::new(10, 9, 1), &table);
//! assert_eq!(result.current_tier.name, "Intermediate");
//! assert_eq!(result.just_unlocked_features, vec!["leaderboard", "community"]);
//!
//! let gate = FeatureGate::for_counts(10, 1, &table);
//! assert!(gate.is_unlocked("leaderboard"));
//! assert!(!gate.is_unlocked("premium_tasks"));
//! ```

mod config;
mod error;
mod experience;
mod gate;
mod progress;
mod resolver;
mod table;
mod tier;
mod tracker;
mod unlock;

#[cfg(test)]
mod testing;

pub use config::{TierConfig, TIER_TABLE_ENV};
pub use error::{Error, Result};
pub use experience::{evaluate, ExperienceEvaluator, TierResolutionResult, UserProgressSnapshot};
pub use gate::{is_unlocked, locked_features, unlocking_tier, FeatureGate, NavTab};
pub use progress::{progress, Progress};
pub use resolver::{resolve, Resolution};
pub use table::TierTable;
pub use tier::{FeatureId, Tier, TierLevel};
pub use tracker::{UnlockNotification, UnlockTracker};
pub use unlock::unlock_diff;
