//! Feature gating.
//!
//! Visibility is a pure function of the current tier, re-evaluated on every
//! check. Nothing is cached, so a tier drop hides features again.

use serde::{Deserialize, Serialize};

use crate::table::TierTable;
use crate::tier::{FeatureId, Tier};

/// Is `feature` usable at `tier`?
pub fn is_unlocked(feature: &str, tier: &Tier) -> bool {
    tier.has_feature(feature)
}

/// Feature universe minus the tier's features, in universe order.
pub fn locked_features<'a>(tier: &Tier, table: &'a TierTable) -> Vec<&'a FeatureId> {
    table
        .feature_universe()
        .iter()
        .filter(|feature| !tier.features.contains(feature))
        .collect()
}

/// Lowest-ranked tier that unlocks `feature`.
pub fn unlocking_tier<'a>(feature: &str, table: &'a TierTable) -> Option<&'a Tier> {
    table.tiers().iter().find(|tier| tier.has_feature(feature))
}

/// Gate view over a user's current tier.
#[derive(Debug, Clone, Copy)]
pub struct FeatureGate<'a> {
    tier: &'a Tier,
    table: &'a TierTable,
}

impl<'a> FeatureGate<'a> {
    pub fn new(tier: &'a Tier, table: &'a TierTable) -> Self {
        Self { tier, table }
    }

    /// Gate for the tier the given counts resolve to.
    pub fn for_counts(tasks_completed: u64, referrals_count: u64, table: &'a TierTable) -> Self {
        Self::new(table.resolve(tasks_completed, referrals_count).current, table)
    }

    pub fn tier(&self) -> &'a Tier {
        self.tier
    }

    pub fn is_unlocked(&self, feature: &str) -> bool {
        is_unlocked(feature, self.tier)
    }

    pub fn locked_features(&self) -> Vec<&'a FeatureId> {
        locked_features(self.tier, self.table)
    }

    /// Tier to reach for a feature that is still locked. `None` if the
    /// feature is already unlocked or no tier offers it.
    pub fn unlocking_tier(&self, feature: &str) -> Option<&'a Tier> {
        if self.is_unlocked(feature) {
            return None;
        }
        unlocking_tier(feature, self.table)
    }

    /// Tabs the navigation should render, in the given order.
    pub fn visible_tabs<'t>(&self, tabs: &'t [NavTab]) -> Vec<&'t NavTab> {
        tabs.iter().filter(|tab| tab.is_visible(self)).collect()
    }
}

/// A navigation entry, optionally behind a feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTab {
    /// Route identifier
    pub id: String,

    /// Display label
    pub label: String,

    /// Feature required to show the tab; `None` means always shown
    pub feature: Option<FeatureId>,
}

impl NavTab {
    /// Create an ungated tab.
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            feature: None,
        }
    }

    /// Create a tab gated on a feature.
    pub fn gated(id: &str, label: &str, feature: &str) -> Self {
        Self {
            feature: Some(FeatureId::from(feature)),
            ..Self::new(id, label)
        }
    }

    pub fn is_visible(&self, gate: &FeatureGate<'_>) -> bool {
        match &self.feature {
            Some(feature) => gate.is_unlocked(feature.as_str()),
            None => true,
        }
    }

    /// The user dashboard's tabs.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("dashboard", "Dashboard"),
            Self::gated("tasks", "Tasks", "tasks"),
            Self::gated("wallet", "Wallet", "wallet"),
            Self::gated("referrals", "Referrals", "referrals"),
            Self::gated("leaderboard", "Leaderboard", "leaderboard"),
            Self::gated("community", "Community", "community"),
            Self::gated("premium", "Premium Tasks", "premium_tasks"),
        ]
    }
}
