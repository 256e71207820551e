//! The ordered tier table.
//!
//! Built once at startup, read-only afterwards. Construction is the only
//! place a table is checked; everything downstream trusts these guarantees:
//! - at least one tier
//! - the first tier has zero thresholds, so every user holds some tier
//! - no tier lists the same feature twice
//!
//! Thresholds are *not* required to ascend on both axes. A table such as
//! `[(0, 0), (1, 3), (10, 0)]` is valid; resolution and progress cope with it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::resolver::{self, Resolution};
use crate::tier::{FeatureId, Tier, TierLevel};

/// An ordered, validated list of tiers (lowest first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierTable {
    tiers: Vec<Tier>,
}

/// On-disk shape of a tier table.
#[derive(Debug, Deserialize)]
struct TierTableFile {
    tiers: Vec<Tier>,
}

impl TierTable {
    /// Validate and build a table.
    pub fn new(tiers: Vec<Tier>) -> Result<Self> {
        let first = tiers.first().ok_or(Error::EmptyTable)?;
        if first.min_tasks != 0 || first.min_referrals != 0 {
            return Err(Error::NonZeroFloor {
                min_tasks: first.min_tasks,
                min_referrals: first.min_referrals,
            });
        }

        for tier in &tiers {
            let mut seen = HashSet::with_capacity(tier.features.len());
            for feature in &tier.features {
                if !seen.insert(feature) {
                    return Err(Error::DuplicateFeature {
                        tier: tier.name.clone(),
                        feature: feature.clone(),
                    });
                }
            }
        }

        Ok(Self { tiers })
    }

    /// Parse and validate a JSON table: `{"tiers": [...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: TierTableFile = serde_json::from_str(json)?;
        Self::new(file.tiers)
    }

    /// Read a JSON table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), tiers = table.len(), "Loaded tier table");
        Ok(table)
    }

    /// The platform's built-in tiers.
    ///
    /// | Tier         | Tasks | Referrals | Adds                              |
    /// |--------------|-------|-----------|-----------------------------------|
    /// | Beginner     | 0     | 0         | dashboard, tasks, wallet, referrals |
    /// | Intermediate | 10    | 1         | leaderboard, community            |
    /// | Advanced     | 50    | 5         | premium_tasks, brand_collaborations |
    pub fn reference() -> Self {
        let beginner = ["dashboard", "tasks", "wallet", "referrals"];
        let intermediate = ["leaderboard", "community"];
        let advanced = ["premium_tasks", "brand_collaborations"];

        let tiers = vec![
            Tier::new(TierLevel::Beginner, "Beginner", 0, 0)
                .with_description("Complete tasks and earn your first points")
                .with_features(beginner),
            Tier::new(TierLevel::Intermediate, "Intermediate", 10, 1)
                .with_description("Compete on the leaderboard and join the community")
                .with_features(beginner.iter().chain(&intermediate).copied()),
            Tier::new(TierLevel::Advanced, "Advanced", 50, 5)
                .with_description("Access premium tasks and brand collaborations")
                .with_features(beginner.iter().chain(&intermediate).chain(&advanced).copied()),
        ];

        Self { tiers }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Tier at `rank` (0 = lowest).
    pub fn get(&self, rank: usize) -> Option<&Tier> {
        self.tiers.get(rank)
    }

    /// The zero-threshold floor tier.
    pub fn lowest(&self) -> &Tier {
        &self.tiers[0]
    }

    pub fn highest(&self) -> &Tier {
        &self.tiers[self.tiers.len() - 1]
    }

    /// Every feature the table can unlock: the highest tier's feature set.
    pub fn feature_universe(&self) -> &[FeatureId] {
        &self.highest().features
    }

    /// Shorthand for [`resolver::resolve`].
    pub fn resolve(&self, tasks_completed: u64, referrals_count: u64) -> Resolution<'_> {
        resolver::resolve(tasks_completed, referrals_count, self)
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::reference()
    }
}
