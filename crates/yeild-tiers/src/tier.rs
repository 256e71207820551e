//! Tier records and feature identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Experience bracket a tier represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl TierLevel {
    /// Lowercase identifier used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            TierLevel::Beginner => "beginner",
            TierLevel::Intermediate => "intermediate",
            TierLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for TierLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque name of a gated UI capability (e.g. `leaderboard`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(String);

impl FeatureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for FeatureId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FeatureId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FeatureId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A named bracket of platform progress.
///
/// A user holds the tier once **both** `min_tasks` and `min_referrals` are met.
/// `features` lists everything usable at this tier; order is kept for display
/// and for the order of unlock notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Bracket identifier
    pub level: TierLevel,

    /// Display name
    pub name: String,

    /// Display description
    #[serde(default)]
    pub description: String,

    /// Completed tasks required
    pub min_tasks: u64,

    /// Referrals required
    pub min_referrals: u64,

    /// Features unlocked at this tier
    #[serde(default)]
    pub features: Vec<FeatureId>,
}

impl Tier {
    /// Create a tier with no description and no features.
    pub fn new(level: TierLevel, name: impl Into<String>, min_tasks: u64, min_referrals: u64) -> Self {
        Self {
            level,
            name: name.into(),
            description: String::new(),
            min_tasks,
            min_referrals,
            features: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_features<I, F>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FeatureId>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Both thresholds met (logical AND, never OR).
    pub fn qualifies(&self, tasks_completed: u64, referrals_count: u64) -> bool {
        tasks_completed >= self.min_tasks && referrals_count >= self.min_referrals
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifies_requires_both_thresholds() {
        let tier = Tier::new(TierLevel::Intermediate, "Rising", 1, 3);
        assert!(!tier.qualifies(1, 0)); // tasks alone are not enough
        assert!(!tier.qualifies(0, 3)); // referrals alone are not enough
        assert!(tier.qualifies(1, 3));
        assert!(tier.qualifies(100, 100));
    }

    #[test]
    fn has_feature_is_exact_match() {
        let tier = Tier::new(TierLevel::Beginner, "Starter", 0, 0).with_features(["tasks", "wallet"]);
        assert!(tier.has_feature("wallet"));
        assert!(!tier.has_feature("wall"));
        assert!(!tier.has_feature("leaderboard"));
    }

    #[test]
    fn level_serializes_lowercase() {
        let json = serde_json::to_string(&TierLevel::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
        assert_eq!(TierLevel::Advanced.to_string(), "advanced");
    }

    #[test]
    fn feature_id_is_transparent() {
        let id: FeatureId = serde_json::from_str("\"community\"").unwrap();
        assert_eq!(id, "community");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"community\"");
    }
}
