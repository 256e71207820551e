//! Error types for tier table construction and loading.

use thiserror::Error;

use crate::tier::FeatureId;

/// Result type for tier table operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or loading a tier table.
///
/// Resolution, progress, diff and gating never fail once a table exists.
#[derive(Debug, Error)]
pub enum Error {
    /// Table has no tiers
    #[error("Tier table is empty")]
    EmptyTable,

    /// First tier is not reachable by a new user
    #[error("First tier must have zero thresholds (min_tasks={min_tasks}, min_referrals={min_referrals})")]
    NonZeroFloor { min_tasks: u64, min_referrals: u64 },

    /// Same feature listed twice in one tier
    #[error("Duplicate feature {feature} in tier {tier}")]
    DuplicateFeature { tier: String, feature: FeatureId },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
