//! Tier table configuration.

use std::path::PathBuf;

use crate::error::Result;
use crate::table::TierTable;

/// Environment variable naming a JSON tier table.
pub const TIER_TABLE_ENV: &str = "YEILD_TIER_TABLE";

/// Where the tier table comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierConfig {
    /// JSON table file; `None` selects the built-in reference table
    pub table_path: Option<PathBuf>,
}

impl TierConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let table_path = std::env::var(TIER_TABLE_ENV)
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Self { table_path }
    }

    pub fn with_table_path(path: impl Into<PathBuf>) -> Self {
        Self {
            table_path: Some(path.into()),
        }
    }

    /// Load and validate the configured table.
    pub fn load_table(&self) -> Result<TierTable> {
        match &self.table_path {
            Some(path) => TierTable::load(path),
            None => {
                tracing::debug!("Using reference tier table");
                Ok(TierTable::reference())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn default_is_reference_table() {
        let table = TierConfig::default().load_table().unwrap();
        assert_eq!(table, TierTable::reference());
    }

    #[test]
    fn loads_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiers.json");
        std::fs::write(
            &path,
            r#"{"tiers":[
                {"level":"beginner","name":"Starter","min_tasks":0,"min_referrals":0,"features":["tasks"]},
                {"level":"advanced","name":"Pro","min_tasks":3,"min_referrals":0,"features":["tasks","leaderboard"]}
            ]}"#,
        )
        .unwrap();

        let table = TierConfig::with_table_path(&path).load_table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve(3, 0).current.name, "Pro");
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiers.json");
        std::fs::write(&path, r#"{"tiers":[]}"#).unwrap();

        let err = TierConfig::with_table_path(&path).load_table().unwrap_err();
        assert!(matches!(err, Error::EmptyTable));
    }
}
