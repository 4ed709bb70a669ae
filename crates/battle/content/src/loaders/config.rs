//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`BattleConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.scripted_rounds == 0 || config.max_rounds == 0 || config.rounds_to_win == 0 {
            anyhow::bail!("Round counts in battle config must be at least 1");
        }
        if config.carry_health_percent > 100 {
            anyhow::bail!(
                "carry_health_percent must be within 0..=100, got {}",
                config.carry_health_percent
            );
        }

        Ok(config)
    }
}
