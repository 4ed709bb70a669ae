//! Character catalog loader.
//!
//! Loads hero and villain profiles from RON files. The bundled catalog is
//! compiled in and available through [`default_roster`].

use std::collections::HashSet;
use std::path::Path;

use battle_core::{BattleConfig, CharacterProfile};

use crate::loaders::{LoadResult, read_file};

const DEFAULT_ROSTER: &str = include_str!("../../data/roster.ron");

/// Loader for the character catalog from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load the character catalog from a RON file.
    ///
    /// RON format: `Vec<CharacterProfile>`
    pub fn load(path: &Path) -> LoadResult<Vec<CharacterProfile>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a catalog from RON text.
    ///
    /// Ids must be unique and power must lie within the engine's range.
    pub fn parse(content: &str) -> LoadResult<Vec<CharacterProfile>> {
        let profiles: Vec<CharacterProfile> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.id) {
                anyhow::bail!("Duplicate character id {} in catalog", profile.id);
            }
            if !(BattleConfig::MIN_POWER..=BattleConfig::MAX_POWER).contains(&profile.power) {
                anyhow::bail!(
                    "Character {} ('{}') has power {}, expected {}..={}",
                    profile.id,
                    profile.label(),
                    profile.power,
                    BattleConfig::MIN_POWER,
                    BattleConfig::MAX_POWER
                );
            }
        }

        Ok(profiles)
    }
}

/// The bundled 20-character catalog (10 heroes, 10 villains).
pub fn default_roster() -> LoadResult<Vec<CharacterProfile>> {
    RosterLoader::parse(DEFAULT_ROSTER)
}
