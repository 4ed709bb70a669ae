//! Character catalog implementing [`battle_core::CharacterOracle`].
use std::collections::BTreeMap;

use battle_content::LoadResult;
use battle_core::{CharacterId, CharacterOracle, CharacterProfile};

/// CharacterOracle implementation backed by an in-memory catalog
#[derive(Clone, Debug, Default)]
pub struct CharacterOracleImpl {
    profiles: BTreeMap<CharacterId, CharacterProfile>,
}

impl CharacterOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of profiles; a later duplicate id replaces an earlier one.
    pub fn from_profiles(profiles: impl IntoIterator<Item = CharacterProfile>) -> Self {
        let mut oracle = Self::new();
        for profile in profiles {
            oracle.add_profile(profile);
        }
        oracle
    }

    /// Create with the bundled 20-character catalog
    pub fn default_catalog() -> LoadResult<Self> {
        Ok(Self::from_profiles(battle_content::default_roster()?))
    }

    /// Add a character profile
    pub fn add_profile(&mut self, profile: CharacterProfile) {
        self.profiles.insert(profile.id, profile);
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl CharacterOracle for CharacterOracleImpl {
    fn character(&self, id: CharacterId) -> Option<CharacterProfile> {
        self.profiles.get(&id).cloned()
    }

    fn characters(&self) -> Vec<CharacterProfile> {
        self.profiles.values().cloned().collect()
    }
}
