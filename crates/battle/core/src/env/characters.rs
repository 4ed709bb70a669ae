use crate::combat::AttackTable;
use crate::config::BattleConfig;
use crate::state::{CharacterId, Side};

/// Persistent catalog record of a hero or villain.
///
/// Profiles are owned by the catalog collaborator. The engine reads them to
/// build combat clones and reports progression changes back through the
/// service layer instead of mutating them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterProfile {
    pub id: CharacterId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alias: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub city: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub team: String,
    pub side: Side,
    #[cfg_attr(feature = "serde", serde(default = "default_power"))]
    pub power: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub experience: u64,
    #[cfg_attr(feature = "serde", serde(default = "default_shield"))]
    pub shield_base: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_health"))]
    pub health_base: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attacks: AttackTable,
}

#[cfg(feature = "serde")]
fn default_power() -> u32 {
    BattleConfig::MIN_POWER
}

#[cfg(feature = "serde")]
fn default_shield() -> u32 {
    BattleConfig::MAX_SHIELD
}

#[cfg(feature = "serde")]
fn default_health() -> u32 {
    BattleConfig::MAX_HEALTH
}

impl CharacterProfile {
    pub fn new(id: CharacterId, name: impl Into<String>, side: Side) -> Self {
        Self {
            id,
            name: name.into(),
            alias: String::new(),
            city: String::new(),
            team: String::new(),
            side,
            power: BattleConfig::MIN_POWER,
            experience: 0,
            shield_base: BattleConfig::MAX_SHIELD,
            health_base: BattleConfig::MAX_HEALTH,
            attacks: AttackTable::default(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power;
        self
    }

    pub fn with_experience(mut self, experience: u64) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_attacks(mut self, attacks: AttackTable) -> Self {
        self.attacks = attacks;
        self
    }

    /// Display label, alias when present.
    pub fn label(&self) -> &str {
        if self.alias.is_empty() {
            &self.name
        } else {
            &self.alias
        }
    }
}

/// Read-only access to the character catalog.
pub trait CharacterOracle: Send + Sync {
    /// Look up a character by id.
    fn character(&self, id: CharacterId) -> Option<CharacterProfile>;

    /// All known characters, ordered by id.
    fn characters(&self) -> Vec<CharacterProfile>;

    /// Characters on one side, ordered by id.
    fn characters_on(&self, side: Side) -> Vec<CharacterProfile> {
        self.characters()
            .into_iter()
            .filter(|profile| profile.side == side)
            .collect()
    }
}
