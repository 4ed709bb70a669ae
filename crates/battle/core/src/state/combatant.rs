use crate::combat::AttackTable;
use crate::config::BattleConfig;
use crate::env::CharacterProfile;

use super::types::{CharacterId, Side};

/// Mutable condition of one participant during a battle.
///
/// Invariants (maintained by every mutating function in this crate):
/// - `health <= MAX_HEALTH`, `shield <= MAX_SHIELD`
/// - `MIN_POWER <= power <= MAX_POWER`
/// - `experience == 0` whenever `power == MAX_POWER`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub id: CharacterId,
    pub side: Side,
    pub health: u32,
    pub shield: u32,
    pub power: u32,
    pub experience: u64,
    pub attacks: AttackTable,
}

impl CombatState {
    /// Fresh fighter at full health and shield with the default attack table.
    pub fn new(id: CharacterId, side: Side) -> Self {
        Self {
            id,
            side,
            health: BattleConfig::MAX_HEALTH,
            shield: BattleConfig::MAX_SHIELD,
            power: BattleConfig::MIN_POWER,
            experience: 0,
            attacks: AttackTable::default(),
        }
    }

    /// Derives a combat clone from a catalog profile, clamping out-of-range values.
    pub fn from_profile(profile: &CharacterProfile) -> Self {
        let power = profile
            .power
            .clamp(BattleConfig::MIN_POWER, BattleConfig::MAX_POWER);
        let experience = if power == BattleConfig::MAX_POWER {
            0
        } else {
            profile.experience
        };

        Self {
            id: profile.id,
            side: profile.side,
            health: profile.health_base.min(BattleConfig::MAX_HEALTH),
            shield: profile.shield_base.min(BattleConfig::MAX_SHIELD),
            power,
            experience,
            attacks: profile.attacks,
        }
    }

    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power.clamp(BattleConfig::MIN_POWER, BattleConfig::MAX_POWER);
        if self.power == BattleConfig::MAX_POWER {
            self.experience = 0;
        }
        self
    }

    pub fn with_experience(mut self, experience: u64) -> Self {
        if self.power < BattleConfig::MAX_POWER {
            self.experience = experience;
        }
        self
    }

    pub fn with_shield(mut self, shield: u32) -> Self {
        self.shield = shield.min(BattleConfig::MAX_SHIELD);
        self
    }

    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.min(BattleConfig::MAX_HEALTH);
        self
    }

    pub fn with_attacks(mut self, attacks: AttackTable) -> Self {
        self.attacks = attacks;
        self
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.is_defeated()
    }

    /// Health plus shield: the damage needed to defeat this fighter.
    #[inline]
    pub fn effective_hp(&self) -> u32 {
        self.health + self.shield
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CharacterProfile {
        CharacterProfile::new(CharacterId(3), "Diana", Side::Hero)
    }

    #[test]
    fn new_fighter_starts_full() {
        let state = CombatState::new(CharacterId(1), Side::Villain);
        assert_eq!(state.health, 200);
        assert_eq!(state.shield, 200);
        assert_eq!(state.power, 1);
        assert_eq!(state.experience, 0);
        assert!(state.is_alive());
    }

    #[test]
    fn from_profile_clamps_out_of_range_values() {
        let mut p = profile();
        p.health_base = 900;
        p.shield_base = 250;
        p.power = 0;
        let state = CombatState::from_profile(&p);
        assert_eq!(state.health, 200);
        assert_eq!(state.shield, 200);
        assert_eq!(state.power, 1);
    }

    #[test]
    fn max_power_profile_has_no_experience() {
        let mut p = profile();
        p.power = 140;
        p.experience = 5_000;
        let state = CombatState::from_profile(&p);
        assert_eq!(state.power, 100);
        assert_eq!(state.experience, 0);
    }

    #[test]
    fn builder_keeps_experience_frozen_at_cap() {
        let state = CombatState::new(CharacterId(1), Side::Hero)
            .with_power(100)
            .with_experience(42);
        assert_eq!(state.experience, 0);
    }
}
