//! Experience and power progression.
//!
//! Power grows along an exponential curve: reaching power `p + 1` costs
//! `100 × 2^(p - 1)` experience. Leftover experience carries over, so a
//! single large grant may promote several levels at once. Power is capped at
//! [`BattleConfig::MAX_POWER`]; at the cap experience is frozen at zero.

use crate::config::BattleConfig;
use crate::env::CharacterProfile;
use crate::state::{CharacterId, CombatState};

/// Experience for an ordinary hit.
pub const EXCHANGE_EXPERIENCE: u64 = 10;

/// Experience for the hit that wins the matchup.
pub const FINISHING_EXPERIENCE: u64 = 20;

/// Experience awarded to an attacker for one hit.
pub const fn attack_experience(is_round_winner: bool) -> u64 {
    if is_round_winner {
        FINISHING_EXPERIENCE
    } else {
        EXCHANGE_EXPERIENCE
    }
}

/// Experience required to advance from `power` to `power + 1`.
///
/// Saturates at `u64::MAX` once the curve outgrows 64 bits, which makes
/// the remaining levels unreachable in practice without overflowing.
pub fn level_threshold(power: u32) -> u64 {
    let exponent = power.max(1) - 1;
    1u64.checked_shl(exponent)
        .and_then(|factor| factor.checked_mul(100))
        .unwrap_or(u64::MAX)
}

/// Outcome of a single experience grant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelProgress {
    pub levels_gained: u32,
    pub power: u32,
    pub experience: u64,
}

impl LevelProgress {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Progression fields the caller should write back to the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressionUpdate {
    pub id: CharacterId,
    pub power: u32,
    pub experience: u64,
}

impl ProgressionUpdate {
    /// Folds this update into a catalog profile. Returns false on an id mismatch.
    pub fn apply_to(&self, profile: &mut CharacterProfile) -> bool {
        if profile.id != self.id {
            return false;
        }
        profile.power = self
            .power
            .clamp(BattleConfig::MIN_POWER, BattleConfig::MAX_POWER);
        profile.experience = if profile.power == BattleConfig::MAX_POWER {
            0
        } else {
            self.experience
        };
        true
    }
}

impl From<&CombatState> for ProgressionUpdate {
    fn from(state: &CombatState) -> Self {
        Self {
            id: state.id,
            power: state.power,
            experience: state.experience,
        }
    }
}

/// Grant experience and promote power while thresholds are met.
pub fn grant_experience(state: &mut CombatState, amount: u64) -> LevelProgress {
    if state.power >= BattleConfig::MAX_POWER {
        state.power = BattleConfig::MAX_POWER;
        state.experience = 0;
        return LevelProgress {
            levels_gained: 0,
            power: state.power,
            experience: 0,
        };
    }

    state.experience = state.experience.saturating_add(amount);

    let start = state.power;
    while state.power < BattleConfig::MAX_POWER {
        let threshold = level_threshold(state.power);
        if state.experience < threshold {
            break;
        }
        state.experience -= threshold;
        state.power += 1;
    }

    if state.power == BattleConfig::MAX_POWER {
        state.experience = 0;
    }

    LevelProgress {
        levels_gained: state.power - start,
        power: state.power,
        experience: state.experience,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Side;

    fn fighter(power: u32, experience: u64) -> CombatState {
        CombatState::new(CharacterId(1), Side::Hero)
            .with_power(power)
            .with_experience(experience)
    }

    #[test]
    fn threshold_doubles_per_level() {
        assert_eq!(level_threshold(1), 100);
        assert_eq!(level_threshold(2), 200);
        assert_eq!(level_threshold(5), 1_600);
        assert_eq!(level_threshold(99), u64::MAX);
    }

    #[test]
    fn small_grant_does_not_level() {
        let mut state = fighter(1, 0);
        let progress = grant_experience(&mut state, 10);
        assert_eq!(state.experience, 10);
        assert_eq!(state.power, 1);
        assert!(!progress.leveled_up());
    }

    #[test]
    fn overflow_carries_into_next_level() {
        let mut state = fighter(1, 95);
        let progress = grant_experience(&mut state, 10);
        assert_eq!(state.power, 2);
        assert_eq!(state.experience, 5);
        assert_eq!(progress.levels_gained, 1);
    }

    #[test]
    fn large_grant_promotes_several_levels() {
        // 100 + 200 + 400 = 700 → power 4 with 50 left over
        let mut state = fighter(1, 0);
        let progress = grant_experience(&mut state, 750);
        assert_eq!(progress.levels_gained, 3);
        assert_eq!(state.power, 4);
        assert_eq!(state.experience, 50);
    }

    #[test]
    fn capped_power_ignores_experience() {
        let mut state = fighter(100, 0);
        let progress = grant_experience(&mut state, 1_000_000);
        assert_eq!(state.power, 100);
        assert_eq!(state.experience, 0);
        assert_eq!(progress.levels_gained, 0);
    }

    #[test]
    fn repeated_grants_never_exceed_cap() {
        let mut state = fighter(90, 0);
        for _ in 0..200 {
            grant_experience(&mut state, u64::MAX / 4);
            assert!(state.power <= 100);
            if state.power == 100 {
                assert_eq!(state.experience, 0);
            }
        }
    }

    #[test]
    fn update_folds_into_matching_profile_only() {
        let update = ProgressionUpdate {
            id: CharacterId(1),
            power: 2,
            experience: 5,
        };

        let mut clark = CharacterProfile::new(CharacterId(1), "Clark", Side::Hero);
        assert!(update.apply_to(&mut clark));
        assert_eq!((clark.power, clark.experience), (2, 5));

        let mut lex = CharacterProfile::new(CharacterId(11), "Lex", Side::Villain);
        assert!(!update.apply_to(&mut lex));
        assert_eq!((lex.power, lex.experience), (1, 0));

        let capped = ProgressionUpdate {
            id: CharacterId(1),
            power: 100,
            experience: 40,
        };
        capped.apply_to(&mut clark);
        assert_eq!((clark.power, clark.experience), (100, 0));
    }

    #[test]
    fn attack_experience_rewards_finishing_blow() {
        assert_eq!(attack_experience(false), 10);
        assert_eq!(attack_experience(true), 20);
    }
}
