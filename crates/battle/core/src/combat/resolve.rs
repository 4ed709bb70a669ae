//! Attack resolution: damage, shield absorption and attacker progression.

use crate::progression::{LevelProgress, attack_experience, grant_experience};
use crate::state::{CharacterId, CombatState};

use super::attack::AttackKind;
use super::damage::{DamageSplit, apply_damage, compute_damage};

/// Result of applying one attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub attacker: CharacterId,
    pub defender: CharacterId,
    pub kind: AttackKind,
    /// Final damage after the power bonus.
    pub damage: u32,
    pub split: DamageSplit,
    pub shield_remaining: u32,
    pub health_remaining: u32,
    pub experience_gained: u64,
    pub progress: LevelProgress,
    pub defender_defeated: bool,
}

impl AttackReport {
    /// Whether the attack actually happened (both fighters were standing).
    pub fn landed(&self) -> bool {
        self.damage > 0 || self.experience_gained > 0
    }
}

/// Whether an attack of `base_damage` from `attacker` would defeat `defender`.
pub fn is_lethal(attacker: &CombatState, defender: &CombatState, base_damage: u32) -> bool {
    defender.is_alive() && compute_damage(base_damage, attacker.power) >= defender.effective_hp()
}

/// Apply an attack from `attacker` to `defender`.
///
/// Damage is absorbed by the defender's shield first; the residual reduces
/// health. The attacker then earns experience: the finishing amount when
/// `is_round_winner` is set, the exchange amount otherwise. A defeated
/// fighter on either side, or an attack that deals no damage, turns the
/// call into an empty report.
pub fn apply_attack(
    attacker: &mut CombatState,
    defender: &mut CombatState,
    kind: AttackKind,
    base_damage: u32,
    is_round_winner: bool,
) -> AttackReport {
    let damage = compute_damage(base_damage, attacker.power);
    if damage == 0 || attacker.is_defeated() || defender.is_defeated() {
        return AttackReport {
            attacker: attacker.id,
            defender: defender.id,
            kind,
            damage: 0,
            split: DamageSplit::default(),
            shield_remaining: defender.shield,
            health_remaining: defender.health,
            experience_gained: 0,
            progress: LevelProgress {
                levels_gained: 0,
                power: attacker.power,
                experience: attacker.experience,
            },
            defender_defeated: defender.is_defeated(),
        };
    }

    let split = apply_damage(&mut defender.shield, &mut defender.health, damage);

    let experience_gained = attack_experience(is_round_winner);
    let progress = grant_experience(attacker, experience_gained);

    AttackReport {
        attacker: attacker.id,
        defender: defender.id,
        kind,
        damage,
        split,
        shield_remaining: defender.shield,
        health_remaining: defender.health,
        experience_gained,
        progress,
        defender_defeated: defender.is_defeated(),
    }
}

/// Apply an attack using the attacker's own attack table, marking the
/// finishing blow automatically.
pub fn strike(
    attacker: &mut CombatState,
    defender: &mut CombatState,
    kind: AttackKind,
) -> AttackReport {
    let base_damage = attacker.attacks.base_damage(kind);
    let finishing = is_lethal(attacker, defender, base_damage);
    apply_attack(attacker, defender, kind, base_damage, finishing)
}
