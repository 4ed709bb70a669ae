use crate::combat::{AttackKind, strike};
use crate::env::{RngOracle, compute_seed};
use crate::progression::ProgressionUpdate;
use crate::state::{CombatState, Side};

use super::report::{DuelResult, KindTally, TurnEntry};

/// Where a duel sits inside a tournament; feeds the per-turn seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DuelSlot {
    pub seed: u64,
    pub round: u32,
    pub duel: u32,
}

impl DuelSlot {
    /// A duel fought outside any tournament.
    pub const fn standalone(seed: u64) -> Self {
        Self {
            seed,
            round: 0,
            duel: 0,
        }
    }
}

/// Runs a 1v1 duel until a fighter is defeated or `max_turns` attacks
/// have been thrown.
///
/// Attackers alternate with the hero opening. Each attack kind is drawn
/// from a d100 roll seeded by the slot and the turn number.
pub fn simulate_duel(
    hero: &mut CombatState,
    villain: &mut CombatState,
    rng: &dyn RngOracle,
    slot: DuelSlot,
    max_turns: u32,
) -> DuelResult {
    let mut damage = [0u32; 2];
    let mut tallies = [KindTally::default(); 2];
    let mut log = Vec::new();
    let mut turn = 0;

    while turn < max_turns && hero.is_alive() && villain.is_alive() {
        let side = if turn % 2 == 0 { Side::Hero } else { Side::Villain };
        let roll = rng.roll_d100(compute_seed(slot.seed, slot.round, slot.duel, turn));
        let kind = AttackKind::from_roll(roll);

        let (attacker, defender) = match side {
            Side::Hero => (&mut *hero, &mut *villain),
            Side::Villain => (&mut *villain, &mut *hero),
        };
        let report = strike(attacker, defender, kind);

        damage[side.index()] += report.split.absorbed + report.split.to_health;
        tallies[side.index()].record(kind);
        log.push(TurnEntry {
            turn,
            side,
            attacker: report.attacker,
            kind,
            roll,
            damage: report.damage,
            defender_shield: report.shield_remaining,
            defender_health: report.health_remaining,
        });
        turn += 1;
    }

    let winner = match (hero.is_alive(), villain.is_alive()) {
        (true, false) => Some(Side::Hero),
        (false, true) => Some(Side::Villain),
        _ => None,
    };

    DuelResult {
        hero: hero.id,
        villain: villain.id,
        winner,
        turns: turn,
        damage,
        tallies,
        health_after: [hero.health, villain.health],
        log,
        progression: vec![
            ProgressionUpdate::from(&*hero),
            ProgressionUpdate::from(&*villain),
        ],
    }
}
