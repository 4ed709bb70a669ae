//! Instant team tournament.
//!
//! Two full teams fight a series of rounds. In each round the surviving
//! fighters are paired positionally and every pair duels with randomly drawn
//! attacks. The side that wins more duels takes the round; survivors enter
//! the next round weakened. The match ends once a side reaches the win
//! target, the round ceiling is hit, or a side has nobody left standing.
mod duel;
mod report;

pub use duel::{DuelSlot, simulate_duel};
pub use report::{DuelResult, KindTally, TournamentResult, TournamentRound, TurnEntry};

use crate::config::BattleConfig;
use crate::env::RngOracle;
use crate::progression::ProgressionUpdate;
use crate::roster::{Roster, RosterError, RosterSize, build_roster};
use crate::state::{BattleOutcome, CharacterId, CombatState, Side};

/// Health kept by a survivor between rounds: `percent` of its current
/// health, floored, never below 1.
pub fn carry_health(health: u32, percent: u32) -> u32 {
    (u64::from(health) * u64::from(percent) / 100).max(1) as u32
}

/// Runs a complete 3v3 tournament.
pub fn simulate_team_battle(
    heroes: Vec<CombatState>,
    villains: Vec<CombatState>,
    config: &BattleConfig,
    rng: &dyn RngOracle,
    seed: u64,
) -> Result<TournamentResult, RosterError> {
    let heroes = build_roster(Side::Hero, heroes, RosterSize::TEAM)?;
    let villains = build_roster(Side::Villain, villains, RosterSize::TEAM)?;
    let mut rosters: [Roster; 2] = [heroes, villains];

    let mut score = [0u8; 2];
    let mut rounds = Vec::new();

    for round in 1..=config.max_rounds {
        let [heroes, villains] = &mut rosters;
        let hero_alive: Vec<usize> = alive_positions(heroes);
        let villain_alive: Vec<usize> = alive_positions(villains);
        if hero_alive.is_empty() || villain_alive.is_empty() {
            break;
        }

        let mut duels = Vec::new();
        let mut duel_wins = [0u32; 2];
        let mut damage = [0u32; 2];
        let mut moves = [0u32; 2];

        for (duel, (&h, &v)) in hero_alive.iter().zip(villain_alive.iter()).enumerate() {
            let hero = &mut heroes[h];
            let villain = &mut villains[v];
            let slot = DuelSlot {
                seed,
                round: u32::from(round),
                duel: duel as u32,
            };
            let result = simulate_duel(hero, villain, rng, slot, config.max_duel_turns);

            if let Some(side) = result.winner {
                duel_wins[side.index()] += 1;
            }
            for side in [Side::Hero, Side::Villain] {
                damage[side.index()] += result.damage[side.index()];
                moves[side.index()] += result.moves()[side.index()];
            }

            for fighter in [hero, villain] {
                if fighter.is_alive() {
                    fighter.health = carry_health(fighter.health, config.carry_health_percent);
                }
            }
            duels.push(result);
        }

        let winner = BattleOutcome::from_tally(duel_wins).winner();
        if let Some(side) = winner {
            score[side.index()] += 1;
        }

        rounds.push(TournamentRound {
            round,
            duels,
            duel_wins,
            winner,
            survivors: [survivor_ids(heroes), survivor_ids(villains)],
            damage,
            moves,
            score,
        });

        if score.iter().any(|&wins| wins >= config.rounds_to_win) {
            break;
        }
    }

    let outcome = decide_match(&rosters, score, config.rounds_to_win);
    let progression = rosters
        .iter()
        .flat_map(|roster| roster.iter().map(ProgressionUpdate::from))
        .collect();

    Ok(TournamentResult {
        seed,
        outcome,
        final_score: score,
        rounds,
        progression,
    })
}

fn alive_positions(roster: &Roster) -> Vec<usize> {
    roster
        .iter()
        .enumerate()
        .filter(|(_, f)| f.is_alive())
        .map(|(i, _)| i)
        .collect()
}

fn survivor_ids(roster: &Roster) -> Vec<CharacterId> {
    roster.iter().filter(|f| f.is_alive()).map(|f| f.id).collect()
}

fn decide_match(rosters: &[Roster; 2], score: [u8; 2], rounds_to_win: u8) -> BattleOutcome {
    for side in [Side::Hero, Side::Villain] {
        if score[side.index()] >= rounds_to_win {
            return BattleOutcome::Victory(side);
        }
    }

    let standing = [
        rosters[0].iter().any(|f| f.is_alive()),
        rosters[1].iter().any(|f| f.is_alive()),
    ];
    match standing {
        [true, false] => BattleOutcome::Victory(Side::Hero),
        [false, true] => BattleOutcome::Victory(Side::Villain),
        _ => BattleOutcome::from_tally([u32::from(score[0]), u32::from(score[1])]),
    }
}
