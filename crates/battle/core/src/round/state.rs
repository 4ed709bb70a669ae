use crate::combat::{AttackKind, strike};
use crate::config::BattleConfig;
use crate::progression::ProgressionUpdate;
use crate::roster::{Roster, RosterError, RosterSize, build_roster};
use crate::state::{BattleId, BattleOutcome, CombatState, Side};

use super::error::RoundError;
use super::phase::{BattlePhase, PhaseEvent};
use super::record::{FinalResults, MoveLogEntry, RoundOutcome, RoundRecord, RoundStatus};

/// Complete state of a scripted battle.
///
/// Each side fights with the roster entry under its cursor. When a fighter
/// goes down its cursor moves to the next entry; the survivor stays in with
/// whatever health and shield it has left.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub battle_id: BattleId,
    pub phase: BattlePhase,
    pub current_round: u8,
    pub max_rounds: u8,
    /// `[heroes, villains]` in fighting order.
    pub rosters: [Roster; 2],
    pub cursors: [usize; 2],
    pub rounds: Vec<RoundRecord>,
    pub log: Vec<MoveLogEntry>,
}

impl BattleState {
    pub fn new(
        battle_id: BattleId,
        heroes: Vec<CombatState>,
        villains: Vec<CombatState>,
        config: &BattleConfig,
    ) -> Result<Self, RosterError> {
        let heroes = build_roster(Side::Hero, heroes, RosterSize::ANY)?;
        let villains = build_roster(Side::Villain, villains, RosterSize::ANY)?;

        Ok(Self {
            battle_id,
            phase: BattlePhase::NotStarted,
            current_round: 1,
            max_rounds: config.scripted_rounds.max(1),
            rosters: [heroes, villains],
            cursors: [0; 2],
            rounds: Vec::new(),
            log: Vec::new(),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Fighter currently standing in for `side`.
    pub fn active(&self, side: Side) -> Option<&CombatState> {
        self.rosters[side.index()].get(self.cursors[side.index()])
    }

    /// Roster entries of `side` that have not fought yet or are still standing.
    pub fn remaining(&self, side: Side) -> usize {
        let roster = &self.rosters[side.index()];
        roster.len() - self.cursors[side.index()].min(roster.len())
    }

    /// Rounds won per side (`[hero, villain]`).
    pub fn round_wins(&self) -> [u8; 2] {
        let mut wins = [0u8; 2];
        for record in self.rounds.iter().filter(|r| r.is_done()) {
            if let Some(side) = record.winner {
                wins[side.index()] += 1;
            }
        }
        wins
    }

    /// Current standing: the side with more round wins leads.
    pub fn standing(&self) -> BattleOutcome {
        let [hero, villain] = self.round_wins();
        BattleOutcome::from_tally([u32::from(hero), u32::from(villain)])
    }

    /// Rejects a submission for `round` without touching the state.
    pub fn check_submission(&self, round: u8) -> Result<(), RoundError> {
        let Some(expected) = self.phase.expected_round() else {
            return Err(RoundError::BattleFinished);
        };
        if round == 0 || round > self.max_rounds {
            return Err(RoundError::InvalidRound {
                round,
                max: self.max_rounds,
            });
        }
        if round < expected {
            return Err(RoundError::RoundAlreadyDone { round });
        }
        if round > expected {
            return Err(RoundError::RoundOutOfSequence {
                requested: round,
                expected,
            });
        }
        Ok(())
    }

    /// Resolves one exchange of `round`.
    ///
    /// The hero's active fighter strikes first; the villain's replies if it
    /// is still standing. The round completes when a fighter reaches zero
    /// health, at which point the defeated side brings in its next fighter.
    /// The battle finishes after the last scripted round or once a side runs
    /// out of fighters.
    pub fn resolve_round(
        &mut self,
        round: u8,
        hero_attack: AttackKind,
        villain_attack: AttackKind,
    ) -> Result<RoundOutcome, RoundError> {
        self.check_submission(round)?;

        let hero_idx = self.cursors[Side::Hero.index()];
        let villain_idx = self.cursors[Side::Villain.index()];
        if hero_idx >= self.rosters[0].len() {
            return Err(RoundError::NoActiveFighter { side: Side::Hero });
        }
        if villain_idx >= self.rosters[1].len() {
            return Err(RoundError::NoActiveFighter { side: Side::Villain });
        }

        self.phase = self.transition(PhaseEvent::Exchange { round })?;
        self.current_round = round;

        let [heroes, villains] = &mut self.rosters;
        let hero = &mut heroes[hero_idx];
        let villain = &mut villains[villain_idx];

        if !matches!(self.rounds.last(), Some(r) if r.round == round && !r.is_done()) {
            self.rounds.push(RoundRecord::open(round, hero.id, villain.id));
        }

        let mut reports = Vec::with_capacity(2);
        let mut strikes = [0u32; 2];

        let report = strike(hero, villain, hero_attack);
        self.log.push(MoveLogEntry::from_report(round, Side::Hero, &report));
        strikes[Side::Hero.index()] += 1;
        reports.push(report);

        if villain.is_alive() {
            let report = strike(villain, hero, villain_attack);
            self.log.push(MoveLogEntry::from_report(round, Side::Villain, &report));
            strikes[Side::Villain.index()] += 1;
            reports.push(report);
        }

        let hero_snapshot = hero.clone();
        let villain_snapshot = villain.clone();
        let round_complete = hero_snapshot.is_defeated() || villain_snapshot.is_defeated();

        let mut record = self
            .rounds
            .pop()
            .unwrap_or_else(|| RoundRecord::open(round, hero_snapshot.id, villain_snapshot.id));
        record.strikes[0] += strikes[0];
        record.strikes[1] += strikes[1];

        if round_complete {
            for fighter in [&hero_snapshot, &villain_snapshot] {
                if fighter.is_defeated() {
                    record.defeated.push(fighter.id);
                    self.cursors[fighter.side.index()] += 1;
                }
            }
            let survivor = [&hero_snapshot, &villain_snapshot]
                .into_iter()
                .find(|f| f.is_alive());
            record.winner = survivor.map(|f| f.side);
            record.winner_health = survivor.map_or(0, |f| f.health);
            record.status = RoundStatus::Done;

            let last = round >= self.max_rounds
                || self.remaining(Side::Hero) == 0
                || self.remaining(Side::Villain) == 0;
            self.phase = self.transition(PhaseEvent::RoundDecided { round, last })?;
        }

        self.rounds.push(record.clone());
        let battle_finished = self.is_finished();

        Ok(RoundOutcome {
            battle_id: self.battle_id.clone(),
            round,
            reports,
            hero: hero_snapshot,
            villain: villain_snapshot,
            record,
            round_complete,
            battle_finished,
            outcome: battle_finished.then(|| self.standing()),
        })
    }

    /// Final standings; only available once the battle is finished.
    pub fn final_results(&self) -> Result<FinalResults, RoundError> {
        if !self.is_finished() {
            return Err(RoundError::BattleNotFinished);
        }
        Ok(FinalResults {
            battle_id: self.battle_id.clone(),
            outcome: self.standing(),
            round_wins: self.round_wins(),
            rounds: self.rounds.clone(),
            progression: self.progression_updates(),
        })
    }

    /// Power and experience of every participant, for the catalog to persist.
    pub fn progression_updates(&self) -> Vec<ProgressionUpdate> {
        self.rosters
            .iter()
            .flat_map(|roster| roster.iter().map(ProgressionUpdate::from))
            .collect()
    }

    fn transition(&self, event: PhaseEvent) -> Result<BattlePhase, RoundError> {
        self.phase
            .advance(event)
            .ok_or(RoundError::InvalidTransition {
                phase: self.phase,
                event,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainError, ErrorKind};
    use crate::state::CharacterId;

    fn fighter(id: u32, side: Side) -> CombatState {
        CombatState::new(CharacterId(id), side)
    }

    fn duel() -> BattleState {
        BattleState::new(
            BattleId::new("duel"),
            vec![fighter(1, Side::Hero)],
            vec![fighter(11, Side::Villain)],
            &BattleConfig::default(),
        )
        .unwrap()
    }

    fn team(villain_health: u32) -> BattleState {
        let heroes = (1..=3).map(|id| fighter(id, Side::Hero).with_power(100)).collect();
        let villains = (11..=13)
            .map(|id| fighter(id, Side::Villain).with_shield(0).with_health(villain_health))
            .collect();
        BattleState::new(BattleId::new("team"), heroes, villains, &BattleConfig::default()).unwrap()
    }

    #[test]
    fn first_exchange_activates_round_one() {
        let mut battle = duel();
        let outcome = battle
            .resolve_round(1, AttackKind::Basic, AttackKind::Basic)
            .unwrap();

        assert_eq!(outcome.reports.len(), 2);
        assert_eq!(outcome.villain.shield, 178);
        assert_eq!(outcome.hero.shield, 178);
        assert!(!outcome.round_complete);
        assert_eq!(battle.phase, BattlePhase::Active(1));
        assert_eq!(battle.log.len(), 2);
        assert_eq!(battle.rounds.len(), 1);
        assert_eq!(battle.rounds[0].strikes, [1, 1]);
    }

    #[test]
    fn round_two_waits_for_round_one() {
        let mut battle = duel();
        for _ in 0..3 {
            let err = battle
                .resolve_round(2, AttackKind::Basic, AttackKind::Basic)
                .unwrap_err();
            assert_eq!(
                err,
                RoundError::RoundOutOfSequence {
                    requested: 2,
                    expected: 1
                }
            );
            assert_eq!(err.kind(), ErrorKind::StateConflict);
        }
        assert_eq!(battle.phase, BattlePhase::NotStarted);
        assert!(battle.log.is_empty());
    }

    #[test]
    fn finishing_blow_completes_round_and_advances_cursor() {
        let mut battle = team(10);
        let outcome = battle
            .resolve_round(1, AttackKind::Basic, AttackKind::Critical)
            .unwrap();

        assert!(outcome.round_complete);
        assert!(!outcome.battle_finished);
        assert_eq!(outcome.reports.len(), 1);
        assert_eq!(outcome.reports[0].experience_gained, 20);
        assert_eq!(outcome.record.winner, Some(Side::Hero));
        assert_eq!(outcome.record.winner_id(), Some(CharacterId(1)));
        assert_eq!(outcome.record.defeated, vec![CharacterId(11)]);
        assert_eq!(battle.phase, BattlePhase::Done(1));
        assert_eq!(battle.active(Side::Villain).map(|f| f.id), Some(CharacterId(12)));
        assert_eq!(battle.active(Side::Hero).map(|f| f.id), Some(CharacterId(1)));
    }

    #[test]
    fn done_round_is_rejected_every_time() {
        let mut battle = team(10);
        battle
            .resolve_round(1, AttackKind::Basic, AttackKind::Basic)
            .unwrap();
        let before = battle.clone();

        for _ in 0..2 {
            let err = battle
                .resolve_round(1, AttackKind::Critical, AttackKind::Critical)
                .unwrap_err();
            assert_eq!(err, RoundError::RoundAlreadyDone { round: 1 });
        }
        assert_eq!(battle, before);
    }

    #[test]
    fn battle_finishes_after_last_round() {
        let mut battle = team(10);
        for round in 1..=3 {
            let outcome = battle
                .resolve_round(round, AttackKind::Basic, AttackKind::Basic)
                .unwrap();
            assert!(outcome.round_complete);
        }

        assert!(battle.is_finished());
        assert_eq!(battle.round_wins(), [3, 0]);
        let err = battle
            .resolve_round(3, AttackKind::Basic, AttackKind::Basic)
            .unwrap_err();
        assert_eq!(err, RoundError::BattleFinished);

        let results = battle.final_results().unwrap();
        assert_eq!(results.outcome, BattleOutcome::Victory(Side::Hero));
        assert_eq!(results.rounds.len(), 3);
        assert_eq!(results.progression.len(), 6);
    }

    #[test]
    fn exhausted_roster_ends_battle_early() {
        let mut battle = duel();
        battle.rosters[1][0] = fighter(11, Side::Villain).with_shield(0).with_health(5);
        let outcome = battle
            .resolve_round(1, AttackKind::Basic, AttackKind::Basic)
            .unwrap();

        assert!(outcome.battle_finished);
        assert_eq!(outcome.outcome, Some(BattleOutcome::Victory(Side::Hero)));
        assert_eq!(battle.phase, BattlePhase::Finished(1));
    }

    #[test]
    fn results_require_finished_battle() {
        let battle = duel();
        let err = battle.final_results().unwrap_err();
        assert_eq!(err, RoundError::BattleNotFinished);
        assert_eq!(err.kind(), ErrorKind::StateConflict);
    }

    #[test]
    fn round_outside_range_is_invalid() {
        let mut battle = duel();
        let err = battle
            .resolve_round(0, AttackKind::Basic, AttackKind::Basic)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        let err = battle
            .resolve_round(4, AttackKind::Basic, AttackKind::Basic)
            .unwrap_err();
        assert_eq!(err, RoundError::InvalidRound { round: 4, max: 3 });
    }

    #[test]
    fn survivor_carries_damage_into_next_round() {
        let heroes = vec![fighter(1, Side::Hero), fighter(2, Side::Hero)];
        let villains = vec![
            fighter(11, Side::Villain).with_shield(0).with_health(30),
            fighter(12, Side::Villain),
        ];
        let mut battle =
            BattleState::new(BattleId::new("carry"), heroes, villains, &BattleConfig::default())
                .unwrap();

        // 22 damage, villain replies with 22 into the hero's shield
        battle
            .resolve_round(1, AttackKind::Basic, AttackKind::Basic)
            .unwrap();
        let outcome = battle
            .resolve_round(1, AttackKind::Basic, AttackKind::Basic)
            .unwrap();
        assert!(outcome.round_complete);
        assert_eq!(outcome.record.strikes, [2, 1]);

        let carried = battle.active(Side::Hero).unwrap();
        assert_eq!(carried.id, CharacterId(1));
        assert_eq!(carried.shield, 178);

        let outcome = battle
            .resolve_round(2, AttackKind::Basic, AttackKind::Basic)
            .unwrap();
        assert_eq!(outcome.villain.id, CharacterId(12));
        assert_eq!(outcome.hero.shield, 156);
    }
}
