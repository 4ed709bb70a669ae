//! Battle service: the entry point external collaborators call into.
//!
//! [`BattleService`] validates identifiers against the catalog, clones
//! catalog profiles into combat states, drives the engine, and persists
//! scripted battles and earned progression through a [`BattleRepository`]. All calls are
//! synchronous and hold no state beyond the injected handles.
use std::collections::BTreeSet;
use std::sync::Arc;

use battle_core::{
    AttackKind, AttackTable, BattleConfig, BattleId, BattleOutcome, BattleState, CharacterId,
    CharacterOracle, CharacterProfile, CombatState, DuelResult, DuelSlot, FinalResults,
    MoveLogEntry, PcgRng, ProgressionUpdate, RosterError, RosterSize, RoundOutcome, RoundRecord,
    Side, TournamentResult, validate_ids,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};
use crate::repository::{BattleRepository, StoredBattle, TeamRegistration};

/// Longest accepted battle id.
pub const MAX_BATTLE_ID_LEN: usize = 64;

const ID_ATTEMPTS: usize = 8;

/// One accepted attack declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackCatalogEntry {
    pub kind: AttackKind,
    pub token: String,
    /// Inclusive range of button combination lengths.
    pub combination_lengths: (usize, usize),
    pub default_base_damage: u32,
}

/// One fighter in a battle summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterSummary {
    pub id: CharacterId,
    pub name: String,
    pub health: u32,
    pub shield: u32,
    pub power: u32,
    pub experience: u64,
    pub defeated: bool,
}

/// Snapshot of a scripted battle for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSummary {
    pub battle_id: BattleId,
    pub phase: String,
    pub current_round: u8,
    pub max_rounds: u8,
    pub heroes: Vec<FighterSummary>,
    pub villains: Vec<FighterSummary>,
    /// Fighter currently up for each side (`[hero, villain]`).
    pub active: [Option<CharacterId>; 2],
    pub round_wins: [u8; 2],
    pub rounds: Vec<RoundRecord>,
    pub finished: bool,
    pub outcome: Option<BattleOutcome>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Synchronous facade over the battle engine.
pub struct BattleService {
    oracle: Arc<dyn CharacterOracle>,
    repo: Arc<dyn BattleRepository>,
    config: BattleConfig,
    rng: PcgRng,
}

impl BattleService {
    pub fn new(
        oracle: Arc<dyn CharacterOracle>,
        repo: Arc<dyn BattleRepository>,
        config: BattleConfig,
    ) -> Self {
        Self {
            oracle,
            repo,
            config,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Accepted attack tokens and combination lengths.
    pub fn attack_catalog(&self) -> Vec<AttackCatalogEntry> {
        let defaults = AttackTable::default();
        AttackKind::ALL
            .into_iter()
            .map(|kind| AttackCatalogEntry {
                kind,
                token: kind.token().to_string(),
                combination_lengths: kind.combination_lengths(),
                default_base_damage: defaults.base_damage(kind),
            })
            .collect()
    }

    /// Look up a catalog profile with its earned power and experience.
    pub fn character(&self, id: CharacterId) -> Result<CharacterProfile> {
        let progression = self.repo.load_progression()?;
        self.profile(id, &progression)
    }

    /// The whole catalog with earned power and experience, ordered by id.
    pub fn characters(&self) -> Result<Vec<CharacterProfile>> {
        let progression = self.repo.load_progression()?;
        let mut profiles = self.oracle.characters();
        for profile in &mut profiles {
            if let Some(update) = progression.iter().find(|u| u.id == profile.id) {
                update.apply_to(profile);
            }
        }
        Ok(profiles)
    }

    fn profile(
        &self,
        id: CharacterId,
        progression: &[ProgressionUpdate],
    ) -> Result<CharacterProfile> {
        let mut profile = self
            .oracle
            .character(id)
            .ok_or(RuntimeError::CharacterNotFound(id))?;
        if let Some(update) = progression.iter().find(|u| u.id == id) {
            update.apply_to(&mut profile);
        }
        Ok(profile)
    }

    /// Clone a profile into a fresh combat state for `side`.
    fn combatant(
        &self,
        id: CharacterId,
        side: Side,
        progression: &[ProgressionUpdate],
    ) -> Result<CombatState> {
        let profile = self.profile(id, progression)?;
        if profile.side != side {
            return Err(RosterError::WrongSide { id, expected: side }.into());
        }
        Ok(CombatState::from_profile(&profile))
    }

    fn combatants(&self, ids: &[CharacterId], side: Side) -> Result<Vec<CombatState>> {
        let progression = self.repo.load_progression()?;
        ids.iter()
            .map(|&id| self.combatant(id, side, &progression))
            .collect()
    }

    /// Persists the power and experience fighters earned in a battle.
    fn record_progression(&self, updates: &[ProgressionUpdate]) -> Result<()> {
        self.repo.save_progression(updates)?;
        tracing::debug!(characters = updates.len(), "Progression recorded");
        Ok(())
    }

    // ========================================================================
    // Instant simulations
    // ========================================================================

    /// Runs a 3v3 tournament with a fresh random seed.
    pub fn simulate_team_battle(
        &self,
        hero_ids: &[CharacterId],
        villain_ids: &[CharacterId],
    ) -> Result<TournamentResult> {
        self.simulate_team_battle_with_seed(hero_ids, villain_ids, rand::random())
    }

    /// Runs a 3v3 tournament; the same seed always yields the same result.
    pub fn simulate_team_battle_with_seed(
        &self,
        hero_ids: &[CharacterId],
        villain_ids: &[CharacterId],
        seed: u64,
    ) -> Result<TournamentResult> {
        validate_ids(Side::Hero, hero_ids, RosterSize::TEAM)?;
        validate_ids(Side::Villain, villain_ids, RosterSize::TEAM)?;
        let heroes = self.combatants(hero_ids, Side::Hero)?;
        let villains = self.combatants(villain_ids, Side::Villain)?;

        let result =
            battle_core::simulate_team_battle(heroes, villains, &self.config, &self.rng, seed)?;
        self.record_progression(&result.progression)?;

        tracing::info!(
            seed,
            rounds = result.rounds.len(),
            score = ?result.final_score,
            outcome = ?result.outcome,
            "Team battle simulated"
        );
        Ok(result)
    }

    /// Runs a standalone 1v1 duel with a fresh random seed.
    pub fn simulate_duel(
        &self,
        hero_id: CharacterId,
        villain_id: CharacterId,
    ) -> Result<DuelResult> {
        self.simulate_duel_with_seed(hero_id, villain_id, rand::random())
    }

    pub fn simulate_duel_with_seed(
        &self,
        hero_id: CharacterId,
        villain_id: CharacterId,
        seed: u64,
    ) -> Result<DuelResult> {
        let progression = self.repo.load_progression()?;
        let mut hero = self.combatant(hero_id, Side::Hero, &progression)?;
        let mut villain = self.combatant(villain_id, Side::Villain, &progression)?;

        let result = battle_core::simulate_duel(
            &mut hero,
            &mut villain,
            &self.rng,
            DuelSlot::standalone(seed),
            self.config.max_duel_turns,
        );
        self.record_progression(&result.progression)?;

        tracing::info!(
            seed,
            hero = %hero_id,
            villain = %villain_id,
            turns = result.turns,
            winner = ?result.winner,
            "Duel simulated"
        );
        Ok(result)
    }

    // ========================================================================
    // Scripted battles
    // ========================================================================

    /// Registers the teams for the next scripted battle, replacing any
    /// pending registration. A side may field one to three fighters.
    pub fn register_teams(
        &self,
        hero_ids: Vec<CharacterId>,
        villain_ids: Vec<CharacterId>,
    ) -> Result<TeamRegistration> {
        validate_ids(Side::Hero, &hero_ids, RosterSize::ANY)?;
        validate_ids(Side::Villain, &villain_ids, RosterSize::ANY)?;
        self.combatants(&hero_ids, Side::Hero)?;
        self.combatants(&villain_ids, Side::Villain)?;

        let teams = TeamRegistration::new(hero_ids, villain_ids);
        self.repo.save_teams(&teams)?;

        tracing::info!(heroes = ?teams.heroes, villains = ?teams.villains, "Teams registered");
        Ok(teams)
    }

    /// Teams waiting for a fighting order.
    pub fn registered_teams(&self) -> Result<TeamRegistration> {
        self.repo
            .load_teams()?
            .ok_or(RuntimeError::TeamsNotRegistered)
    }

    /// Fixes the fighting order of the registered teams and creates the battle.
    ///
    /// An empty `battle_id` asks the service to generate one. The pending
    /// registration is consumed on success.
    pub fn register_order(
        &self,
        battle_id: &str,
        hero_order: Vec<CharacterId>,
        villain_order: Vec<CharacterId>,
    ) -> Result<BattleSummary> {
        let teams = self.registered_teams()?;
        ensure_permutation(Side::Hero, &teams.heroes, &hero_order)?;
        ensure_permutation(Side::Villain, &teams.villains, &villain_order)?;

        let battle_id = if battle_id.trim().is_empty() {
            self.generate_battle_id()?
        } else {
            let id = parse_battle_id(battle_id)?;
            if self.repo.battle_exists(&id)? {
                return Err(RuntimeError::BattleExists(id));
            }
            id
        };

        let heroes = self.combatants(&hero_order, Side::Hero)?;
        let villains = self.combatants(&villain_order, Side::Villain)?;
        let state = BattleState::new(battle_id.clone(), heroes, villains, &self.config)?;
        let stored = StoredBattle::new(state);

        self.repo.save_battle(&stored)?;
        self.repo.clear_teams()?;

        tracing::info!(battle = %battle_id, "Battle created");
        Ok(self.summarize(&stored))
    }

    /// Resolves one exchange of a scripted battle.
    ///
    /// Tokens are parsed before the battle is loaded; a rejected call never
    /// touches the stored battle.
    pub fn resolve_attack(
        &self,
        battle_id: &str,
        round: u8,
        hero_token: &str,
        villain_token: &str,
    ) -> Result<RoundOutcome> {
        let hero_attack = AttackKind::parse(hero_token)?;
        let villain_attack = AttackKind::parse(villain_token)?;
        let mut stored = self.load(battle_id)?;

        let outcome = match stored.state.resolve_round(round, hero_attack, villain_attack) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(battle = %stored.id(), round, error = %err, "Attack rejected");
                return Err(err.into());
            }
        };

        stored.touch();
        self.repo.save_battle(&stored)?;

        tracing::debug!(
            battle = %stored.id(),
            round,
            hero = %hero_attack,
            villain = %villain_attack,
            round_complete = outcome.round_complete,
            "Exchange resolved"
        );
        if outcome.battle_finished {
            self.record_progression(&stored.state.progression_updates())?;
            tracing::info!(battle = %stored.id(), outcome = ?outcome.outcome, "Battle finished");
        }
        Ok(outcome)
    }

    /// Full movement history of a battle.
    pub fn battle_log(&self, battle_id: &str) -> Result<Vec<MoveLogEntry>> {
        Ok(self.load(battle_id)?.state.log)
    }

    /// Final standings and progression; only for finished battles.
    pub fn round_results(&self, battle_id: &str) -> Result<FinalResults> {
        Ok(self.load(battle_id)?.state.final_results()?)
    }

    pub fn battle_summary(&self, battle_id: &str) -> Result<BattleSummary> {
        let stored = self.load(battle_id)?;
        Ok(self.summarize(&stored))
    }

    pub fn list_battles(&self) -> Result<Vec<BattleId>> {
        Ok(self.repo.list_battles()?)
    }

    pub fn delete_battle(&self, battle_id: &str) -> Result<()> {
        let id = parse_battle_id(battle_id)?;
        if !self.repo.battle_exists(&id)? {
            return Err(RuntimeError::BattleNotFound(id));
        }
        self.repo.delete_battle(&id)?;
        tracing::info!(battle = %id, "Battle deleted");
        Ok(())
    }

    fn load(&self, battle_id: &str) -> Result<StoredBattle> {
        let id = parse_battle_id(battle_id)?;
        self.repo
            .load_battle(&id)?
            .ok_or(RuntimeError::BattleNotFound(id))
    }

    fn generate_battle_id(&self) -> Result<BattleId> {
        for _ in 0..ID_ATTEMPTS {
            let id = BattleId::new(format!(
                "battle-{}-{:04x}",
                Utc::now().format("%Y%m%d%H%M%S"),
                rand::random::<u16>()
            ));
            if !self.repo.battle_exists(&id)? {
                return Ok(id);
            }
        }
        Err(RuntimeError::BattleExists(BattleId::new("battle-*")))
    }

    fn summarize(&self, stored: &StoredBattle) -> BattleSummary {
        let state = &stored.state;
        let fighters = |side: Side| {
            state.rosters[side.index()]
                .iter()
                .map(|fighter| FighterSummary {
                    id: fighter.id,
                    name: self
                        .oracle
                        .character(fighter.id)
                        .map(|p| p.label().to_string())
                        .unwrap_or_default(),
                    health: fighter.health,
                    shield: fighter.shield,
                    power: fighter.power,
                    experience: fighter.experience,
                    defeated: fighter.is_defeated(),
                })
                .collect::<Vec<_>>()
        };

        BattleSummary {
            battle_id: state.battle_id.clone(),
            phase: state.phase.to_string(),
            current_round: state.current_round,
            max_rounds: state.max_rounds,
            heroes: fighters(Side::Hero),
            villains: fighters(Side::Villain),
            active: [
                state.active(Side::Hero).map(|f| f.id),
                state.active(Side::Villain).map(|f| f.id),
            ],
            round_wins: state.round_wins(),
            rounds: state.rounds.clone(),
            finished: state.is_finished(),
            outcome: state.is_finished().then(|| state.standing()),
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

/// Battle ids double as file names, so only a safe alphabet is accepted.
fn parse_battle_id(raw: &str) -> Result<BattleId> {
    let id = raw.trim();
    let valid = !id.is_empty()
        && id.len() <= MAX_BATTLE_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(BattleId::new(id))
    } else {
        Err(RuntimeError::InvalidBattleId(raw.to_string()))
    }
}

fn ensure_permutation(side: Side, registered: &[CharacterId], order: &[CharacterId]) -> Result<()> {
    validate_ids(side, order, RosterSize::ANY)?;
    let expected: BTreeSet<_> = registered.iter().collect();
    let actual: BTreeSet<_> = order.iter().collect();
    if order.len() != registered.len() || expected != actual {
        return Err(RuntimeError::OrderMismatch { side });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battle_ids_are_restricted() {
        assert_eq!(parse_battle_id(" b-1_x ").unwrap(), BattleId::new("b-1_x"));
        assert!(parse_battle_id("../etc").is_err());
        assert!(parse_battle_id("").is_err());
        assert!(parse_battle_id(&"x".repeat(65)).is_err());
    }

    #[test]
    fn order_must_match_registration() {
        let registered = [CharacterId(1), CharacterId(2), CharacterId(3)];
        assert!(
            ensure_permutation(
                Side::Hero,
                &registered,
                &[CharacterId(3), CharacterId(1), CharacterId(2)]
            )
            .is_ok()
        );

        let err = ensure_permutation(
            Side::Hero,
            &registered,
            &[CharacterId(3), CharacterId(1), CharacterId(4)],
        )
        .unwrap_err();
        assert!(matches!(err, RuntimeError::OrderMismatch { side: Side::Hero }));

        let err = ensure_permutation(Side::Hero, &registered, &[CharacterId(1)]).unwrap_err();
        assert!(matches!(err, RuntimeError::OrderMismatch { .. }));

        let err = ensure_permutation(Side::Hero, &registered, &[]).unwrap_err();
        assert!(matches!(err, RuntimeError::Roster(_)));
    }
}
