//! In-memory BattleRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use battle_core::{BattleId, CharacterId, ProgressionUpdate};

use super::{BattleRepository, RepositoryError, Result, StoredBattle, TeamRegistration};

/// In-memory implementation of BattleRepository.
///
/// Nothing survives the process; useful for tests and one-shot CLI runs.
#[derive(Default)]
pub struct InMemoryBattleRepo {
    battles: RwLock<BTreeMap<BattleId, StoredBattle>>,
    teams: RwLock<Option<TeamRegistration>>,
    progression: RwLock<BTreeMap<CharacterId, ProgressionUpdate>>,
}

impl InMemoryBattleRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BattleRepository for InMemoryBattleRepo {
    fn save_battle(&self, battle: &StoredBattle) -> Result<()> {
        let mut battles = self
            .battles
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        battles.insert(battle.id().clone(), battle.clone());
        Ok(())
    }

    fn load_battle(&self, id: &BattleId) -> Result<Option<StoredBattle>> {
        let battles = self
            .battles
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(battles.get(id).cloned())
    }

    fn delete_battle(&self, id: &BattleId) -> Result<()> {
        let mut battles = self
            .battles
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        battles.remove(id);
        Ok(())
    }

    fn list_battles(&self) -> Result<Vec<BattleId>> {
        let battles = self
            .battles
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(battles.keys().cloned().collect())
    }

    fn battle_exists(&self, id: &BattleId) -> Result<bool> {
        let battles = self
            .battles
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(battles.contains_key(id))
    }

    fn save_teams(&self, teams: &TeamRegistration) -> Result<()> {
        let mut slot = self
            .teams
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(teams.clone());
        Ok(())
    }

    fn load_teams(&self) -> Result<Option<TeamRegistration>> {
        let slot = self
            .teams
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slot.clone())
    }

    fn clear_teams(&self) -> Result<()> {
        let mut slot = self
            .teams
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }

    fn save_progression(&self, updates: &[ProgressionUpdate]) -> Result<()> {
        let mut progression = self
            .progression
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        for update in updates {
            progression.insert(update.id, *update);
        }
        Ok(())
    }

    fn load_progression(&self) -> Result<Vec<ProgressionUpdate>> {
        let progression = self
            .progression
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(progression.values().copied().collect())
    }
}
