//! Repository contracts for saving and loading battles between calls.

use battle_core::{BattleId, ProgressionUpdate};

use super::error::Result;
use super::types::{StoredBattle, TeamRegistration};

/// Repository for scripted battles, pending team registrations and the
/// power/experience characters have earned.
///
/// The service loads a battle, mutates it through the round state machine and
/// saves it back; implementations only need to store whole records.
pub trait BattleRepository: Send + Sync {
    /// Save a battle, replacing any previous record with the same id.
    fn save_battle(&self, battle: &StoredBattle) -> Result<()>;

    /// Load a battle by id.
    fn load_battle(&self, id: &BattleId) -> Result<Option<StoredBattle>>;

    /// Delete a battle. Deleting an unknown id is not an error.
    fn delete_battle(&self, id: &BattleId) -> Result<()>;

    /// List all stored battle ids in ascending order.
    fn list_battles(&self) -> Result<Vec<BattleId>>;

    /// Check if a battle exists
    fn battle_exists(&self, id: &BattleId) -> Result<bool> {
        Ok(self.load_battle(id)?.is_some())
    }

    /// Replace the pending team registration.
    fn save_teams(&self, teams: &TeamRegistration) -> Result<()>;

    /// Load the pending team registration, if any.
    fn load_teams(&self) -> Result<Option<TeamRegistration>>;

    /// Drop the pending team registration.
    fn clear_teams(&self) -> Result<()>;

    /// Merge progression results, replacing earlier entries for the same id.
    fn save_progression(&self, updates: &[ProgressionUpdate]) -> Result<()>;

    /// All stored progression, ordered by character id.
    fn load_progression(&self) -> Result<Vec<ProgressionUpdate>>;
}
