//! File-based BattleRepository implementation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use battle_core::{BattleId, ProgressionUpdate};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{BattleRepository, RepositoryError, Result, StoredBattle, TeamRegistration};

const TEAMS_FILE: &str = "teams.json";
const PROGRESSION_FILE: &str = "progression.json";

/// File-based implementation of BattleRepository.
///
/// # File Format
///
/// Each battle is stored as `battles/{battle_id}.json`; the pending team
/// registration lives in `teams.json` and earned power/experience in
/// `progression.json`. Writes go to a temp file first and
/// are moved into place with a rename, so readers never see a partial record.
pub struct FileBattleRepository {
    base_dir: PathBuf,
}

impl FileBattleRepository {
    /// Create a new file-based battle repository rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(base_dir.join("battles")).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a battle file.
    fn battle_path(&self, id: &BattleId) -> PathBuf {
        self.base_dir
            .join("battles")
            .join(format!("{}.json", id.as_str()))
    }

    fn teams_path(&self) -> PathBuf {
        self.base_dir.join(TEAMS_FILE)
    }

    fn progression_path(&self) -> PathBuf {
        self.base_dir.join(PROGRESSION_FILE)
    }

    fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
        let temp_path = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(value)?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, path).map_err(RepositoryError::Io)?;
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(path).map_err(RepositoryError::Io)?;
        let value = serde_json::from_slice(&bytes).map_err(|e| {
            RepositoryError::CorruptedData(format!("{}: {}", path.display(), e))
        })?;
        Ok(Some(value))
    }
}

impl BattleRepository for FileBattleRepository {
    fn save_battle(&self, battle: &StoredBattle) -> Result<()> {
        let path = self.battle_path(battle.id());
        Self::write_json(&path, battle)?;

        tracing::debug!("Saved battle[{}] to {}", battle.id(), path.display());

        Ok(())
    }

    fn load_battle(&self, id: &BattleId) -> Result<Option<StoredBattle>> {
        let path = self.battle_path(id);
        let battle: Option<StoredBattle> = Self::read_json(&path)?;

        if let Some(battle) = &battle {
            if battle.id() != id {
                return Err(RepositoryError::CorruptedData(format!(
                    "{} holds battle '{}'",
                    path.display(),
                    battle.id()
                )));
            }
            tracing::debug!("Loaded battle[{}] from {}", id, path.display());
        }

        Ok(battle)
    }

    fn delete_battle(&self, id: &BattleId) -> Result<()> {
        let path = self.battle_path(id);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted battle[{}]", id);
        }

        Ok(())
    }

    fn list_battles(&self) -> Result<Vec<BattleId>> {
        let mut ids = Vec::new();

        let entries = fs::read_dir(self.base_dir.join("battles")).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id) = filename.strip_suffix(".json")
            {
                ids.push(BattleId::new(id));
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }

    fn battle_exists(&self, id: &BattleId) -> Result<bool> {
        Ok(self.battle_path(id).exists())
    }

    fn save_teams(&self, teams: &TeamRegistration) -> Result<()> {
        Self::write_json(&self.teams_path(), teams)?;
        tracing::debug!(
            "Saved pending teams ({} heroes, {} villains)",
            teams.heroes.len(),
            teams.villains.len()
        );
        Ok(())
    }

    fn load_teams(&self) -> Result<Option<TeamRegistration>> {
        Self::read_json(&self.teams_path())
    }

    fn clear_teams(&self) -> Result<()> {
        let path = self.teams_path();
        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
        }
        Ok(())
    }

    fn save_progression(&self, updates: &[ProgressionUpdate]) -> Result<()> {
        let mut merged: BTreeMap<_, _> = self
            .load_progression()?
            .into_iter()
            .map(|update| (update.id, update))
            .collect();
        for update in updates {
            merged.insert(update.id, *update);
        }

        let records: Vec<ProgressionUpdate> = merged.into_values().collect();
        Self::write_json(&self.progression_path(), &records)?;
        tracing::debug!("Saved progression for {} characters", records.len());
        Ok(())
    }

    fn load_progression(&self) -> Result<Vec<ProgressionUpdate>> {
        Ok(Self::read_json(&self.progression_path())?.unwrap_or_default())
    }
}
