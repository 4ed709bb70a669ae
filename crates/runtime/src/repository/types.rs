//! Records stored by battle repositories.

use battle_core::{BattleId, BattleState, CharacterId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scripted battle plus bookkeeping timestamps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBattle {
    pub state: BattleState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredBattle {
    pub fn new(state: BattleState) -> Self {
        let now = Utc::now();
        Self {
            state,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &BattleId {
        &self.state.battle_id
    }

    /// Marks the record as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Teams waiting for a fighting order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRegistration {
    pub heroes: Vec<CharacterId>,
    pub villains: Vec<CharacterId>,
    pub registered_at: DateTime<Utc>,
}

impl TeamRegistration {
    pub fn new(heroes: Vec<CharacterId>, villains: Vec<CharacterId>) -> Self {
        Self {
            heroes,
            villains,
            registered_at: Utc::now(),
        }
    }
}
