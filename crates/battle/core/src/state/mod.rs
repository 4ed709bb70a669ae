//! Combat state of battle participants.
//!
//! [`CombatState`] is the transient, mutable condition of one fighter during a
//! battle. It is derived from a catalog [`CharacterProfile`](crate::env::CharacterProfile)
//! and never written back to the catalog; only the progression fields
//! (`power`, `experience`) are reported back to the caller for persistence.
mod combatant;
mod types;

pub use combatant::CombatState;
pub use types::{BattleId, BattleOutcome, CharacterId, Side};
