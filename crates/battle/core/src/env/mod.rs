//! Traits describing read-only data the engine consumes.
//!
//! Oracles expose the character catalog and deterministic randomness. The
//! engine never owns catalog data; it clones what it needs into
//! [`CombatState`](crate::state::CombatState) values at the start of a battle.
mod characters;
mod rng;

pub use characters::{CharacterOracle, CharacterProfile};
pub use rng::{PcgRng, RngOracle, compute_seed};
