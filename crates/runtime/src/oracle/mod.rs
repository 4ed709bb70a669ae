//! Runtime implementations of the read-only oracles `battle-core` consumes.
//!
//! The catalog is immutable while battles run; dynamic state lives in
//! repositories. Progression results are handed back to the caller, which
//! decides whether to fold them into the catalog.
mod characters;

pub use characters::CharacterOracleImpl;
