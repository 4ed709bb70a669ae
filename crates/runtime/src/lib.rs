//! Service layer for the hero/villain battle engine.
//!
//! This crate wires the pure rules in `battle-core` to catalog data and
//! storage. Consumers construct a [`BattleService`] with a character oracle
//! and a battle repository, then call it once per request.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the request-level operations
//! - [`api`] exposes the error types downstream clients handle
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod oracle;
pub mod repository;
pub mod service;

pub use api::{RepositoryError, Result, RuntimeError};
pub use oracle::CharacterOracleImpl;
pub use repository::{
    BattleRepository, FileBattleRepository, InMemoryBattleRepo, StoredBattle, TeamRegistration,
};
pub use service::{
    AttackCatalogEntry, BattleService, BattleSummary, FighterSummary, MAX_BATTLE_ID_LEN,
};
