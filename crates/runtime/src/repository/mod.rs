//! Repository layer for battle data that changes between calls.
//!
//! Repositories hold scripted battles and pending team registrations.
//! The character catalog is static content and is served by oracles instead.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileBattleRepository;
pub use memory::InMemoryBattleRepo;
pub use traits::BattleRepository;
pub use types::{StoredBattle, TeamRegistration};
