//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the rules engine, the catalog, and repositories so
//! callers can map any of them onto a response through [`ErrorKind`].
use battle_core::{
    AttackParseError, BattleId, CharacterId, DomainError, ErrorKind, RosterError, RoundError, Side,
};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Attack(#[from] AttackParseError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Round(#[from] RoundError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("character {0} not found")]
    CharacterNotFound(CharacterId),

    #[error("battle '{0}' not found")]
    BattleNotFound(BattleId),

    #[error("battle '{0}' already exists")]
    BattleExists(BattleId),

    #[error("invalid battle id '{0}': use 1-64 ASCII letters, digits, '-' or '_'")]
    InvalidBattleId(String),

    #[error("no teams have been registered")]
    TeamsNotRegistered,

    #[error("{side} order must list exactly the registered {side} team")]
    OrderMismatch { side: Side },
}

impl RuntimeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Attack(err) => err.kind(),
            Self::Roster(err) => err.kind(),
            Self::Round(err) => err.kind(),
            Self::Repository(_) => ErrorKind::Internal,
            Self::CharacterNotFound(_) | Self::BattleNotFound(_) => ErrorKind::NotFound,
            Self::BattleExists(_) => ErrorKind::StateConflict,
            Self::InvalidBattleId(_) | Self::TeamsNotRegistered | Self::OrderMismatch { .. } => {
                ErrorKind::Validation
            }
        }
    }
}

impl DomainError for RuntimeError {
    fn kind(&self) -> ErrorKind {
        RuntimeError::kind(self)
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Attack(err) => err.error_code(),
            Self::Roster(err) => err.error_code(),
            Self::Round(err) => err.error_code(),
            Self::Repository(_) => "REPOSITORY_FAILURE",
            Self::CharacterNotFound(_) => "CHARACTER_NOT_FOUND",
            Self::BattleNotFound(_) => "BATTLE_NOT_FOUND",
            Self::BattleExists(_) => "BATTLE_EXISTS",
            Self::InvalidBattleId(_) => "BATTLE_ID_INVALID",
            Self::TeamsNotRegistered => "TEAMS_NOT_REGISTERED",
            Self::OrderMismatch { .. } => "ORDER_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_wrapped_errors() {
        let err: RuntimeError = AttackParseError::Empty.into();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err: RuntimeError = RoundError::RoundAlreadyDone { round: 1 }.into();
        assert_eq!(err.kind(), ErrorKind::StateConflict);
        assert_eq!(err.error_code(), "ROUND_ALREADY_DONE");

        let err: RuntimeError = RepositoryError::LockPoisoned.into();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(!err.kind().is_client_error());
    }

    #[test]
    fn lookup_failures_are_not_found() {
        assert_eq!(
            RuntimeError::CharacterNotFound(CharacterId(99)).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            RuntimeError::BattleNotFound(BattleId::new("x")).to_string(),
            "battle 'x' not found"
        );
    }
}
