use crate::error::{DomainError, ErrorKind};
use crate::state::Side;

use super::phase::{BattlePhase, PhaseEvent};

/// Errors raised by the scripted round state machine.
///
/// None of these mutate the battle: a rejected submission leaves the state
/// exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("battle is already finished")]
    BattleFinished,

    #[error("round {round} is already done")]
    RoundAlreadyDone { round: u8 },

    #[error("round {requested} requested but round {expected} is not done yet")]
    RoundOutOfSequence { requested: u8, expected: u8 },

    #[error("round {round} is outside 1..={max}")]
    InvalidRound { round: u8, max: u8 },

    #[error("battle is not finished yet")]
    BattleNotFinished,

    #[error("{side} side has no fighter left")]
    NoActiveFighter { side: Side },

    #[error("cannot apply {event:?} while {phase}")]
    InvalidTransition { phase: BattlePhase, event: PhaseEvent },
}

impl DomainError for RoundError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRound { .. } => ErrorKind::Validation,
            Self::NoActiveFighter { .. } | Self::InvalidTransition { .. } => ErrorKind::Internal,
            Self::BattleFinished
            | Self::RoundAlreadyDone { .. }
            | Self::RoundOutOfSequence { .. }
            | Self::BattleNotFinished => ErrorKind::StateConflict,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BattleFinished => "ROUND_BATTLE_FINISHED",
            Self::RoundAlreadyDone { .. } => "ROUND_ALREADY_DONE",
            Self::RoundOutOfSequence { .. } => "ROUND_OUT_OF_SEQUENCE",
            Self::InvalidRound { .. } => "ROUND_INVALID",
            Self::BattleNotFinished => "ROUND_BATTLE_NOT_FINISHED",
            Self::NoActiveFighter { .. } => "ROUND_NO_ACTIVE_FIGHTER",
            Self::InvalidTransition { .. } => "ROUND_INVALID_TRANSITION",
        }
    }
}
