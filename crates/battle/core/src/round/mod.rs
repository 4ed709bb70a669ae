//! Scripted, round-by-round battles.
//!
//! A [`BattleState`] is driven one exchange at a time through
//! [`BattleState::resolve_round`]. Every submission goes through the same
//! [`BattlePhase::advance`] transition function, so rounds are strictly
//! ordered and a decided round can never be replayed.
mod error;
mod phase;
mod record;
mod state;

pub use error::RoundError;
pub use phase::{BattlePhase, PhaseEvent};
pub use record::{FinalResults, MoveLogEntry, RoundOutcome, RoundRecord, RoundStatus};
pub use state::BattleState;
