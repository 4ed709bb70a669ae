use core::fmt;

/// Lifecycle of a scripted battle.
///
/// ```text
/// NotStarted → Active(1) → Done(1) → Active(2) → … → Done(n) / Finished
/// ```
///
/// `Active(n)` absorbs any number of exchanges for round `n`; the round is
/// only decided once a fighter reaches zero health.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "phase", content = "round", rename_all = "snake_case"))]
pub enum BattlePhase {
    #[default]
    NotStarted,
    Active(u8),
    Done(u8),
    Finished(u8),
}

/// Input to the phase transition function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEvent {
    /// An exchange was submitted for `round`.
    Exchange { round: u8 },
    /// A fighter went down in `round`; `last` marks the end of the battle.
    RoundDecided { round: u8, last: bool },
}

impl BattlePhase {
    /// Applies `event`, returning the next phase or `None` if the event is
    /// not legal in the current phase.
    pub fn advance(self, event: PhaseEvent) -> Option<BattlePhase> {
        match (self, event) {
            (Self::NotStarted, PhaseEvent::Exchange { round: 1 }) => Some(Self::Active(1)),
            (Self::Active(n), PhaseEvent::Exchange { round }) if round == n => Some(self),
            (Self::Done(n), PhaseEvent::Exchange { round }) if round == n + 1 => {
                Some(Self::Active(round))
            }
            (Self::Active(n), PhaseEvent::RoundDecided { round, last }) if round == n => {
                Some(if last { Self::Finished(n) } else { Self::Done(n) })
            }
            _ => None,
        }
    }

    /// Round that the next submission must target, or `None` once finished.
    pub fn expected_round(self) -> Option<u8> {
        match self {
            Self::NotStarted => Some(1),
            Self::Active(n) => Some(n),
            Self::Done(n) => Some(n + 1),
            Self::Finished(_) => None,
        }
    }

    /// Highest round that has been decided.
    pub fn rounds_done(self) -> u8 {
        match self {
            Self::NotStarted | Self::Active(1) => 0,
            Self::Active(n) => n - 1,
            Self::Done(n) | Self::Finished(n) => n,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

impl fmt::Display for BattlePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => f.write_str("not started"),
            Self::Active(n) => write!(f, "round {n} active"),
            Self::Done(n) => write!(f, "round {n} done"),
            Self::Finished(n) => write!(f, "finished after round {n}"),
        }
    }
}
