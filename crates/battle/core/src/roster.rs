//! Team rosters and roster validation.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::error::{DomainError, ErrorKind};
use crate::state::{CharacterId, CombatState, Side};

/// Ordered fighters of one side. Position 0 fights first.
pub type Roster = ArrayVec<CombatState, { BattleConfig::TEAM_SIZE }>;

/// Allowed roster sizes for a battle mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RosterSize {
    pub min: usize,
    pub max: usize,
}

impl RosterSize {
    /// Exactly one full team.
    pub const TEAM: RosterSize = RosterSize {
        min: BattleConfig::TEAM_SIZE,
        max: BattleConfig::TEAM_SIZE,
    };

    /// Anything from a single duelist up to a full team.
    pub const ANY: RosterSize = RosterSize {
        min: 1,
        max: BattleConfig::TEAM_SIZE,
    };

    pub const fn contains(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

/// Errors raised while validating a roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterError {
    #[error("{side} roster has {actual} members, expected {min}..={max}")]
    SizeOutOfRange {
        side: Side,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("{side} roster lists character {id} more than once")]
    Duplicate { side: Side, id: CharacterId },

    #[error("character {id} cannot fight on the {expected} side")]
    WrongSide { id: CharacterId, expected: Side },
}

impl DomainError for RosterError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SizeOutOfRange { .. } => "ROSTER_SIZE",
            Self::Duplicate { .. } => "ROSTER_DUPLICATE",
            Self::WrongSide { .. } => "ROSTER_WRONG_SIDE",
        }
    }
}

/// Validate size and uniqueness of a list of ids for one side.
pub fn validate_ids(side: Side, ids: &[CharacterId], size: RosterSize) -> Result<(), RosterError> {
    if !size.contains(ids.len()) {
        return Err(RosterError::SizeOutOfRange {
            side,
            min: size.min,
            max: size.max,
            actual: ids.len(),
        });
    }

    for (i, id) in ids.iter().enumerate() {
        if ids[..i].contains(id) {
            return Err(RosterError::Duplicate { side, id: *id });
        }
    }

    Ok(())
}

/// Build a validated roster for one side.
pub fn build_roster(
    side: Side,
    members: Vec<CombatState>,
    size: RosterSize,
) -> Result<Roster, RosterError> {
    let ids: Vec<CharacterId> = members.iter().map(|m| m.id).collect();
    validate_ids(side, &ids, size)?;

    if let Some(member) = members.iter().find(|m| m.side != side) {
        return Err(RosterError::WrongSide {
            id: member.id,
            expected: side,
        });
    }

    Ok(members.into_iter().collect())
}
