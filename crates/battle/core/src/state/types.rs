use core::fmt;

/// Identifier of a character in the external catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for CharacterId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Identifier of a scripted battle, supplied by the caller or generated.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BattleId(pub String);

impl BattleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BattleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two opposing factions of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Hero,
    Villain,
}

impl Side {
    /// Index into per-side arrays (`[hero, villain]`).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Hero => 0,
            Side::Villain => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Hero => Side::Villain,
            Side::Villain => Side::Hero,
        }
    }
}

/// Final verdict of a battle or tournament.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BattleOutcome {
    Victory(Side),
    Draw,
}

impl BattleOutcome {
    /// Decide by comparing per-side tallies (`[hero, villain]`).
    pub fn from_tally(tally: [u32; 2]) -> Self {
        match tally[0].cmp(&tally[1]) {
            core::cmp::Ordering::Greater => Self::Victory(Side::Hero),
            core::cmp::Ordering::Less => Self::Victory(Side::Villain),
            core::cmp::Ordering::Equal => Self::Draw,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::Victory(side) => Some(*side),
            Self::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involution() {
        assert_eq!(Side::Hero.opponent(), Side::Villain);
        assert_eq!(Side::Hero.opponent().opponent(), Side::Hero);
        assert_eq!(Side::Villain.index(), 1);
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(Side::Villain.to_string(), "villain");
        assert_eq!(CharacterId(7).to_string(), "#7");
    }

    #[test]
    fn outcome_from_tally() {
        assert_eq!(BattleOutcome::from_tally([2, 1]), BattleOutcome::Victory(Side::Hero));
        assert_eq!(BattleOutcome::from_tally([0, 1]).winner(), Some(Side::Villain));
        assert_eq!(BattleOutcome::from_tally([1, 1]), BattleOutcome::Draw);
    }
}
