//! Attack kinds, attack declarations and base damage tables.

use core::str::FromStr;

use crate::error::{DomainError, ErrorKind};

/// Buttons accepted in a combination declaration.
pub const COMBO_BUTTONS: [char; 4] = ['Y', 'X', 'A', 'B'];

/// Longest accepted button combination.
pub const MAX_COMBO_LEN: usize = 5;

/// Kind of attack a fighter performs on its turn.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AttackKind {
    Basic,
    Special,
    Critical,
}

impl AttackKind {
    pub const ALL: [AttackKind; 3] = [
        AttackKind::Basic,
        AttackKind::Special,
        AttackKind::Critical,
    ];

    /// Word token accepted for this kind in an attack declaration.
    pub const fn token(self) -> &'static str {
        match self {
            AttackKind::Basic => "basico",
            AttackKind::Special => "especial",
            AttackKind::Critical => "critico",
        }
    }

    /// Inclusive range of combination lengths that map to this kind.
    pub const fn combination_lengths(self) -> (usize, usize) {
        match self {
            AttackKind::Basic => (1, 1),
            AttackKind::Special => (2, 3),
            AttackKind::Critical => (4, MAX_COMBO_LEN),
        }
    }

    /// Maps a button combination length to a kind.
    pub const fn from_combination_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(AttackKind::Basic),
            2 | 3 => Some(AttackKind::Special),
            4..=MAX_COMBO_LEN => Some(AttackKind::Critical),
            _ => None,
        }
    }

    /// Maps a d100 roll (1-100) to a kind.
    ///
    /// ```text
    /// 1..=10   critical  (10%)
    /// 11..=35  special   (25%)
    /// 36..=100 basic     (65%)
    /// ```
    pub const fn from_roll(roll: u32) -> Self {
        match roll {
            0..=10 => AttackKind::Critical,
            11..=35 => AttackKind::Special,
            _ => AttackKind::Basic,
        }
    }

    /// Parses an attack declaration.
    ///
    /// Accepts the word tokens (`basico`, `especial`, `critico`) in any case,
    /// or a combination of 1-5 buttons from `Y`, `X`, `A`, `B` (any case).
    pub fn parse(declaration: &str) -> Result<Self, AttackParseError> {
        let token = declaration.trim();
        if token.is_empty() {
            return Err(AttackParseError::Empty);
        }

        for kind in Self::ALL {
            if token.eq_ignore_ascii_case(kind.token()) {
                return Ok(kind);
            }
        }

        let is_combo = token
            .chars()
            .all(|c| COMBO_BUTTONS.contains(&c.to_ascii_uppercase()));
        if !is_combo {
            return Err(AttackParseError::Unrecognized(token.to_string()));
        }

        let len = token.chars().count();
        Self::from_combination_len(len).ok_or(AttackParseError::ComboTooLong { len })
    }
}

impl FromStr for AttackKind {
    type Err = AttackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors produced while parsing an attack declaration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackParseError {
    #[error("attack declaration is empty")]
    Empty,

    #[error("button combination has {len} buttons, at most 5 are allowed")]
    ComboTooLong { len: usize },

    #[error("unrecognized attack declaration '{0}'")]
    Unrecognized(String),
}

impl DomainError for AttackParseError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "ATTACK_EMPTY",
            Self::ComboTooLong { .. } => "ATTACK_COMBO_TOO_LONG",
            Self::Unrecognized(_) => "ATTACK_UNRECOGNIZED",
        }
    }
}

/// Base damage per attack kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackTable {
    pub basic: u32,
    pub special: u32,
    pub critical: u32,
}

impl AttackTable {
    pub const DEFAULT_BASIC: u32 = 20;
    pub const DEFAULT_SPECIAL: u32 = 40;
    pub const DEFAULT_CRITICAL: u32 = 60;

    pub const fn new(basic: u32, special: u32, critical: u32) -> Self {
        Self {
            basic,
            special,
            critical,
        }
    }

    pub const fn base_damage(&self, kind: AttackKind) -> u32 {
        match kind {
            AttackKind::Basic => self.basic,
            AttackKind::Special => self.special,
            AttackKind::Critical => self.critical,
        }
    }

    /// Base damage for a raw declaration; unrecognized declarations deal 0.
    pub fn base_damage_for_token(&self, declaration: &str) -> u32 {
        AttackKind::parse(declaration)
            .map(|kind| self.base_damage(kind))
            .unwrap_or(0)
    }
}

impl Default for AttackTable {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_BASIC,
            Self::DEFAULT_SPECIAL,
            Self::DEFAULT_CRITICAL,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_tokens_are_case_insensitive() {
        assert_eq!(AttackKind::parse("basico"), Ok(AttackKind::Basic));
        assert_eq!(AttackKind::parse("ESPECIAL"), Ok(AttackKind::Special));
        assert_eq!(AttackKind::parse("  Critico "), Ok(AttackKind::Critical));
    }

    #[test]
    fn combination_length_selects_kind() {
        assert_eq!(AttackKind::parse("Y"), Ok(AttackKind::Basic));
        assert_eq!(AttackKind::parse("XA"), Ok(AttackKind::Special));
        assert_eq!(AttackKind::parse("yab"), Ok(AttackKind::Special));
        assert_eq!(AttackKind::parse("YXAB"), Ok(AttackKind::Critical));
        assert_eq!(AttackKind::parse("BBBBB"), Ok(AttackKind::Critical));
    }

    #[test]
    fn rejects_bad_declarations() {
        assert_eq!(AttackKind::parse(""), Err(AttackParseError::Empty));
        assert_eq!(
            AttackKind::parse("YXABYX"),
            Err(AttackParseError::ComboTooLong { len: 6 })
        );
        assert_eq!(
            AttackKind::parse("YZ"),
            Err(AttackParseError::Unrecognized("YZ".to_string()))
        );
        let err = AttackKind::parse("punch").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.error_code(), "ATTACK_UNRECOGNIZED");
    }

    #[test]
    fn roll_distribution_boundaries() {
        assert_eq!(AttackKind::from_roll(1), AttackKind::Critical);
        assert_eq!(AttackKind::from_roll(10), AttackKind::Critical);
        assert_eq!(AttackKind::from_roll(11), AttackKind::Special);
        assert_eq!(AttackKind::from_roll(35), AttackKind::Special);
        assert_eq!(AttackKind::from_roll(36), AttackKind::Basic);
        assert_eq!(AttackKind::from_roll(100), AttackKind::Basic);

        let criticals = (1..=100).filter(|r| AttackKind::from_roll(*r) == AttackKind::Critical);
        let specials = (1..=100).filter(|r| AttackKind::from_roll(*r) == AttackKind::Special);
        assert_eq!(criticals.count(), 10);
        assert_eq!(specials.count(), 25);
    }

    #[test]
    fn unknown_token_deals_no_damage() {
        let table = AttackTable::default();
        assert_eq!(table.base_damage_for_token("critico"), 60);
        assert_eq!(table.base_damage_for_token("XA"), 40);
        assert_eq!(table.base_damage_for_token("kick"), 0);
    }
}
