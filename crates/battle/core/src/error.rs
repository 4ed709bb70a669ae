//! Common error infrastructure for battle-core.
//!
//! Domain-specific errors (e.g. [`AttackParseError`](crate::combat::AttackParseError),
//! [`RoundError`](crate::round::RoundError)) live next to the rules they guard.
//! This module provides the classification shared by all of them so callers can
//! map any failure onto a response without matching on every variant.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each rule set has its own error type with specific variants
//! - **Kind Classification**: Errors are categorized so the caller can pick a message
//! - **No Mutation**: A returned error never leaves partially applied state behind

/// Classification of a domain error.
///
/// - **Validation**: malformed input (bad attack token, wrong roster size)
/// - **NotFound**: a referenced character or battle does not exist
/// - **StateConflict**: the request is well formed but the battle is in the wrong state
/// - **Internal**: a collaborator (store, catalog) failed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Invalid input, should not be retried without changes.
    Validation,

    /// Referenced entity is unknown.
    NotFound,

    /// Request conflicts with the current battle state.
    ///
    /// Examples: round already finished, round submitted out of order.
    StateConflict,

    /// Failure in a collaborator, surfaced as a generic error.
    Internal,
}

impl ErrorKind {
    /// Returns a stable identifier for this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::StateConflict => "state_conflict",
            Self::Internal => "internal",
        }
    }

    /// Returns true if the caller supplied something wrong.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation | Self::NotFound | Self::StateConflict)
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify by what the caller has to do about it, not by impact
pub trait DomainError: core::fmt::Display + core::fmt::Debug {
    /// Returns the classification of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for tests and for stable machine-readable responses.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
