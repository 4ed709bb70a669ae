//! Data-driven content definitions and loaders.
//!
//! This crate houses static battle content and provides loaders for RON/TOML data files:
//! - Character catalog (data-driven via RON)
//! - Battle rules configuration (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in battle state.
//!
//! All loaders use battle-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, RosterLoader, default_roster};
