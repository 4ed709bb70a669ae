//! Combat resolution system.
//!
//! Pure functions that turn an attack declaration into damage and apply it.
//!
//! # Core Functions
//!
//! - `AttackKind::parse`: declaration token or button combination → attack kind
//! - `compute_damage`: base damage + attacker power → final damage
//! - `apply_damage`: shield-then-health reduction (clamped to 0)
//! - `apply_attack`: full resolution including attacker experience

pub mod attack;
pub mod damage;
pub mod resolve;

pub use attack::{AttackKind, AttackParseError, AttackTable, COMBO_BUTTONS, MAX_COMBO_LEN};
pub use damage::{DamageSplit, apply_damage, compute_damage};
pub use resolve::{AttackReport, apply_attack, is_lethal, strike};
