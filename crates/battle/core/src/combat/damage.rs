//! Damage calculation and application.

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate final damage from a base damage and the attacker's power.
///
/// # Formula
///
/// ```text
/// extra = base × power × 0.1
/// total = base + extra
/// ```
///
/// # Rounding
///
/// The total is computed exactly in tenths (`base × (10 + power)`), so the
/// fractional part is always a whole number of tenths. A fraction strictly
/// greater than one half rounds up; anything else, including exactly one
/// half, rounds down.
///
/// # Examples
///
/// ```
/// use battle_core::combat::compute_damage;
///
/// assert_eq!(compute_damage(20, 1), 22);
/// assert_eq!(compute_damage(5, 1), 5); // 5.5 rounds down
/// assert_eq!(compute_damage(7, 1), 8); // 7.7 rounds up
/// ```
pub fn compute_damage(base_damage: u32, power: u32) -> u32 {
    let tenths = base_damage as u64 * (10 + power as u64);
    let whole = tenths / 10;
    let fraction = tenths % 10;

    let total = if fraction > 5 { whole + 1 } else { whole };
    total.min(u32::MAX as u64) as u32
}

// ============================================================================
// Damage Application
// ============================================================================

/// How an amount of damage was split between shield and health.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageSplit {
    /// Damage absorbed by the shield.
    pub absorbed: u32,
    /// Damage that reduced health.
    pub to_health: u32,
    /// Damage beyond what health could take.
    pub overkill: u32,
}

impl DamageSplit {
    /// Total damage accounted for. Always equals the applied amount.
    pub fn total(&self) -> u32 {
        self.absorbed + self.to_health + self.overkill
    }
}

/// Apply damage to shield first, then health, clamping both at zero.
pub fn apply_damage(shield: &mut u32, health: &mut u32, damage: u32) -> DamageSplit {
    let absorbed = damage.min(*shield);
    *shield -= absorbed;

    let residual = damage - absorbed;
    let to_health = residual.min(*health);
    *health -= to_health;

    DamageSplit {
        absorbed,
        to_health,
        overkill: residual - to_health,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_one_basic_attack() {
        // 20 + 20 × 0.1 = 22.0
        assert_eq!(compute_damage(20, 1), 22);
    }

    #[test]
    fn rounding_law() {
        // 5 × 1.1 = 5.5 → 5
        assert_eq!(compute_damage(5, 1), 5);
        // 7 × 1.1 = 7.7 → 8
        assert_eq!(compute_damage(7, 1), 8);
        // 3 × 1.1 = 3.3 → 3
        assert_eq!(compute_damage(3, 1), 3);
        // 60 × 11 = 660.0
        assert_eq!(compute_damage(60, 100), 660);
    }

    #[test]
    fn monotonic_in_power() {
        for base in [1, 5, 20, 40, 60, 99] {
            let mut previous = 0;
            for power in 1..=100 {
                let damage = compute_damage(base, power);
                assert!(damage >= previous, "base {base} power {power}");
                previous = damage;
            }
        }
    }

    #[test]
    fn zero_base_deals_nothing() {
        assert_eq!(compute_damage(0, 100), 0);
    }

    #[test]
    fn shield_overflow_reaches_health() {
        let (mut shield, mut health) = (10, 200);
        let split = apply_damage(&mut shield, &mut health, 22);
        assert_eq!(shield, 0);
        assert_eq!(health, 188);
        assert_eq!(split.absorbed, 10);
        assert_eq!(split.to_health, 12);
        assert_eq!(split.total(), 22);
    }

    #[test]
    fn empty_shield_takes_full_damage_on_health() {
        let (mut shield, mut health) = (0, 30);
        let split = apply_damage(&mut shield, &mut health, 44);
        assert_eq!(health, 0);
        assert_eq!(split.to_health, 30);
        assert_eq!(split.overkill, 14);
        assert_eq!(split.total(), 44);
    }

    #[test]
    fn accounting_is_exact() {
        for damage in [0, 1, 22, 199, 200, 201, 399, 400, 401, 1_000] {
            let (mut shield, mut health) = (200, 200);
            let split = apply_damage(&mut shield, &mut health, damage);
            assert_eq!(split.total(), damage);
            assert_eq!(200 - shield, split.absorbed);
            assert_eq!(200 - health, split.to_health);
        }
    }
}
