/// Battle rules constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Number of rounds in a scripted (step-by-step) battle.
    pub scripted_rounds: u8,
    /// Round wins that end a tournament early.
    pub rounds_to_win: u8,
    /// Hard ceiling on tournament rounds.
    pub max_rounds: u8,
    /// Share of remaining health a tournament survivor keeps between rounds.
    pub carry_health_percent: u32,
    /// Exchanges after which an undecided duel is abandoned.
    pub max_duel_turns: u32,
}

impl BattleConfig {
    // ===== compile-time constants =====
    /// Participants per side in a team battle.
    pub const TEAM_SIZE: usize = 3;
    pub const MAX_HEALTH: u32 = 200;
    pub const MAX_SHIELD: u32 = 200;
    pub const MIN_POWER: u32 = 1;
    pub const MAX_POWER: u32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SCRIPTED_ROUNDS: u8 = 3;
    pub const DEFAULT_ROUNDS_TO_WIN: u8 = 3;
    pub const DEFAULT_MAX_ROUNDS: u8 = 7;
    pub const DEFAULT_CARRY_HEALTH_PERCENT: u32 = 50;
    pub const DEFAULT_MAX_DUEL_TURNS: u32 = 500;

    pub fn new() -> Self {
        Self {
            scripted_rounds: Self::DEFAULT_SCRIPTED_ROUNDS,
            rounds_to_win: Self::DEFAULT_ROUNDS_TO_WIN,
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            carry_health_percent: Self::DEFAULT_CARRY_HEALTH_PERCENT,
            max_duel_turns: Self::DEFAULT_MAX_DUEL_TURNS,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u8) -> Self {
        self.max_rounds = max_rounds.max(1);
        self
    }

    pub fn with_rounds_to_win(mut self, rounds_to_win: u8) -> Self {
        self.rounds_to_win = rounds_to_win.max(1);
        self
    }

    pub fn with_max_duel_turns(mut self, max_duel_turns: u32) -> Self {
        self.max_duel_turns = max_duel_turns.max(1);
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
