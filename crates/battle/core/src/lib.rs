pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod progression;
pub mod roster;
pub mod round;
pub mod state;
pub mod tournament;

pub use combat::{
    AttackKind, AttackParseError, AttackReport, AttackTable, COMBO_BUTTONS, DamageSplit,
    MAX_COMBO_LEN, apply_attack, apply_damage, compute_damage, is_lethal, strike,
};
pub use config::BattleConfig;
pub use env::{CharacterOracle, CharacterProfile, PcgRng, RngOracle, compute_seed};
pub use error::{DomainError, ErrorKind};
pub use progression::{
    EXCHANGE_EXPERIENCE, FINISHING_EXPERIENCE, LevelProgress, ProgressionUpdate,
    attack_experience, grant_experience, level_threshold,
};
pub use roster::{Roster, RosterError, RosterSize, build_roster, validate_ids};
pub use round::{
    BattlePhase, BattleState, FinalResults, MoveLogEntry, PhaseEvent, RoundError, RoundOutcome,
    RoundRecord, RoundStatus,
};
pub use state::{BattleId, BattleOutcome, CharacterId, CombatState, Side};
pub use tournament::{
    DuelResult, DuelSlot, KindTally, TournamentResult, TournamentRound, TurnEntry, carry_health,
    simulate_duel, simulate_team_battle,
};
