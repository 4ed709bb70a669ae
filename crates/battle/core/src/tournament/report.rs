use crate::combat::AttackKind;
use crate::progression::ProgressionUpdate;
use crate::state::{BattleOutcome, CharacterId, Side};

/// Attacks thrown by one fighter, broken down by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KindTally {
    pub basic: u32,
    pub special: u32,
    pub critical: u32,
}

impl KindTally {
    pub fn record(&mut self, kind: AttackKind) {
        match kind {
            AttackKind::Basic => self.basic += 1,
            AttackKind::Special => self.special += 1,
            AttackKind::Critical => self.critical += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.basic + self.special + self.critical
    }
}

/// One attack inside a duel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnEntry {
    pub turn: u32,
    pub side: Side,
    pub attacker: CharacterId,
    pub kind: AttackKind,
    pub roll: u32,
    pub damage: u32,
    pub defender_shield: u32,
    pub defender_health: u32,
}

/// Outcome of a single 1v1 duel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelResult {
    pub hero: CharacterId,
    pub villain: CharacterId,
    /// `None` when the turn cap was hit with both fighters standing.
    pub winner: Option<Side>,
    pub turns: u32,
    /// Damage absorbed by shield plus damage to health, per side.
    pub damage: [u32; 2],
    pub tallies: [KindTally; 2],
    /// Health left after the duel, before any carry-over penalty.
    pub health_after: [u32; 2],
    pub log: Vec<TurnEntry>,
    /// Power and experience of both fighters after the duel (`[hero, villain]`).
    pub progression: Vec<ProgressionUpdate>,
}

impl DuelResult {
    pub fn moves(&self) -> [u32; 2] {
        [self.tallies[0].total(), self.tallies[1].total()]
    }
}

/// Breakdown of one tournament round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentRound {
    pub round: u8,
    pub duels: Vec<DuelResult>,
    /// Duels won per side this round.
    pub duel_wins: [u32; 2],
    /// `None` when both sides won the same number of duels.
    pub winner: Option<Side>,
    /// Fighters still standing after the round, per side.
    pub survivors: [Vec<CharacterId>; 2],
    pub damage: [u32; 2],
    pub moves: [u32; 2],
    /// Round wins per side after this round.
    pub score: [u8; 2],
}

/// Complete result of a team tournament.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentResult {
    pub seed: u64,
    pub outcome: BattleOutcome,
    pub final_score: [u8; 2],
    pub rounds: Vec<TournamentRound>,
    pub progression: Vec<ProgressionUpdate>,
}

impl TournamentResult {
    pub fn winner(&self) -> Option<Side> {
        self.outcome.winner()
    }
}
