use crate::combat::{AttackKind, AttackReport};
use crate::progression::ProgressionUpdate;
use crate::state::{BattleId, BattleOutcome, CharacterId, CombatState, Side};

/// Whether a round is still being fought.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundStatus {
    Active,
    Done,
}

/// Summary of one scripted round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRecord {
    pub round: u8,
    pub status: RoundStatus,
    pub hero: CharacterId,
    pub villain: CharacterId,
    /// `None` while active, or when both fighters went down together.
    pub winner: Option<Side>,
    pub defeated: Vec<CharacterId>,
    /// Health left on the surviving fighter (0 if nobody survived).
    pub winner_health: u32,
    /// Attacks thrown per side (`[hero, villain]`).
    pub strikes: [u32; 2],
}

impl RoundRecord {
    pub(crate) fn open(round: u8, hero: CharacterId, villain: CharacterId) -> Self {
        Self {
            round,
            status: RoundStatus::Active,
            hero,
            villain,
            winner: None,
            defeated: Vec::new(),
            winner_health: 0,
            strikes: [0; 2],
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == RoundStatus::Done
    }

    /// Id of the fighter who survived the round.
    pub fn winner_id(&self) -> Option<CharacterId> {
        self.winner.map(|side| match side {
            Side::Hero => self.hero,
            Side::Villain => self.villain,
        })
    }
}

/// One applied attack in the movement history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveLogEntry {
    pub round: u8,
    pub side: Side,
    pub attacker: CharacterId,
    pub defender: CharacterId,
    pub kind: AttackKind,
    pub damage: u32,
    pub shield_after: u32,
    pub health_after: u32,
}

impl MoveLogEntry {
    pub(crate) fn from_report(round: u8, side: Side, report: &AttackReport) -> Self {
        Self {
            round,
            side,
            attacker: report.attacker,
            defender: report.defender,
            kind: report.kind,
            damage: report.damage,
            shield_after: report.shield_remaining,
            health_after: report.health_remaining,
        }
    }
}

/// Result of one submitted exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundOutcome {
    pub battle_id: BattleId,
    pub round: u8,
    /// Attacks applied in order: the hero's first, then the villain's reply if any.
    pub reports: Vec<AttackReport>,
    /// Fighter snapshots after the exchange.
    pub hero: CombatState,
    pub villain: CombatState,
    pub record: RoundRecord,
    pub round_complete: bool,
    pub battle_finished: bool,
    /// Set once the battle is finished.
    pub outcome: Option<BattleOutcome>,
}

/// Final standings, available once the battle is finished.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalResults {
    pub battle_id: BattleId,
    pub outcome: BattleOutcome,
    pub round_wins: [u8; 2],
    pub rounds: Vec<RoundRecord>,
    pub progression: Vec<ProgressionUpdate>,
}
