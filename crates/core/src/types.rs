use slotmap::new_key_type;

use serde::{Deserialize, Serialize};

new_key_type! {
    pub struct EnemyId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const ORIGIN: Pos = Pos { x: 0, y: 0 };

    pub fn step(self, dx: i32, dy: i32) -> Pos {
        Pos { x: self.x + dx, y: self.y + dy }
    }
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnemyKind {
    Goblin,
    Orc,
    Dragon,
}

impl EnemyKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Goblin => "Goblin",
            Self::Orc => "Orc",
            Self::Dragon => "Dragon",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terrain {
    Plain,
    Forest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromptId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelChoice {
    Fight,
    Decline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The requested move is not a single-cell orthogonal step.
    NotOrthogonalStep,
    /// The target cell lies outside the grid.
    OutOfBounds,
}

/// Everything a single engine call produced, in resolution order.
/// This is the only channel between the engine and a presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnEvent {
    MoveRejected { reason: RejectReason },
    MilestoneBonus { steps: u32, points: u32 },
    ChargeWon { kind: EnemyKind, drop: &'static str },
    ChargeFailed { kind: EnemyKind, damage: i32 },
    StruckBy { kind: EnemyKind, damage: i32 },
    EnemiesAdvanced { moved: usize },
    DuelOffered { prompt_id: PromptId, kind: EnemyKind },
    DuelDeclined { kind: EnemyKind },
    DuelWon { kind: EnemyKind, drop: &'static str },
    DuelLost { kind: EnemyKind, damage: i32 },
    BoosterCollected { item: String, slain: Option<EnemyKind> },
    NothingFound,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TurnResult {
    pub events: Vec<TurnEvent>,
    pub outcome: Option<RunOutcome>,
}

impl TurnResult {
    pub fn rejected(reason: RejectReason) -> Self {
        Self { events: vec![TurnEvent::MoveRejected { reason }], outcome: None }
    }

    pub fn is_rejected(&self) -> bool {
        self.events.iter().any(|event| matches!(event, TurnEvent::MoveRejected { .. }))
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    ManualSaveExit,
    PlayerDied,
    ReachedDestination,
}

impl EndReason {
    /// The exact reason string recorded in the result summary file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ManualSaveExit => "Manual Save & Exit",
            Self::PlayerDied => "Player Died",
            Self::ReachedDestination => "Reached Destination",
        }
    }

    pub fn for_outcome(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Victory => Self::ReachedDestination,
            RunOutcome::Defeat => Self::PlayerDied,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    PromptMismatch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameError {
    Blank,
    LengthOutOfRange { len: usize },
    UnsupportedCharacter { found: char },
}

impl core::fmt::Display for NameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Blank => write!(f, "name cannot be blank"),
            Self::LengthOutOfRange { len } => {
                write!(f, "name must be 2-20 characters after trimming, got {len}")
            }
            Self::UnsupportedCharacter { found } => {
                write!(f, "only letters, numbers, spaces, - and _ allowed, found {found:?}")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    Name(NameError),
    WorldGen(crate::worldgen::WorldGenError),
}

impl core::fmt::Display for SessionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Name(e) => write!(f, "invalid player name: {e}"),
            Self::WorldGen(e) => write!(f, "world generation failed: {e}"),
        }
    }
}

impl From<NameError> for SessionError {
    fn from(value: NameError) -> Self {
        Self::Name(value)
    }
}

impl From<crate::worldgen::WorldGenError> for SessionError {
    fn from(value: crate::worldgen::WorldGenError) -> Self {
        Self::WorldGen(value)
    }
}
