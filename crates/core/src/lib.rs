pub mod content;
pub mod game;
pub mod journal;
pub mod replay;
pub mod report;
pub mod rng;
pub mod state;
pub mod types;
pub mod worldgen;

pub use game::{EnemyView, Game, validate_player_name};
pub use journal::{Action, ActionRecord, SessionJournal};
pub use replay::*;
pub use rng::{RollSource, ScriptedRolls, SeededRolls};
pub use state::{Enemy, PlayerState, WorldState};
pub use types::*;
pub use worldgen::{WorldConfig, WorldGenError};
