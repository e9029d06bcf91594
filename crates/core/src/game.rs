use crate::rng::{RollSource, SeededRolls};
use crate::state::{PlayerState, WorldState};
use crate::types::*;
use crate::worldgen::{self, WorldConfig};

mod combat;
mod pursuit;
mod turn;

#[cfg(test)]
mod test_support;

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 20;

/// A duel offered by `search` and not yet resolved by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingDuel {
    id: PromptId,
    enemy: EnemyId,
}

/// Read-only adversary snapshot for presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub pos: Pos,
    pub power: i32,
    pub damage: i32,
}

/// One game session: the turn engine plus the state it exclusively owns.
///
/// Exactly one `attempt_move`/`search` call is in flight at a time; each call
/// runs to completion and returns a full [`TurnResult`] before the next input
/// is accepted. The roll source is the only injected dependency.
pub struct Game {
    player: PlayerState,
    world: WorldState,
    seed: u64,
    rolls: Box<dyn RollSource>,
    next_prompt_seq: u64,
    pending_duel: Option<PendingDuel>,
    finished: Option<RunOutcome>,
}

impl Game {
    /// Start a fresh session: validate the player name, generate the world
    /// from the seed, and hand the engine to the caller.
    pub fn new_session(name: &str, config: WorldConfig, seed: u64) -> Result<Self, SessionError> {
        let name = validate_player_name(name)?;
        let mut rolls = Box::new(SeededRolls::new(seed));
        let world = worldgen::generate(config, rolls.as_mut())?;
        Ok(Self::assemble(PlayerState::new(name), world, seed, rolls))
    }

    /// Assemble a session from pre-built state and an explicit roll source.
    /// Deterministic harnesses use this to script exact worlds and draws.
    pub fn from_parts(player: PlayerState, world: WorldState, rolls: Box<dyn RollSource>) -> Self {
        Self::assemble(player, world, 0, rolls)
    }

    fn assemble(
        player: PlayerState,
        world: WorldState,
        seed: u64,
        rolls: Box<dyn RollSource>,
    ) -> Self {
        Self { player, world, seed, rolls, next_prompt_seq: 0, pending_duel: None, finished: None }
    }

    /// The terminal outcome, once one has been produced.
    pub fn finished_outcome(&self) -> Option<RunOutcome> {
        self.finished
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Live adversaries in listing order.
    pub fn enemy_snapshot(&self) -> Vec<EnemyView> {
        self.world
            .enemies
            .iter()
            .map(|(_, enemy)| {
                let stats = enemy.stats();
                EnemyView {
                    kind: enemy.kind,
                    pos: enemy.pos,
                    power: stats.power,
                    damage: stats.damage,
                }
            })
            .collect()
    }

    /// xxh3 fingerprint of the canonical session state, for determinism and
    /// replay-equivalence checks.
    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;

        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u32(self.player.steps);
        hasher.write_u32(self.player.score);
        hasher.write_i32(self.player.vitality);
        hasher.write_i32(self.player.pos.x);
        hasher.write_i32(self.player.pos.y);
        hasher.write_usize(self.player.inventory.len());
        for item in &self.player.inventory {
            hasher.write(item.as_bytes());
        }
        for (_, enemy) in self.world.enemies.iter() {
            hasher.write_u8(enemy.kind as u8);
            hasher.write_i32(enemy.pos.x);
            hasher.write_i32(enemy.pos.y);
        }
        for booster in &self.world.boosters {
            hasher.write_i32(booster.x);
            hasher.write_i32(booster.y);
        }
        hasher.finish()
    }

    fn next_prompt_id(&mut self) -> PromptId {
        let id = PromptId(self.next_prompt_seq);
        self.next_prompt_seq += 1;
        id
    }
}

/// The player-name contract: non-blank after trimming, 2-20 characters,
/// letters, digits, spaces, `-` and `_` only.
pub fn validate_player_name(raw: &str) -> Result<String, NameError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NameError::Blank);
    }
    let len = trimmed.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(NameError::LengthOutOfRange { len });
    }
    if let Some(found) =
        trimmed.chars().find(|c| !(c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-')))
    {
        return Err(NameError::UnsupportedCharacter { found });
    }
    Ok(trimmed.to_string())
}
