//! Shared fixtures for the engine test suites.
//! This module exists to avoid repeating world and roll setup across tests.

use slotmap::SlotMap;

use crate::rng::ScriptedRolls;
use crate::state::{Enemy, PlayerState};

use super::*;

pub(super) fn empty_world(cols: usize, rows: usize) -> WorldState {
    WorldState {
        cols,
        rows,
        enemies: SlotMap::with_key(),
        boosters: Vec::new(),
        destination: Pos { x: cols as i32 - 1, y: rows as i32 - 1 },
    }
}

pub(super) fn add_enemy(world: &mut WorldState, kind: EnemyKind, pos: Pos) -> EnemyId {
    let id = world.enemies.insert(Enemy { id: EnemyId::default(), kind, pos });
    world.enemies[id].id = id;
    id
}

/// Engine over a handcrafted world and a scripted draw queue. Draws past the
/// end of the script fall back to `fallback` (raw value, see `ScriptedRolls`).
pub(super) fn scripted_game_with_fallback(
    world: WorldState,
    rolls: impl IntoIterator<Item = u64>,
    fallback: u64,
) -> Game {
    Game::from_parts(
        PlayerState::new("Tester".to_string()),
        world,
        Box::new(ScriptedRolls::with_fallback(rolls, fallback)),
    )
}

pub(super) fn scripted_game(world: WorldState, rolls: impl IntoIterator<Item = u64>) -> Game {
    scripted_game_with_fallback(world, rolls, 0)
}
