//! World population: scattering adversaries and boosters, placing the
//! destination.
//!
//! Placement rejection-samples uniform coordinates until each category has
//! its count of distinct, non-origin cells. Adversaries and boosters only
//! exclude collisions within their own category, so a booster may share a
//! cell with an adversary. The draw order per adversary is position first,
//! then archetype, so scripted tests can line their draws up.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::rng::RollSource;
use crate::state::{Enemy, WorldState};
use crate::types::{EnemyId, EnemyKind, Pos};

const GOBLIN_ROLL_CEIL: u32 = 60;
const ORC_ROLL_CEIL: u32 = 90;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub cols: usize,
    pub rows: usize,
    pub enemy_count: usize,
    pub booster_count: usize,
}

impl WorldConfig {
    /// The classic session shape: 12x8 grid, 10 adversaries, 4 boosters.
    pub fn standard() -> Self {
        Self { cols: 12, rows: 8, enemy_count: 10, booster_count: 4 }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldGenError {
    /// More distinct non-origin cells were requested than the grid has.
    NotEnoughCells { requested: usize, available: usize },
}

impl core::fmt::Display for WorldGenError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotEnoughCells { requested, available } => write!(
                f,
                "cannot place {requested} entities plus the origin on a grid of {available} cells"
            ),
        }
    }
}

pub fn generate(
    config: WorldConfig,
    rolls: &mut dyn RollSource,
) -> Result<WorldState, WorldGenError> {
    let available = config.cols * config.rows;
    for requested in [config.enemy_count, config.booster_count] {
        if requested + 1 > available {
            return Err(WorldGenError::NotEnoughCells { requested, available });
        }
    }

    let mut enemies: SlotMap<EnemyId, Enemy> = SlotMap::with_key();
    let mut used: BTreeSet<Pos> = BTreeSet::new();
    while enemies.len() < config.enemy_count {
        let pos = sample_cell(config, rolls);
        if pos == Pos::ORIGIN || used.contains(&pos) {
            continue;
        }
        used.insert(pos);
        let kind = pick_enemy_kind(rolls.percent());
        let id = enemies.insert(Enemy { id: EnemyId::default(), kind, pos });
        enemies[id].id = id;
    }

    let mut boosters = Vec::with_capacity(config.booster_count);
    let mut booster_cells: BTreeSet<Pos> = BTreeSet::new();
    while boosters.len() < config.booster_count {
        let pos = sample_cell(config, rolls);
        if pos == Pos::ORIGIN || booster_cells.contains(&pos) {
            continue;
        }
        booster_cells.insert(pos);
        boosters.push(pos);
    }

    Ok(WorldState {
        cols: config.cols,
        rows: config.rows,
        enemies,
        boosters,
        destination: Pos { x: config.cols as i32 - 1, y: config.rows as i32 - 1 },
    })
}

fn sample_cell(config: WorldConfig, rolls: &mut dyn RollSource) -> Pos {
    Pos {
        x: rolls.below(config.cols as u32) as i32,
        y: rolls.below(config.rows as u32) as i32,
    }
}

fn pick_enemy_kind(roll: u32) -> EnemyKind {
    if roll < GOBLIN_ROLL_CEIL {
        EnemyKind::Goblin
    } else if roll < ORC_ROLL_CEIL {
        EnemyKind::Orc
    } else {
        EnemyKind::Dragon
    }
}
