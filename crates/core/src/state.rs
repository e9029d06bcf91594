use std::collections::BTreeSet;

use slotmap::SlotMap;

use crate::content::{self, EnemyStats};
use crate::types::*;

pub const STARTING_VITALITY: i32 = 100;

/// Visited cells are only recorded inside this square range, matching the
/// bounded fog-of-war record the result summary reports.
pub const VISITED_RANGE: i32 = 30;

#[derive(Clone, Debug)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub pos: Pos,
}

impl Enemy {
    pub fn stats(&self) -> EnemyStats {
        content::enemy_stats(self.kind)
    }
}

pub struct WorldState {
    pub cols: usize,
    pub rows: usize,
    /// Live adversaries. Slots are never reused because a defeated adversary
    /// is never re-added, so iteration order is the canonical listing order.
    pub enemies: SlotMap<EnemyId, Enemy>,
    pub boosters: Vec<Pos>,
    pub destination: Pos,
}

impl WorldState {
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.cols && (pos.y as usize) < self.rows
    }

    pub fn enemy_at(&self, pos: Pos) -> Option<EnemyId> {
        self.enemies.iter().find(|(_, enemy)| enemy.pos == pos).map(|(id, _)| id)
    }

    /// Adversaries orthogonally adjacent to `pos`, in listing order.
    pub fn adjacent_enemies(&self, pos: Pos) -> Vec<EnemyId> {
        self.enemies
            .iter()
            .filter(|(_, enemy)| manhattan(pos, enemy.pos) == 1)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn last_enemy(&self) -> Option<EnemyId> {
        self.enemies.iter().last().map(|(id, _)| id)
    }

    pub fn remove_enemy(&mut self, id: EnemyId) -> Option<Enemy> {
        self.enemies.remove(id)
    }

    pub fn booster_index_at(&self, pos: Pos) -> Option<usize> {
        self.boosters.iter().position(|&booster| booster == pos)
    }

    pub fn is_booster_at(&self, pos: Pos) -> bool {
        self.booster_index_at(pos).is_some()
    }

    pub fn is_destination(&self, pos: Pos) -> bool {
        self.destination == pos
    }

    /// Cosmetic terrain flavor for a cell.
    pub fn terrain_at(&self, pos: Pos) -> Terrain {
        if (pos.x + pos.y) % 7 == 0 { Terrain::Forest } else { Terrain::Plain }
    }
}

pub struct PlayerState {
    pub name: String,
    pub pos: Pos,
    /// May go negative internally; the death check fires at or below zero.
    pub vitality: i32,
    pub score: u32,
    pub steps: u32,
    pub inventory: Vec<String>,
    pub visited: BTreeSet<Pos>,
}

impl PlayerState {
    pub fn new(name: String) -> Self {
        let mut visited = BTreeSet::new();
        visited.insert(Pos::ORIGIN);
        Self {
            name,
            pos: Pos::ORIGIN,
            vitality: STARTING_VITALITY,
            score: 0,
            steps: 0,
            inventory: content::STARTING_ITEMS.iter().map(|item| item.to_string()).collect(),
            visited,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.vitality > 0
    }

    /// Vitality clamped at zero for display and reporting.
    pub fn display_vitality(&self) -> i32 {
        self.vitality.max(0)
    }

    /// Holding any item whose name denotes a shield grants damage reduction
    /// in duels. Derived from the inventory so it can never go stale.
    pub fn has_shield(&self) -> bool {
        self.inventory.iter().any(|item| item.to_lowercase().contains("shield"))
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    pub fn mark_visited(&mut self, pos: Pos) {
        if (0..VISITED_RANGE).contains(&pos.x) && (0..VISITED_RANGE).contains(&pos.y) {
            self.visited.insert(pos);
        }
    }
}
