//! One pursuit step for every adversary at once.
//!
//! Moves are computed against a single shared snapshot of adversary positions
//! taken at phase start, with an occupied set seeded from every starting
//! cell. Adversaries are processed in listing order and earlier reservations
//! block later ones; vacated cells are not released within the phase. This is
//! a deliberate single-pass priority policy, not true simultaneity.

use std::collections::BTreeSet;

use super::*;

pub(super) fn plan_pursuit(world: &WorldState, player_pos: Pos) -> Vec<(EnemyId, Pos)> {
    let mut occupied: BTreeSet<Pos> = world.enemies.iter().map(|(_, enemy)| enemy.pos).collect();
    let mut moves = Vec::new();

    for (id, enemy) in world.enemies.iter() {
        let dx = (player_pos.x - enemy.pos.x).signum();
        let dy = (player_pos.y - enemy.pos.y).signum();
        let dist_x = player_pos.x.abs_diff(enemy.pos.x);
        let dist_y = player_pos.y.abs_diff(enemy.pos.y);

        // Axis priority: close the longer distance first. Only an axis with a
        // non-zero delta yields a candidate.
        let horizontal = (dx != 0).then(|| enemy.pos.step(dx, 0));
        let vertical = (dy != 0).then(|| enemy.pos.step(0, dy));
        let candidates: [Option<Pos>; 2] =
            if dist_x >= dist_y { [horizontal, vertical] } else { [vertical, horizontal] };

        for candidate in candidates.into_iter().flatten() {
            if !world.in_bounds(candidate) || occupied.contains(&candidate) {
                continue;
            }
            occupied.insert(candidate);
            moves.push((id, candidate));
            break;
        }
        // Stays in place when both candidates are blocked or absent.
    }

    moves
}

impl Game {
    pub(super) fn advance_enemies(&mut self) -> usize {
        let moves = plan_pursuit(&self.world, self.player.pos);
        let moved = moves.len();
        for (id, pos) in moves {
            self.world.enemies[id].pos = pos;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::game::test_support::*;
    use crate::rng::SeededRolls;
    use crate::state::WorldState;
    use crate::types::{EnemyKind, Pos};
    use crate::worldgen::{self, WorldConfig};

    use super::plan_pursuit;

    fn apply(world: &mut WorldState, moves: Vec<(crate::types::EnemyId, Pos)>) {
        for (id, pos) in moves {
            world.enemies[id].pos = pos;
        }
    }

    #[test]
    fn adversary_on_the_player_cell_does_not_move() {
        let mut world = empty_world(8, 8);
        let player = Pos { x: 3, y: 3 };
        add_enemy(&mut world, EnemyKind::Goblin, player);

        let moves = plan_pursuit(&world, player);
        assert!(moves.is_empty());
    }

    #[test]
    fn longer_axis_is_closed_first() {
        let mut world = empty_world(10, 10);
        let id = add_enemy(&mut world, EnemyKind::Orc, Pos { x: 0, y: 0 });

        // Player at (4, 2): horizontal distance 4 >= vertical 2.
        let moves = plan_pursuit(&world, Pos { x: 4, y: 2 });
        apply(&mut world, moves);
        assert_eq!(world.enemies[id].pos, Pos { x: 1, y: 0 });

        // Player at (2, 6) from (1, 0): vertical wins.
        let moves = plan_pursuit(&world, Pos { x: 2, y: 6 });
        apply(&mut world, moves);
        assert_eq!(world.enemies[id].pos, Pos { x: 1, y: 1 });
    }

    #[test]
    fn equal_distances_prefer_the_horizontal_step() {
        let mut world = empty_world(10, 10);
        let id = add_enemy(&mut world, EnemyKind::Goblin, Pos { x: 2, y: 2 });
        let moves = plan_pursuit(&world, Pos { x: 5, y: 5 });
        apply(&mut world, moves);
        assert_eq!(world.enemies[id].pos, Pos { x: 3, y: 2 });
    }

    #[test]
    fn blocked_preferred_axis_falls_back_to_the_other() {
        let mut world = empty_world(10, 10);
        // Leader sits one step ahead on the shared row; the chaser's
        // preferred horizontal step is its cell.
        add_enemy(&mut world, EnemyKind::Goblin, Pos { x: 3, y: 2 });
        let chaser = add_enemy(&mut world, EnemyKind::Orc, Pos { x: 2, y: 2 });

        let moves = plan_pursuit(&world, Pos { x: 6, y: 4 });
        apply(&mut world, moves);
        assert_eq!(world.enemies[chaser].pos, Pos { x: 2, y: 3 });
    }

    #[test]
    fn earlier_adversaries_reserve_cells_ahead_of_later_ones() {
        let mut world = empty_world(10, 10);
        let player = Pos { x: 4, y: 4 };
        // Both adjacent adversaries want the player's cell; the first in
        // listing order reserves it, the second has no other candidate axis.
        let first = add_enemy(&mut world, EnemyKind::Goblin, Pos { x: 3, y: 4 });
        let second = add_enemy(&mut world, EnemyKind::Goblin, Pos { x: 4, y: 3 });

        let moves = plan_pursuit(&world, player);
        assert!(moves.iter().all(|(id, _)| *id != second));
        apply(&mut world, moves);
        assert_eq!(world.enemies[first].pos, player);
        assert_eq!(world.enemies[second].pos, Pos { x: 4, y: 3 });
    }

    #[test]
    fn fully_boxed_in_adversary_stays_put() {
        let mut world = empty_world(10, 10);
        // Chaser in the corner aiming down-right, both exits reserved by the
        // starting snapshot.
        let boxed_in = add_enemy(&mut world, EnemyKind::Dragon, Pos { x: 0, y: 0 });
        add_enemy(&mut world, EnemyKind::Goblin, Pos { x: 1, y: 0 });
        add_enemy(&mut world, EnemyKind::Goblin, Pos { x: 0, y: 1 });

        let before = world.enemies[boxed_in].pos;
        let moves = plan_pursuit(&world, Pos { x: 5, y: 5 });
        assert!(moves.iter().all(|(id, _)| *id != boxed_in));
        assert_eq!(world.enemies[boxed_in].pos, before);
    }

    #[test]
    fn pursuit_keeps_everyone_in_bounds_and_collision_free() {
        for seed in [3_u64, 17, 4_242] {
            let mut rolls = SeededRolls::new(seed);
            let mut world =
                worldgen::generate(WorldConfig::standard(), &mut rolls).expect("generates");
            let player = Pos { x: 5, y: 3 };

            for _ in 0..20 {
                let moves = plan_pursuit(&world, player);
                apply(&mut world, moves);
                let mut cells = BTreeSet::new();
                for (_, enemy) in world.enemies.iter() {
                    assert!(world.in_bounds(enemy.pos), "seed {seed}: enemy out of bounds");
                    assert!(
                        cells.insert(enemy.pos),
                        "seed {seed}: two adversaries share {:?}",
                        enemy.pos
                    );
                }
            }
        }
    }
}
