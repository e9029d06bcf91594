//! Fixed adversary archetypes and starting loadout.
//! Type-specific behavior resolves through the stats table, not dispatch.

use crate::types::EnemyKind;

/// Items every new player carries before the first turn.
pub const STARTING_ITEMS: [&str; 2] = ["Basic Sword", "Health Potion"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyStats {
    pub power: i32,
    pub damage: i32,
    pub drop: &'static str,
    pub description: &'static str,
}

pub fn enemy_stats(kind: EnemyKind) -> EnemyStats {
    match kind {
        EnemyKind::Goblin => EnemyStats {
            power: 35,
            damage: 10,
            drop: "Goblin Tooth",
            description: "Sneaky and weak creature.",
        },
        EnemyKind::Orc => EnemyStats {
            power: 55,
            damage: 20,
            drop: "Orc Axe",
            description: "Strong and tough enemy.",
        },
        EnemyKind::Dragon => EnemyStats {
            power: 80,
            damage: 40,
            drop: "Dragon Scale",
            description: "Huge and powerful mythical beast.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_table_matches_archetypes() {
        assert_eq!(enemy_stats(EnemyKind::Goblin).power, 35);
        assert_eq!(enemy_stats(EnemyKind::Orc).damage, 20);
        assert_eq!(enemy_stats(EnemyKind::Dragon).drop, "Dragon Scale");
    }

    #[test]
    fn every_kind_has_a_description() {
        for kind in [EnemyKind::Goblin, EnemyKind::Orc, EnemyKind::Dragon] {
            assert!(!enemy_stats(kind).description.is_empty());
        }
    }
}
