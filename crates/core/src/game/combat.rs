//! Combat decision procedures: duels, opportunistic strikes, charge checks.
//!
//! The general duel and the move-into-adversary charge are two distinct
//! probability models and are kept separate on purpose: the duel draws
//! against the adversary's power (shield-reduced), the charge is a flat
//! did-the-blow-land check.

use super::*;

pub(super) const CHARGE_KILL_CHANCE: f64 = 0.65;
pub(super) const STRIKE_CHANCE: f64 = 0.6;
pub(super) const DUEL_VICTORY_POINTS: u32 = 50;
pub(super) const SHIELD_POWER_REDUCTION: i32 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum DuelOutcome {
    PlayerWon,
    PlayerLost { damage: i32 },
}

impl Game {
    /// General power-based duel. On a win the score and drop item are applied
    /// here; the adversary itself is never removed here, the caller decides.
    pub(super) fn duel(&mut self, enemy: EnemyId) -> DuelOutcome {
        let stats = self.world.enemies[enemy].stats();
        let draw = self.rolls.percent() as i32;
        let effective_power = if self.player.has_shield() {
            (stats.power - SHIELD_POWER_REDUCTION).max(0)
        } else {
            stats.power
        };
        if draw < effective_power {
            self.player.vitality -= stats.damage;
            DuelOutcome::PlayerLost { damage: stats.damage }
        } else {
            self.player.add_score(DUEL_VICTORY_POINTS);
            self.player.add_item(stats.drop);
            DuelOutcome::PlayerWon
        }
    }

    /// Did the player's unprovoked charge land? Move-into-adversary only.
    pub(super) fn charge_lands(&mut self) -> bool {
        self.rolls.unit() < CHARGE_KILL_CHANCE
    }

    /// Gate for an adjacent adversary's opportunistic strike. The strike has
    /// no defense check; damage applies unconditionally when it lands.
    pub(super) fn strike_lands(&mut self) -> bool {
        self.rolls.unit() < STRIKE_CHANCE
    }
}
