//! The seven-phase turn resolution cascade.
//!
//! A move resolves in fixed order: validation, direct encounter, adjacent
//! strikes, pursuit, post-pursuit encounter, booster pickup, terminal check.
//! A direct encounter suppresses the strike, pursuit, and post-pursuit
//! phases for that turn; this mirrors the exclusivity of "moved into an
//! adversary" versus "adjacent adversaries react" in the game rules and is
//! an intentional asymmetry, not a bug.

use super::*;

pub(super) const STEP_MILESTONE_INTERVAL: u32 = 5;
pub(super) const STEP_MILESTONE_POINTS: u32 = 5;

impl Game {
    /// Resolve one full turn for an attempted orthogonal step.
    ///
    /// Invalid moves are not errors: they produce a rejected, non-terminal
    /// result and leave every piece of state untouched.
    pub fn attempt_move(&mut self, dx: i32, dy: i32) -> TurnResult {
        if let Some(outcome) = self.finished {
            return TurnResult { events: Vec::new(), outcome: Some(outcome) };
        }
        if let Some(pending) = self.pending_duel {
            return self.resurface_offer(pending);
        }

        // Phase 1: move validation.
        if dx.abs() + dy.abs() != 1 {
            return TurnResult::rejected(RejectReason::NotOrthogonalStep);
        }
        let target = self.player.pos.step(dx, dy);
        if !self.world.in_bounds(target) {
            return TurnResult::rejected(RejectReason::OutOfBounds);
        }

        let mut events = Vec::new();
        self.player.pos = target;
        self.player.steps += 1;
        self.player.mark_visited(target);
        if self.player.steps % STEP_MILESTONE_INTERVAL == 0 {
            self.player.add_score(STEP_MILESTONE_POINTS);
            events.push(TurnEvent::MilestoneBonus {
                steps: self.player.steps,
                points: STEP_MILESTONE_POINTS,
            });
        }

        // Phase 2: direct encounter. Charging into an adversary resolves the
        // whole reaction window; phases 3-5 are skipped either way.
        if let Some(enemy_id) = self.world.enemy_at(target) {
            let enemy = &self.world.enemies[enemy_id];
            let kind = enemy.kind;
            let stats = enemy.stats();
            if self.charge_lands() {
                self.world.remove_enemy(enemy_id);
                self.player.add_score(combat::DUEL_VICTORY_POINTS);
                self.player.add_item(stats.drop);
                events.push(TurnEvent::ChargeWon { kind, drop: stats.drop });
            } else {
                self.player.vitality -= stats.damage;
                events.push(TurnEvent::ChargeFailed { kind, damage: stats.damage });
                if !self.player.is_alive() {
                    // The killer of record leaves the field with the player.
                    self.world.remove_enemy(enemy_id);
                    return self.terminal(events, RunOutcome::Defeat);
                }
                // Failed charge: the adversary holds its cell for a later turn.
            }
        } else {
            // Phase 3: adjacent opportunistic strikes, in listing order.
            for enemy_id in self.world.adjacent_enemies(self.player.pos) {
                if !self.strike_lands() {
                    continue;
                }
                let enemy = self.world.remove_enemy(enemy_id).expect("adjacent enemy is live");
                let stats = enemy.stats();
                self.player.vitality -= stats.damage;
                events.push(TurnEvent::StruckBy { kind: enemy.kind, damage: stats.damage });
                if !self.player.is_alive() {
                    return self.terminal(events, RunOutcome::Defeat);
                }
            }

            // Phase 4: pursuit.
            let moved = self.advance_enemies();
            if moved > 0 {
                events.push(TurnEvent::EnemiesAdvanced { moved });
            }

            // Phase 5: an adversary that stepped onto the player duels.
            if let Some(enemy_id) = self.world.enemy_at(self.player.pos) {
                let kind = self.world.enemies[enemy_id].kind;
                match self.duel(enemy_id) {
                    combat::DuelOutcome::PlayerWon => {
                        let enemy = self.world.remove_enemy(enemy_id).expect("duelist is live");
                        events.push(TurnEvent::DuelWon { kind, drop: enemy.stats().drop });
                    }
                    combat::DuelOutcome::PlayerLost { damage } => {
                        events.push(TurnEvent::DuelLost { kind, damage });
                        if !self.player.is_alive() {
                            self.world.remove_enemy(enemy_id);
                            return self.terminal(events, RunOutcome::Defeat);
                        }
                    }
                }
            }
        }

        // Phase 6: booster pickup.
        self.collect_booster_here(&mut events);

        // Phase 7: terminal check.
        if self.world.is_destination(self.player.pos) {
            return self.terminal(events, RunOutcome::Victory);
        }
        TurnResult { events, outcome: None }
    }

    /// Inspect the current cell without moving.
    ///
    /// An adversary here yields a duel offer the caller must confirm through
    /// [`Game::resolve_duel`]; a booster is collected on the spot; otherwise
    /// the search reports nothing.
    pub fn search(&mut self) -> TurnResult {
        if let Some(outcome) = self.finished {
            return TurnResult { events: Vec::new(), outcome: Some(outcome) };
        }
        if let Some(pending) = self.pending_duel {
            return self.resurface_offer(pending);
        }

        if let Some(enemy_id) = self.world.enemy_at(self.player.pos) {
            let kind = self.world.enemies[enemy_id].kind;
            let id = self.next_prompt_id();
            self.pending_duel = Some(PendingDuel { id, enemy: enemy_id });
            return TurnResult {
                events: vec![TurnEvent::DuelOffered { prompt_id: id, kind }],
                outcome: None,
            };
        }

        let mut events = Vec::new();
        if !self.collect_booster_here(&mut events) {
            events.push(TurnEvent::NothingFound);
        }
        TurnResult { events, outcome: None }
    }

    /// Resolve a duel offer from [`Game::search`].
    ///
    /// The prompt id must match the outstanding offer; anything else is a
    /// [`GameError::PromptMismatch`] and leaves state untouched.
    pub fn resolve_duel(
        &mut self,
        prompt_id: PromptId,
        choice: DuelChoice,
    ) -> Result<TurnResult, GameError> {
        let Some(pending) = self.pending_duel else {
            return Err(GameError::PromptMismatch);
        };
        if pending.id != prompt_id {
            return Err(GameError::PromptMismatch);
        }
        let Some(enemy) = self.world.enemies.get(pending.enemy) else {
            // The offer outlived its adversary; drop it rather than fight air.
            self.pending_duel = None;
            return Err(GameError::PromptMismatch);
        };
        let kind = enemy.kind;
        self.pending_duel = None;

        match choice {
            DuelChoice::Decline => {
                Ok(TurnResult { events: vec![TurnEvent::DuelDeclined { kind }], outcome: None })
            }
            DuelChoice::Fight => {
                let mut events = Vec::new();
                match self.duel(pending.enemy) {
                    combat::DuelOutcome::PlayerWon => {
                        let slain =
                            self.world.remove_enemy(pending.enemy).expect("duelist is live");
                        events.push(TurnEvent::DuelWon { kind, drop: slain.stats().drop });
                        Ok(TurnResult { events, outcome: None })
                    }
                    combat::DuelOutcome::PlayerLost { damage } => {
                        events.push(TurnEvent::DuelLost { kind, damage });
                        if !self.player.is_alive() {
                            return Ok(self.terminal(events, RunOutcome::Defeat));
                        }
                        Ok(TurnResult { events, outcome: None })
                    }
                }
            }
        }
    }

    /// Phase 6. Collecting a booster also slays the last-listed adversary,
    /// if any remain. Returns whether a booster was here.
    fn collect_booster_here(&mut self, events: &mut Vec<TurnEvent>) -> bool {
        let Some(index) = self.world.booster_index_at(self.player.pos) else {
            return false;
        };
        let pos = self.world.boosters.remove(index);
        let item = format!("Booster-{}-{}", pos.x, pos.y);
        self.player.add_item(item.clone());
        let slain = self
            .world
            .last_enemy()
            .and_then(|id| self.world.remove_enemy(id))
            .map(|enemy| enemy.kind);
        events.push(TurnEvent::BoosterCollected { item, slain });
        true
    }

    fn resurface_offer(&self, pending: PendingDuel) -> TurnResult {
        let kind = self.world.enemies[pending.enemy].kind;
        TurnResult {
            events: vec![TurnEvent::DuelOffered { prompt_id: pending.id, kind }],
            outcome: None,
        }
    }

    fn terminal(&mut self, events: Vec<TurnEvent>, outcome: RunOutcome) -> TurnResult {
        self.finished = Some(outcome);
        TurnResult { events, outcome: Some(outcome) }
    }
}
