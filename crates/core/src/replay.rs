//! Reconstruct a finished or abandoned session from its journal.
//!
//! A journal replays only from session start; this is determinism tooling,
//! not a mid-game save format.

use crate::game::Game;
use crate::journal::{Action, SessionJournal};
use crate::types::{EndReason, RunOutcome, SessionError};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    Session(SessionError),
    /// A journaled duel resolution did not match the outstanding prompt.
    PromptMismatch { seq: u64 },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub outcome: Option<RunOutcome>,
    pub end_reason: EndReason,
    pub final_snapshot_hash: u64,
    pub steps: u32,
}

/// Replay every journaled input and return the engine alongside the summary,
/// for callers that want to inspect or report on the final state.
pub fn replay_session(journal: &SessionJournal) -> Result<(Game, ReplayResult), ReplayError> {
    let mut game = Game::new_session(&journal.player_name, journal.config, journal.seed)
        .map_err(ReplayError::Session)?;

    let mut outcome = None;
    for record in &journal.inputs {
        let result = match &record.action {
            Action::Move { dx, dy } => game.attempt_move(*dx, *dy),
            Action::Search => game.search(),
            Action::ResolveDuel { prompt_id, choice } => game
                .resolve_duel(*prompt_id, *choice)
                .map_err(|_| ReplayError::PromptMismatch { seq: record.seq })?,
        };
        if result.outcome.is_some() {
            outcome = result.outcome;
            break;
        }
    }

    let end_reason = match outcome {
        Some(o) => EndReason::for_outcome(o),
        // A journal that stops before a terminal result is a walked-away
        // session.
        None => EndReason::ManualSaveExit,
    };
    let summary = ReplayResult {
        outcome,
        end_reason,
        final_snapshot_hash: game.snapshot_hash(),
        steps: game.player().steps,
    };
    Ok((game, summary))
}

pub fn replay_to_end(journal: &SessionJournal) -> Result<ReplayResult, ReplayError> {
    replay_session(journal).map(|(_, summary)| summary)
}
