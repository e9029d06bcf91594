use serde::{Deserialize, Serialize};

use crate::types::{DuelChoice, PromptId};
use crate::worldgen::WorldConfig;

/// Everything needed to reconstruct a session from its start: the seed, the
/// world shape, and the ordered inputs the player issued.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionJournal {
    pub format_version: u16,
    pub seed: u64,
    pub player_name: String,
    pub config: WorldConfig,
    pub inputs: Vec<ActionRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seq: u64,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Move { dx: i32, dy: i32 },
    Search,
    ResolveDuel { prompt_id: PromptId, choice: DuelChoice },
}

impl SessionJournal {
    pub fn new(seed: u64, player_name: impl Into<String>, config: WorldConfig) -> Self {
        Self {
            format_version: 1,
            seed,
            player_name: player_name.into(),
            config,
            inputs: Vec::new(),
        }
    }

    pub fn append(&mut self, action: Action) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(ActionRecord { seq, action });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_numbers_inputs_sequentially() {
        let mut journal = SessionJournal::new(7, "Avery", WorldConfig::standard());
        journal.append(Action::Move { dx: 1, dy: 0 });
        journal.append(Action::Search);
        journal.append(Action::ResolveDuel { prompt_id: PromptId(0), choice: DuelChoice::Fight });

        let seqs: Vec<_> = journal.inputs.iter().map(|record| record.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
    }

    #[test]
    fn journal_round_trips_through_json() {
        let mut journal = SessionJournal::new(42, "Avery", WorldConfig::standard());
        journal.append(Action::Move { dx: 0, dy: 1 });
        journal.append(Action::ResolveDuel { prompt_id: PromptId(3), choice: DuelChoice::Decline });

        let json = serde_json::to_string(&journal).expect("serializes");
        let restored: SessionJournal = serde_json::from_str(&json).expect("deserializes");

        assert_eq!(restored.seed, journal.seed);
        assert_eq!(restored.player_name, journal.player_name);
        assert_eq!(restored.config, journal.config);
        assert_eq!(restored.inputs.len(), 2);
        assert_eq!(restored.inputs[1].action, journal.inputs[1].action);
    }
}
