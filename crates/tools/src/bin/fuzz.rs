use std::collections::BTreeSet;

use anyhow::Result;
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tales_core::types::{DuelChoice, TurnEvent};
use tales_core::worldgen::WorldConfig;
use tales_core::Game;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    turns: u32,
}

const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for max {} turns...", args.seed, args.turns);
    let mut game = Game::new_session("Fuzz Pilot", WorldConfig::standard(), args.seed)
        .map_err(|e| anyhow::anyhow!("Session failed to start: {e}"))?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut turns = 0;
    while turns < args.turns {
        turns += 1;

        let result = if rng.next_u64() % 8 == 0 {
            game.search()
        } else {
            let (dx, dy) = choose(&mut rng, &DIRECTIONS);
            game.attempt_move(dx, dy)
        };

        if let Some(prompt_id) = result.events.iter().find_map(|event| match event {
            TurnEvent::DuelOffered { prompt_id, .. } => Some(*prompt_id),
            _ => None,
        }) {
            // Bias to fight
            let choice =
                choose(&mut rng, &[DuelChoice::Fight, DuelChoice::Decline, DuelChoice::Fight]);
            game.resolve_duel(prompt_id, choice).expect("fuzz resolved a stale prompt");
        }

        // Assert invariants
        assert!(
            game.world().in_bounds(game.player().pos),
            "Invariant failed: player out of bounds"
        );
        assert!(game.player().vitality <= 100, "Invariant failed: vitality above start");
        let mut cells = BTreeSet::new();
        for enemy in game.enemy_snapshot() {
            assert!(
                game.world().in_bounds(enemy.pos),
                "Invariant failed: adversary out of bounds"
            );
            assert!(cells.insert(enemy.pos), "Invariant failed: adversaries share a cell");
        }

        if let Some(outcome) = game.finished_outcome() {
            println!("Finished with outcome {:?} after {} turns", outcome, turns);
            break;
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
