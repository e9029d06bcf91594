//! Move legality: rejection semantics and step bookkeeping.

use super::support::*;

#[test]
fn non_orthogonal_moves_are_rejected_without_side_effects() {
    let mut world = empty_world(12, 8);
    add_enemy(&mut world, EnemyKind::Goblin, Pos { x: 4, y: 4 });
    let mut game = scripted_game(world, []);
    let before = game.snapshot_hash();

    for (dx, dy) in [(0, 0), (1, 1), (-1, 1), (2, 0), (0, -2)] {
        let result = game.attempt_move(dx, dy);
        assert!(result.is_rejected(), "({dx},{dy}) should be rejected");
        assert_eq!(
            result.events,
            vec![TurnEvent::MoveRejected { reason: RejectReason::NotOrthogonalStep }]
        );
        assert_eq!(result.outcome, None);
    }

    assert_eq!(game.player().steps, 0);
    assert_eq!(game.player().pos, Pos::ORIGIN);
    assert_eq!(game.snapshot_hash(), before);
}

#[test]
fn stepping_off_the_grid_is_rejected_without_side_effects() {
    let mut game = scripted_game(empty_world(12, 8), []);
    let visited_before = game.player().visited.clone();

    for (dx, dy) in [(-1, 0), (0, -1)] {
        let result = game.attempt_move(dx, dy);
        assert_eq!(
            result.events,
            vec![TurnEvent::MoveRejected { reason: RejectReason::OutOfBounds }]
        );
    }

    assert_eq!(game.player().pos, Pos::ORIGIN);
    assert_eq!(game.player().steps, 0);
    assert_eq!(game.player().visited, visited_before);
}

#[test]
fn a_legal_step_moves_counts_and_marks_the_cell() {
    let mut game = scripted_game(empty_world(12, 8), []);
    let result = game.attempt_move(1, 0);

    assert!(!result.is_rejected());
    assert_eq!(result.outcome, None);
    assert_eq!(game.player().pos, Pos { x: 1, y: 0 });
    assert_eq!(game.player().steps, 1);
    assert!(game.player().visited.contains(&Pos { x: 1, y: 0 }));
}

#[test]
fn every_fifth_step_awards_the_milestone_bonus() {
    let mut game = scripted_game(empty_world(12, 8), []);

    for step in 1..=4 {
        let result = game.attempt_move(1, 0);
        assert!(
            !result.events.iter().any(|e| matches!(e, TurnEvent::MilestoneBonus { .. })),
            "no bonus expected at step {step}"
        );
        assert_eq!(game.player().score, 0);
    }

    let fifth = game.attempt_move(1, 0);
    assert_eq!(fifth.events, vec![TurnEvent::MilestoneBonus { steps: 5, points: 5 }]);
    assert_eq!(game.player().score, 5);

    for _ in 6..=9 {
        game.attempt_move(0, 1);
    }
    let tenth = game.attempt_move(-1, 0);
    assert!(tenth.events.iter().any(|e| matches!(e, TurnEvent::MilestoneBonus { steps: 10, .. })));
    assert_eq!(game.player().score, 10);
}
