//! End-to-end search behaviour over controlled games.

use std::io;

use pretty_assertions::assert_eq;
use tanto::environment::Player::{Black, White};
use tanto::evaluation::material::Material;
use tanto::search::{find_best_move, Control, Settings, StopReason};
use tanto::takeaway::TakeAway;

mod common;
use common::{entry, Fixed, Label, Script};

fn settings(iterations: u64) -> Settings {
    Settings {
        max_iterations: Some(iterations),
        seed: Some(3),
        ..Settings::default()
    }
}

/// Two root moves: one arm is immediately decided in the mover's favour on
/// every playout, the other is decided against it one ply later. Four
/// iterations are enough to settle on the favourable arm.
#[test]
fn the_winning_arm_is_selected() {
    let script = Script::new(vec![
        entry(White, &[('a', 1), ('b', 2)]),
        // 'a': a single reply, decided on the spot.
        entry(Black, &[('x', 3)]),
        // 'b': two replies, each leading to a single-reply position one
        // ply (one side flip) later.
        entry(Black, &[('p', 4), ('q', 5)]),
        entry(White, &[('y', 6)]),
        entry(White, &[('s', 6)]),
        entry(White, &[('t', 6)]),
        entry(White, &[('u', 6)]),
    ]);

    let report = find_best_move(
        script,
        &Fixed(0.5),
        &settings(4),
        &Control::new(),
        &mut io::sink(),
    );

    assert_eq!(report.best_move, Some(Label('a')));
    assert_eq!(report.stop, StopReason::IterationLimit);
    assert_eq!(report.iterations, 4);
}

#[test]
fn a_single_legal_move_is_chosen_regardless_of_budget() {
    let script = Script::new(vec![
        entry(White, &[('x', 1)]),
        entry(Black, &[('y', 1)]),
    ]);

    for iterations in [1, 2, 16] {
        let report = find_best_move(
            script.clone(),
            &Fixed(0.5),
            &settings(iterations),
            &Control::new(),
            &mut io::sink(),
        );
        assert_eq!(report.best_move, Some(Label('x')));
    }
}

/// Playouts that exhaust the depth budget score as the evaluator says, not
/// as a loss: an undecidable arm beats a surely lost one exactly when the
/// evaluator is positive about it.
#[test]
fn exhausted_playouts_carry_the_evaluator_score() {
    let table = || {
        vec![
            entry(White, &[('a', 1), ('b', 2)]),
            // 'a': every continuation is decided against this arm one ply in.
            entry(Black, &[('c', 3), ('d', 4)]),
            // 'b': always two replies, so no playout ever decides it.
            entry(Black, &[('g', 5), ('h', 6)]),
            entry(White, &[('e', 3)]),
            entry(White, &[('f', 4)]),
            entry(White, &[('i', 6), ('j', 5)]),
            entry(White, &[('k', 5), ('l', 6)]),
        ]
    };
    let search_settings = Settings {
        playout_depth: 4,
        ..settings(2)
    };

    let optimistic = find_best_move(
        Script::new(table()),
        &Fixed(0.37),
        &search_settings,
        &Control::new(),
        &mut io::sink(),
    );
    assert_eq!(optimistic.best_move, Some(Label('b')));

    // With the evaluator silent, both arms tie at zero and the earlier
    // one keeps the tie.
    let silent = find_best_move(
        Script::new(table()),
        &Fixed(0.0),
        &search_settings,
        &Control::new(),
        &mut io::sink(),
    );
    assert_eq!(silent.best_move, Some(Label('a')));
}

#[test]
fn seeded_searches_are_reproducible() {
    let run = || {
        find_best_move(
            TakeAway::new(21),
            &Material,
            &Settings {
                max_iterations: Some(512),
                seed: Some(42),
                ..Settings::default()
            },
            &Control::new(),
            &mut io::sink(),
        )
    };

    let first = run();
    let second = run();
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.nodes, second.nodes);
    assert_eq!(first.iterations, second.iterations);
}

/// "Nothing to play" and "told to stop before playing" are different
/// outcomes, even though neither carries a move.
#[test]
fn no_moves_and_no_iterations_stay_distinguishable() {
    let no_moves = find_best_move(
        TakeAway::new(0),
        &Material,
        &settings(64),
        &Control::new(),
        &mut io::sink(),
    );
    assert_eq!(no_moves.best_move, None);
    assert_eq!(no_moves.stop, StopReason::NoLegalMoves);

    let control = Control::new();
    control.request_abort();
    let undecided = find_best_move(
        TakeAway::new(9),
        &Material,
        &settings(64),
        &control,
        &mut io::sink(),
    );
    assert_eq!(undecided.best_move, None);
    assert_eq!(undecided.stop, StopReason::Aborted);
}
