//! Search over connect four

use std::num::NonZeroUsize;

use adversarial_search::{
    AdversarialSearchProblem, GameState, Player,
    games::connect4::{ConnectFour, ConnectFourState},
    search::{alpha_beta_cutoff, alpha_beta_cutoff_report},
};

fn state(grid: &str) -> ConnectFourState {
    ConnectFourState::from_string(grid).unwrap()
}

fn ply(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn seat_heuristic(game: &ConnectFour, seat: Player) -> impl Fn(&ConnectFourState) -> f64 + '_ {
    move |s| game.heuristic(s, seat)
}

#[test]
fn test_completes_the_vertical_four() {
    let game = ConnectFour::default();
    let position = state(
        ".......
         .......
         .......
         ...X...
         ...XO..
         O..XO..",
    );
    assert_eq!(position.player_to_move(), Player::One);

    for cutoff in 1..=3 {
        let heuristic = seat_heuristic(&game, Player::One);
        let report = alpha_beta_cutoff_report(&game, &position, ply(cutoff), heuristic).unwrap();
        assert_eq!(report.outcome.action, Some(3), "cutoff {cutoff}");
        assert_eq!(report.outcome.value, f64::INFINITY);
    }
}

#[test]
fn test_second_player_blocks_the_column() {
    let game = ConnectFour::default();
    let position = state(
        ".......
         .......
         .......
         ...X...
         ...X...
         O..XO..",
    );
    assert_eq!(position.player_to_move(), Player::Two);

    let action =
        alpha_beta_cutoff(&game, &position, ply(2), seat_heuristic(&game, Player::Two)).unwrap();
    assert_eq!(action, Some(3));
}

#[test]
fn test_opening_move_is_legal() {
    let game = ConnectFour::default();
    let start = game.initial_state();
    let report =
        alpha_beta_cutoff_report(&game, &start, ply(3), seat_heuristic(&game, Player::One))
            .unwrap();
    let action = report.outcome.action.unwrap();
    assert!(game.available_actions(&start).contains(&action));
    assert!(report.stats.heuristic_leaves > 0);
    assert_eq!(report.stats.max_ply, 3);
}

#[test]
fn test_square_board_game_to_the_end() {
    let game = ConnectFour::new(5, 5).unwrap();
    let mut position = game.initial_state();
    let mut moves = 0;
    while !game.is_terminal(&position) {
        let seat = position.player_to_move();
        let action = alpha_beta_cutoff(&game, &position, ply(2), seat_heuristic(&game, seat))
            .unwrap()
            .unwrap();
        position = game.transition(&position, &action);
        moves += 1;
    }
    assert!(moves <= 25);
    let outcome = game.evaluate_terminal(&position).unwrap();
    assert_eq!(outcome.value(Player::One), -outcome.value(Player::Two));
}
