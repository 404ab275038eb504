//! End-to-end game scenarios through the public engine API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tactoe_engine::{
    Board, EngineError, GameInvariants, GameState, InvalidMove, InvariantSet, Outcome, Player,
    Position, Rule, TurnOrchestrator, evaluate_after, explain_computer_move, has_won,
};

/// Plays human moves by index and checks each computer reply against the
/// expected index.
fn play_script(script: &[(Player, usize)]) -> GameState {
    let mut rng = StdRng::seed_from_u64(0);
    script
        .iter()
        .fold(GameState::new(), |game, (player, index)| match player {
            Player::Human => game.apply_human_move(*index).expect("scripted human move"),
            Player::Computer => {
                let next = game
                    .apply_computer_move(&mut rng)
                    .expect("scripted computer move");
                assert_eq!(
                    next.last_move().map(|m| m.position.to_index()),
                    Some(*index),
                    "computer deviated from script"
                );
                next
            }
        })
}

fn board_from(human: &[usize], computer: &[usize]) -> Board {
    let board = human.iter().fold(Board::new(), |b, &i| {
        b.place_move(Player::Human, i).expect("distinct cells")
    });
    computer.iter().fold(board, |b, &i| {
        b.place_move(Player::Computer, i).expect("distinct cells")
    })
}

#[test]
fn test_computer_blocks_top_row() {
    let board = board_from(&[0, 1], &[]);
    let mut rng = StdRng::seed_from_u64(0);
    let decision = explain_computer_move(&board, &mut rng).expect("room left");
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.rule, Rule::Block);
}

#[test]
fn test_computer_completes_top_row_over_block() {
    // Human threatens the bottom row at 7, computer can finish the top row.
    let board = board_from(&[5, 6, 8], &[0, 1]);
    let mut rng = StdRng::seed_from_u64(0);
    let decision = explain_computer_move(&board, &mut rng).expect("room left");
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.rule, Rule::Win);
}

#[test]
fn test_scripted_opening_takes_center() {
    let game = play_script(&[(Player::Human, 0), (Player::Computer, 4), (Player::Human, 8)]);
    assert_eq!(game.evaluate(), Outcome::InProgress);
    assert!(game.is_board_locked());
    assert_eq!(game.board().occupied_count(), 3);
}

#[test]
fn test_computer_wins_scripted_game() {
    let game = play_script(&[
        (Player::Human, 0),
        (Player::Computer, 4),
        (Player::Human, 1),
        (Player::Computer, 2),
        (Player::Human, 8),
        (Player::Computer, 6),
    ]);
    assert_eq!(game.evaluate(), Outcome::ComputerWin);
    assert_eq!(game.apply_human_move(3), Err(InvalidMove::GameOver));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let board = board_from(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
    assert_eq!(evaluate_after(&board, Player::Human), Outcome::Draw);
    assert_eq!(evaluate_after(&board, Player::Computer), Outcome::Draw);
}

#[test]
fn test_scripted_game_ends_in_draw() {
    // Center, then two forced blocks; the human's fourth move leaves no line open.
    let game = play_script(&[
        (Player::Human, 0),
        (Player::Computer, 4),
        (Player::Human, 1),
        (Player::Computer, 2),
        (Player::Human, 6),
        (Player::Computer, 3),
        (Player::Human, 5),
    ]);
    assert_eq!(game.evaluate(), Outcome::InProgress);

    // Bottom-center and bottom-right are both dead cells for either player.
    let mut rng = StdRng::seed_from_u64(9);
    let game = game.apply_computer_move(&mut rng).expect("two cells left");
    assert_eq!(game.evaluate(), Outcome::InProgress);

    let last = game.board().empty_positions();
    assert_eq!(last.len(), 1);
    let game = game
        .apply_human_move(last[0].to_index())
        .expect("last empty cell");

    assert_eq!(game.evaluate(), Outcome::Draw);
    assert!(!game.is_board_locked());
    assert_eq!(game.history().len(), 9);
    assert!(GameInvariants::check_all(&game).is_ok());
    assert_eq!(game.apply_human_move(0), Err(InvalidMove::GameOver));
}

#[test]
fn test_full_board_with_line_is_win() {
    // O X O / X O O / X X X, human's last move at 8 completes the bottom row.
    let board = board_from(&[1, 3, 6, 7, 8], &[0, 2, 4, 5]);
    assert_eq!(evaluate_after(&board, Player::Human), Outcome::HumanWin);
}

#[test]
fn test_random_human_games_always_terminate() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut orchestrator = TurnOrchestrator::seeded(seed ^ 0xA5A5);
        let mut game = GameState::new();
        let mut exchanges = 0;

        while !game.evaluate().is_terminal() {
            let index = game
                .board()
                .empty_positions()
                .choose(&mut rng)
                .expect("in-progress game has room")
                .to_index();
            let exchange = orchestrator
                .play_exchange(&game, index)
                .expect("legal move");
            assert!(GameInvariants::check_all(exchange.state()).is_ok());
            assert!(!exchange.state().is_board_locked());
            game = exchange.into_state();
            exchanges += 1;
            assert!(exchanges <= 5);
        }

        assert_eq!(game.reset(), GameState::new());
    }
}

#[test]
fn test_computer_takes_every_immediate_win() {
    let mut orchestrator = TurnOrchestrator::seeded(77);
    let mut rng = StdRng::seed_from_u64(77);

    for _ in 0..200 {
        let mut game = GameState::new();
        while !game.evaluate().is_terminal() {
            let index = game
                .board()
                .empty_positions()
                .choose(&mut rng)
                .expect("room left")
                .to_index();
            let human = orchestrator.human_half(&game, index).expect("legal move");
            if human.outcome().is_terminal() {
                break;
            }

            let board = *human.state().board();
            let can_win = board.empty_positions().iter().any(|pos| {
                board
                    .place_move(Player::Computer, pos.to_index())
                    .is_ok_and(|b| has_won(&b, Player::Computer))
            });

            let computer = orchestrator
                .computer_half(human.state())
                .expect("room left");
            if can_win {
                assert_eq!(computer.outcome(), Outcome::ComputerWin);
            }
            game = computer.into_state();
        }
    }
}

#[test]
fn test_computer_move_on_finished_game_is_rejected() {
    let mut orchestrator = TurnOrchestrator::seeded(5);
    let game = GameState::new()
        .apply_human_move(0)
        .and_then(|g| g.apply_human_move(1))
        .and_then(|g| g.apply_human_move(2))
        .expect("distinct cells");
    assert_eq!(
        orchestrator.computer_half(&game),
        Err(EngineError::InvalidMove(InvalidMove::GameOver))
    );
}
