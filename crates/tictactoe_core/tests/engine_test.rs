//! Tests for the game engine state machine.

use tictactoe_core::{
    Game, GamePhase, MoveError, MoveOutcome, Player, Position, Square, StatusMessage, WinLine,
};

fn play(game: &mut Game, cells: &[usize]) -> MoveOutcome {
    let mut outcome = MoveOutcome::Continue;
    for &cell in cells {
        outcome = game.apply_move(cell).expect("legal move");
    }
    outcome
}

#[test]
fn test_new_game_state() {
    let game = Game::new();
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.phase(), GamePhase::InProgress);
    for cell in 0..9 {
        assert_eq!(game.mark_at(cell), Some(Square::Empty));
    }
}

#[test]
fn test_turn_alternates_on_continue() {
    let mut game = Game::new();
    assert_eq!(game.apply_move(0), Ok(MoveOutcome::Continue));
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.apply_move(1), Ok(MoveOutcome::Continue));
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_diagonal_win() {
    // X@0, O@1, X@4, O@2, X@8 completes the main diagonal.
    let mut game = Game::new();
    let outcome = play(&mut game, &[0, 1, 4, 2, 8]);

    let MoveOutcome::Win { winner, line } = outcome else {
        panic!("Expected a win, got {outcome:?}");
    };
    assert_eq!(winner, Player::X);
    assert_eq!(
        line.cells(),
        [Position::TopLeft, Position::Center, Position::BottomRight]
    );
    assert_eq!(game.phase(), GamePhase::Won { winner, line });
}

#[test]
fn test_winning_move_does_not_flip_turn() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    // X made the winning move; the turn stays with X.
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_draw_on_full_board() {
    // X O X / X O O / O X X filled with no line.
    let mut game = Game::new();
    let outcome = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(outcome, MoveOutcome::Draw);
    assert_eq!(game.phase(), GamePhase::Draw);
    assert_eq!(StatusMessage::for_game(&game), StatusMessage::Draw);
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    let mut game = Game::new();
    game.apply_move(4).expect("legal move");
    let snapshot = game.clone();

    assert_eq!(
        game.apply_move(4),
        Err(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(game, snapshot);
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_out_of_range_rejected_without_mutation() {
    let mut game = Game::new();
    let snapshot = game.clone();
    assert_eq!(game.apply_move(9), Err(MoveError::InvalidCell(9)));
    assert_eq!(game.apply_move(usize::MAX), Err(MoveError::InvalidCell(usize::MAX)));
    assert_eq!(game, snapshot);
}

#[test]
fn test_no_moves_after_win() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let snapshot = game.clone();

    assert_eq!(game.apply_move(8), Err(MoveError::GameNotActive));
    assert_eq!(game, snapshot);
}

#[test]
fn test_no_moves_after_draw() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.apply_move(0), Err(MoveError::GameNotActive));
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert!(matches!(game.phase(), GamePhase::Won { .. }));

    game.reset();
    assert_eq!(game, Game::new());
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert!(game.history().is_empty());

    // The board accepts moves again after reset.
    assert_eq!(game.apply_move(0), Ok(MoveOutcome::Continue));
}

#[test]
fn test_each_square_set_at_most_once() {
    let mut game = Game::new();
    play(&mut game, &[4, 0, 8, 2, 6]);
    let mut seen = std::collections::HashSet::new();
    for mov in game.history() {
        assert!(seen.insert(*mov.position()), "square played twice");
    }
}

#[test]
fn test_every_line_is_winnable() {
    for line in WinLine::ALL {
        let mut game = Game::new();
        // X takes the line's cells; O fills cells off the line.
        let x_cells = line.cells();
        let mut o_cells = Position::ALL
            .into_iter()
            .filter(|pos| !line.contains(*pos));

        for (i, x) in x_cells.into_iter().enumerate() {
            let outcome = game.place(x).expect("legal move");
            if i < 2 {
                assert_eq!(outcome, MoveOutcome::Continue);
                let o = o_cells.next().expect("spare cell for O");
                game.place(o).expect("legal move");
            } else {
                assert_eq!(
                    outcome,
                    MoveOutcome::Win {
                        winner: Player::X,
                        line
                    }
                );
            }
        }
    }
}

#[test]
fn test_state_round_trips_through_json() {
    let mut game = Game::new();
    play(&mut game, &[0, 4, 1]);
    let json = serde_json::to_string(&game).expect("serializes");
    let restored: Game = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(restored, game);
}
