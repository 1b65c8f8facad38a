//! End-to-end tests for the game state machine and move timeline.

use tictactoe_rewind::{Game, GameStatus, MoveError, Player, Position, Square};

fn cell(index: usize) -> Position {
    Position::from_index(index).expect("cell index in range")
}

/// Plays the given cell indices in order from a fresh game.
fn play(cells: &[usize]) -> Game {
    cells
        .iter()
        .fold(Game::new(), |game, &i| game.apply_move(cell(i)))
}

#[test]
fn test_first_move_places_x() {
    let game = Game::new().apply_move(cell(0));

    assert_eq!(game.board().get(cell(0)), Square::Occupied(Player::X));
    for i in 1..9 {
        assert!(game.board().is_empty(cell(i)));
    }
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.status().to_string(), "Next player: O");
}

#[test]
fn test_apply_move_advances_step_and_flips_turn() {
    let game = Game::new();
    assert_eq!(game.timeline().len(), game.step() + 1);

    let next = game.apply_move(cell(4));
    assert_eq!(next.timeline().len(), next.step() + 1);
    assert_eq!(next.step(), game.step() + 1);
    assert_eq!(next.to_move(), game.to_move().opponent());
}

#[test]
fn test_left_column_win() {
    // X: 0, 3, 6 - the left column
    let game = play(&[0, 1, 3, 2, 6]);

    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_move_after_win_is_noop() {
    let game = play(&[0, 1, 3, 2, 6]);

    let after = game.apply_move(cell(4));
    assert_eq!(after, game);
    assert!(after.board().is_empty(cell(4)));

    assert!(matches!(game.try_move(cell(4)), Err(MoveError::GameOver)));
}

#[test]
fn test_occupied_cell_is_noop() {
    let game = play(&[4]);

    let after = game.apply_move(cell(4));
    assert_eq!(after, game);

    assert!(matches!(
        game.try_move(cell(4)),
        Err(MoveError::CellOccupied(Position::Center))
    ));
}

#[test]
fn test_jump_then_move_branches_timeline() {
    // X:0, O:1, X:2, rewind to step 1, then claim cell 4
    let game = play(&[0, 1, 2]).jump_to(1);
    assert_eq!(game.to_move(), Player::O);

    let branched = game.apply_move(cell(4));

    // Steps after the branch point were discarded; the new move is step 2.
    assert_eq!(branched.timeline().len(), 3);
    assert_eq!(branched.step(), 2);
    assert_eq!(branched.board().get(cell(4)), Square::Occupied(Player::O));
    assert!(branched.board().is_empty(cell(1)));

    let moves = branched.timeline().moves();
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[1].player(), Player::O);
    assert_eq!(moves[1].position(), Position::Center);
}

#[test]
fn test_jump_preserves_timeline() {
    let game = play(&[0, 1, 2]);
    let rewound = game.jump_to(0);

    assert_eq!(rewound.timeline(), game.timeline());
    assert_eq!(rewound.step(), 0);
    assert_eq!(rewound.to_move(), Player::X);
    assert!(rewound.board().is_empty(cell(0)));
}

#[test]
fn test_move_list_reports_coordinates() {
    let game = play(&[0, 5]);

    let entries = game.move_list();
    assert_eq!(entries.len(), 3);
    assert!(entries[0].mov().is_none());
    assert_eq!(entries[1].step(), 1);

    let first = entries[1].mov().expect("move behind step 1");
    assert_eq!((first.col(), first.row()), (1, 1));

    let second = entries[2].mov().expect("move behind step 2");
    assert_eq!((second.col(), second.row()), (3, 2));
    assert_eq!(entries[2].to_string(), "Move #2 | O at (3, 2)");
}

#[test]
fn test_status_never_reports_draw_on_full_board() {
    // Fills the board with no winning line for either player:
    // X O X / O X X / O X O
    let game = play(&[0, 1, 2, 3, 4, 6, 5, 8, 7]);

    assert!(Position::ALL.iter().all(|&pos| !game.board().is_empty(pos)));
    assert_eq!(game.winner(), None);
    assert_eq!(game.status().to_string(), "Next player: O");
}

#[test]
fn test_game_serde_round_trip() {
    let game = play(&[0, 1, 2]).jump_to(1);

    let json = serde_json::to_string(&game).expect("serialize game");
    let restored: Game = serde_json::from_str(&json).expect("deserialize game");

    assert_eq!(restored, game);
    assert_eq!(restored.status(), game.status());
}
