//! Turn parity invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: Move k is played by X when k is even, O when k is odd.
///
/// The first move is always X's, players alternate, and the next player is
/// derived from step parity. Verifying the recorded moves covers all three.
pub struct TurnParityInvariant;

impl Invariant<Game> for TurnParityInvariant {
    fn holds(game: &Game) -> bool {
        game.timeline()
            .moves()
            .iter()
            .enumerate()
            .all(|(k, mov)| mov.player == Player::at_step(k))
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = Game::new()
            .apply_move(Position::TopLeft)
            .apply_move(Position::Center)
            .apply_move(Position::TopRight)
            .apply_move(Position::BottomLeft)
            .apply_move(Position::BottomRight);
        assert!(TurnParityInvariant::holds(&game));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::new()
            .apply_move(Position::TopLeft)
            .apply_move(Position::Center);

        // Corrupt: rewrite the second move as another X move
        game.timeline.moves[1].player = Player::X;

        assert!(!TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_first_move_by_o_violates() {
        let mut game = Game::new().apply_move(Position::TopLeft);

        game.timeline.moves[0].player = Player::O;

        assert!(!TurnParityInvariant::holds(&game));
    }
}
