//! Replay consistency invariant: every snapshot is the replay of its move prefix.

use super::Invariant;
use crate::{Board, Game, Square};

/// Invariant: Snapshot k equals the board produced by replaying moves 0..k.
///
/// Snapshot 0 is the empty board, each move lands on an empty cell, and no
/// cell is ever overwritten. Verified by replaying the recorded moves and
/// comparing against every stored snapshot.
pub struct ReplayConsistentInvariant;

impl Invariant<Game> for ReplayConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let timeline = game.timeline();
        let mut replayed = Board::new();

        if timeline.snapshot(0) != &replayed {
            return false;
        }

        for (k, mov) in timeline.moves().iter().enumerate() {
            // Cell must be empty before placing
            if !replayed.is_empty(mov.position) {
                return false;
            }

            replayed.set(mov.position, Square::Occupied(mov.player));

            if timeline.snapshot(k + 1) != &replayed {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Every snapshot equals the replay of its move prefix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(ReplayConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_moves() {
        let game = Game::new()
            .apply_move(Position::TopLeft)
            .apply_move(Position::Center)
            .apply_move(Position::TopRight)
            .apply_move(Position::BottomLeft);
        assert!(ReplayConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_branch() {
        let game = Game::new()
            .apply_move(Position::TopLeft)
            .apply_move(Position::Center)
            .apply_move(Position::TopRight)
            .jump_to(1)
            .apply_move(Position::BottomRight);
        assert!(ReplayConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = Game::new().apply_move(Position::Center);

        // Corrupt an occupied cell in the latest snapshot
        game.timeline.snapshots[1].set(Position::Center, Square::Occupied(Player::O));

        assert!(!ReplayConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_snapshot_without_move_violates() {
        let mut game = Game::new().apply_move(Position::Center);

        // Corrupt the starting snapshot
        game.timeline.snapshots[0].set(Position::TopLeft, Square::Occupied(Player::O));

        assert!(!ReplayConsistentInvariant::holds(&game));
    }
}
