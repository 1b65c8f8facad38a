//! Contract-based validation for the move transition.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::game::Game;
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The cell at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks that the target cell is unoccupied on the displayed snapshot.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &Game) -> Result<(), MoveError> {
        if !game.board().is_empty(pos) {
            Err(MoveError::CellOccupied(pos))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The displayed snapshot must not already have a winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks that no winning line exists on the displayed snapshot.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.winner().is_some() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: A move is legal if the game is still open and
/// the target cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        CellIsEmpty::check(pos, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - The displayed snapshot has no winner
/// - The target cell is empty
///
/// Postconditions:
/// - Timeline stays aligned with the move list
/// - Players still alternate
/// - Every snapshot still replays from its move prefix
pub struct MoveContract;

impl Contract<Game, Position> for MoveContract {
    fn pre(game: &Game, action: &Position) -> Result<(), MoveError> {
        LegalMove::check(*action, game)
    }

    fn post(_before: &Game, after: &Game) -> Result<(), MoveError> {
        // Verify all invariants using the composed set
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
