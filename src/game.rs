//! Game state machine with time travel over the move timeline.
//!
//! `Game` is a pure value: every operation borrows the current state and
//! returns the next one. The presentation layer calls `apply_move` and
//! `jump_to` directly and re-reads the derived status and move list.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::position::Position;
use super::rules;
use super::timeline::Timeline;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Derived status
// ─────────────────────────────────────────────────────────────

/// Current status of the game, derived from the displayed snapshot.
///
/// There is no draw variant: a full board with no winner still reports the
/// next player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; this player moves next.
    NextPlayer(Player),
    /// A player has three in a row on the displayed snapshot.
    Won(Player),
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::NextPlayer(player) => write!(f, "Next player: {}", player),
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Derived move list
// ─────────────────────────────────────────────────────────────

/// One row of the derived move list.
///
/// Entry 0 is the game start; entry k carries the move that produced
/// snapshot k. The entry at the current step is emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    step: usize,
    mov: Option<Move>,
    current: bool,
}

impl HistoryEntry {
    /// Step this entry jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The move that produced this step, if any (none for the game start).
    pub fn mov(&self) -> Option<Move> {
        self.mov
    }

    /// True for the entry matching the current step.
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Label for this entry.
    ///
    /// The current entry reads "Move #k"; the others read "Go to game
    /// start" or "Go to move #k".
    pub fn label(&self) -> String {
        if self.current {
            format!("Move #{}", self.step)
        } else if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mov {
            Some(mov) => write!(f, "{} | {}", self.label(), mov),
            None => write!(f, "{}", self.label()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Game
// ─────────────────────────────────────────────────────────────

/// Complete game state: the snapshot timeline and the current step pointer.
///
/// The player to move is derived from step parity, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) timeline: Timeline,
    pub(crate) step: usize,
}

impl Game {
    /// Creates a new game showing the empty starting board.
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            step: 0,
        }
    }

    /// Returns the snapshot timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Returns the current step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the board snapshot at the current step.
    pub fn board(&self) -> &Board {
        self.timeline.snapshot(self.step)
    }

    /// Returns the player to move, derived from step parity.
    pub fn to_move(&self) -> Player {
        Player::at_step(self.step)
    }

    /// Returns the winner on the displayed snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.board())
    }

    /// Returns the derived status for the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::NextPlayer(self.to_move()),
        }
    }

    /// Applies a move at the given position, returning the next state.
    ///
    /// The timeline branches at the current step: snapshots beyond it are
    /// discarded before the new one is appended.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` if the displayed snapshot already has a
    /// winner, or `MoveError::CellOccupied` if the cell is taken.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn try_move(&self, pos: Position) -> Result<Self, MoveError> {
        MoveContract::pre(self, &pos)?;

        let player = self.to_move();
        let mut board = self.board().clone();
        board.set(pos, Square::Occupied(player));

        let next = Self {
            timeline: self
                .timeline
                .branch(self.step, board, Move::new(player, pos)),
            step: self.step + 1,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        Ok(next)
    }

    /// Applies a move, silently ignoring illegal ones.
    ///
    /// An occupied cell or an already-won board leaves the state unchanged;
    /// the rejection is only logged.
    #[instrument(skip(self))]
    pub fn apply_move(&self, pos: Position) -> Self {
        match self.try_move(pos) {
            Ok(next) => next,
            Err(error) => {
                warn!(%error, "Move rejected; state unchanged");
                self.clone()
            }
        }
    }

    /// Jumps the step pointer to an earlier or later snapshot.
    ///
    /// The timeline is untouched; only the pointer moves. The step must be
    /// in range (`step < timeline.len()`) - entries come from the rendered
    /// move list, so callers hold valid steps by construction.
    #[instrument(skip(self))]
    pub fn jump_to(&self, step: usize) -> Self {
        debug_assert!(step < self.timeline.len(), "jump target out of range");
        Self {
            timeline: self.timeline.clone(),
            step,
        }
    }

    /// Derives the move list: one labeled entry per snapshot.
    pub fn move_list(&self) -> Vec<HistoryEntry> {
        (0..self.timeline.len())
            .map(|step| HistoryEntry {
                step,
                mov: step.checked_sub(1).map(|k| self.timeline.moves()[k]),
                current: step == self.step,
            })
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
