//! Append-only timeline of board snapshots.
//!
//! The timeline stores one board snapshot per step, starting from the empty
//! board at step 0, plus the move that produced each later snapshot. It is
//! a pure value: branching returns a new timeline instead of mutating.

use super::action::Move;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered sequence of board snapshots with the moves that produced them.
///
/// Invariant: `snapshots.len() == moves.len() + 1`. Snapshot 0 is the empty
/// board; snapshot k is the board after `moves[..k]` have been played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) moves: Vec<Move>,
}

impl Timeline {
    /// Creates a timeline holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            moves: Vec::new(),
        }
    }

    /// Number of snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Index of the latest snapshot.
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// The board snapshot at the given step.
    ///
    /// The step must be in range (`step < len()`).
    pub fn snapshot(&self, step: usize) -> &Board {
        &self.snapshots[step]
    }

    /// All snapshots in step order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The moves that produced snapshots 1 onwards.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Branches the timeline at `step`, returning a new timeline.
    ///
    /// Snapshots after `step` (and their moves) are discarded, then the new
    /// snapshot and the move that produced it are appended. Used when a move
    /// is played after rewinding to an earlier step.
    #[instrument(skip(self, board))]
    pub fn branch(&self, step: usize, board: Board, mov: Move) -> Self {
        let discarded = self.snapshots.len() - (step + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating forward steps before branching");
        }

        let mut snapshots = self.snapshots[..=step].to_vec();
        let mut moves = self.moves[..step].to_vec();
        snapshots.push(board);
        moves.push(mov);

        Self { snapshots, moves }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
