//! Aligned timeline invariant: one snapshot per move plus the initial board.

use super::Invariant;
use crate::Game;

/// Invariant: Timeline length equals move count plus one.
///
/// Every move produces exactly one snapshot, and snapshot 0 is the starting
/// board. The step pointer always addresses an existing snapshot.
pub struct AlignedTimelineInvariant;

impl Invariant<Game> for AlignedTimelineInvariant {
    fn holds(game: &Game) -> bool {
        let snapshots = game.timeline().snapshots().len();
        let moves = game.timeline().moves().len();

        snapshots == moves + 1 && game.step() < snapshots
    }

    fn description() -> &'static str {
        "Timeline holds one snapshot per move plus the initial board"
    }
}
