//! Tic-tac-toe game state machine with a rewindable move timeline.
//!
//! # Architecture
//!
//! - **Types**: board, players, and named positions
//! - **Rules**: pure win detection over the 8 fixed lines
//! - **Timeline**: append-only board snapshots with branching on rewind
//! - **Game**: pure transition functions (`apply_move`, `jump_to`) plus the
//!   derived status line and labeled move list
//! - **Contracts & invariants**: Hoare-style move validation backed by
//!   independently testable invariants
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Game, Player, Position};
//!
//! let game = Game::new()
//!     .apply_move(Position::TopLeft)
//!     .apply_move(Position::Center);
//!
//! assert_eq!(game.to_move(), Player::X);
//! assert_eq!(game.status().to_string(), "Next player: X");
//!
//! // Rewind to move 1 and branch: the second move is discarded.
//! let branched = game.jump_to(1).apply_move(Position::BottomRight);
//! assert_eq!(branched.timeline().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod position;
mod rules;
mod timeline;
mod types;

// Public validation layers
pub mod contracts;
pub mod invariants;

// Crate-level exports - Move records and errors
pub use action::{Move, MoveError};

// Crate-level exports - Game state machine
pub use game::{Game, GameStatus, HistoryEntry};

// Crate-level exports - Board types
pub use position::Position;
pub use timeline::Timeline;
pub use types::{Board, Player, Square};

// Crate-level exports - Win detection
pub use rules::check_winner;
