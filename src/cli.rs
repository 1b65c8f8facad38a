//! Command-line interface for tictactoe_rewind.

use clap::Parser;

/// Tic-tac-toe with a rewindable move timeline
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Play tic-tac-toe and rewind through the move timeline", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Cells (1-9) to play before the interactive prompt, e.g. --moves 5,1,9
    #[arg(long, value_delimiter = ',')]
    pub moves: Vec<usize>,
}
