//! Interactive driver for the tic-tac-toe state machine.
//!
//! Thin presentation wrapper: reads commands from stdin, calls the public
//! game operations, and re-renders the board, status line, and move list.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io::{self, BufRead, Write};
use tictactoe_rewind::{Game, Position};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    info!("Starting tic-tac-toe session");

    let mut game = Game::new();
    for &cell in &cli.moves {
        let pos = cell_number(cell)
            .ok_or_else(|| anyhow::anyhow!("invalid opening cell: {cell}"))?;
        game = game.apply_move(pos);
    }

    render(&game);
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !handle(&mut game, line.trim()) {
            break;
        }
        prompt()?;
    }

    Ok(())
}

/// Runs one command; returns false when the session should end.
fn handle(game: &mut Game, input: &str) -> bool {
    match input {
        "" => {}
        "q" | "quit" | "exit" => return false,
        "h" | "help" | "?" => usage(),
        "history" | "moves" => print_move_list(game),
        "dump" => match serde_json::to_string_pretty(game) {
            Ok(json) => println!("{json}"),
            Err(error) => println!("could not serialize game: {error}"),
        },
        _ if input.starts_with("jump") => {
            let arg = input.trim_start_matches("jump").trim();
            match arg.parse::<usize>() {
                Ok(step) if step < game.timeline().len() => {
                    *game = game.jump_to(step);
                    render(game);
                }
                _ => println!(
                    "jump takes a step from 0 to {}",
                    game.timeline().last_step()
                ),
            }
        }
        _ => match parse_cell(input) {
            Some(pos) => match game.try_move(pos) {
                Ok(next) => {
                    *game = next;
                    render(game);
                }
                Err(error) => println!("{error}"),
            },
            None => {
                println!("unrecognized command: {input}");
                usage();
            }
        },
    }
    true
}

/// Maps a 1-based cell number (as rendered on the board) to a position.
fn cell_number(cell: usize) -> Option<Position> {
    match cell {
        1..=9 => Position::from_index(cell - 1),
        _ => None,
    }
}

/// Parses a 1-based cell number or a position label.
fn parse_cell(input: &str) -> Option<Position> {
    if let Ok(cell) = input.trim().parse::<usize>() {
        return cell_number(cell);
    }
    Position::from_label_or_number(input)
}

/// Prints the board and status line for the displayed step.
fn render(game: &Game) {
    println!("\n{}\n", game.board().display());
    println!("{}", game.status());
}

/// Prints the move list, marking the current entry.
fn print_move_list(game: &Game) {
    for entry in game.move_list() {
        let marker = if entry.is_current() { '*' } else { ' ' };
        println!("{marker} {entry}");
    }
}

/// Prints the command summary.
fn usage() {
    println!("commands:");
    println!("  1-9 or a label (e.g. center)  place a mark");
    println!("  jump <step>                   show an earlier board");
    println!("  history                       list moves");
    println!("  dump                          print game state as JSON");
    println!("  quit                          exit");
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
