//! loa-rust: a Lines of Action engine.
//!
//! ## Usage
//!
//! - `loa-rust` - Show a demo game
//! - `loa-rust play` - Start the interactive command loop
//! - `loa-rust demo` - Run the demo

use anyhow::Context;
use clap::{Parser, Subcommand};

use loa_rust::board::Board;
use loa_rust::cli::Game;
use loa_rust::search::MachinePlayer;

/// loa-rust: a Lines of Action engine
#[derive(Parser)]
#[command(name = "loa-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive command loop (type `help` for commands)
    Play,
    /// Play a short engine-vs-engine demo game
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play) => {
            let mut game = Game::new();
            game.run().context("command loop failed")?;
        }
        Some(Commands::Demo) | None => {
            run_demo();
        }
    }
    Ok(())
}

fn run_demo() {
    println!("loa-rust: Lines of Action engine\n");

    let mut board = Board::new();
    println!("{board}\n");

    // Three full moves of engine self-play from the standard position.
    for _ in 0..6 {
        if board.winner().is_some() {
            break;
        }
        let mut player = MachinePlayer::with_depth(board.turn(), 2);
        let Some(m) = player.search_for_move(&board) else {
            break;
        };
        println!("{} plays {m}", board.turn().full_name());
        if board.make_move(m).is_err() {
            break;
        }
    }

    println!("\n{board}");
    match board.winner() {
        Some(loa_rust::piece::Piece::Empty) => println!("Result: tie"),
        Some(side) => println!("Result: {} wins", side.full_name()),
        None => println!("Game in progress after {} moves", board.moves_made()),
    }
}
