//! Interactive command loop.
//!
//! A thin text front end over the engine: it parses one command per
//! line, relays moves to the [`Board`], and lets the [`MachinePlayer`]
//! answer. All game knowledge stays in the core; this module only
//! translates text to API calls and back.
//!
//! ## Commands
//!
//! - `new` - Reset to the standard initial position
//! - `board` - Print the current position
//! - `move <from-to>` - Play a move, e.g. `move b1-b3`
//! - `auto` - Let the machine player choose and play a move
//! - `random` - Play a uniformly random legal move
//! - `undo` - Retract the last move
//! - `limit <n>` - Tie after `n` full moves per side
//! - `moves` - List all legal moves
//! - `winner` - Report the game result so far
//! - `help` - List commands
//! - `quit` - Exit

use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::moves::Move;
use crate::piece::Piece;
use crate::search::MachinePlayer;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "auto", "board", "help", "limit", "move", "moves", "new", "quit", "random", "undo", "winner",
];

/// Command-loop state: one game in progress.
pub struct Game {
    board: Board,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game in the standard initial position.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
        }
    }

    /// The board being played on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            if success {
                if !message.is_empty() {
                    writeln!(stdout, "{message}")?;
                }
            } else {
                writeln!(stdout, "error: {message}")?;
            }
            stdout.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "new" => {
                self.board.clear();
                (true, String::new())
            }

            "board" => (true, self.board.to_string()),

            "move" => {
                if args.is_empty() {
                    return (false, "missing move, e.g. move b1-b3".to_string());
                }
                match args[0].parse::<Move>() {
                    Ok(m) => match self.board.make_move(m) {
                        Ok(()) => (true, String::new()),
                        Err(e) => (false, e.to_string()),
                    },
                    Err(e) => (false, e.to_string()),
                }
            }

            "auto" => {
                if self.board.game_over() {
                    return (false, "game is over".to_string());
                }
                let mut player = MachinePlayer::new(self.board.turn());
                match player.search_for_move(&self.board) {
                    Some(m) => match self.board.make_move(m) {
                        Ok(()) => (true, m.to_string()),
                        Err(e) => (false, e.to_string()),
                    },
                    None => (false, "no move available".to_string()),
                }
            }

            "random" => {
                if self.board.game_over() {
                    return (false, "game is over".to_string());
                }
                let moves: Vec<Move> = self
                    .board
                    .legal_moves()
                    .into_iter()
                    .filter(|m| self.board.get(m.to()) == Piece::Empty)
                    .collect();
                if moves.is_empty() {
                    return (false, "no move available".to_string());
                }
                let m = moves[fastrand::usize(..moves.len())];
                match self.board.make_move(m) {
                    Ok(()) => (true, m.to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "undo" => match self.board.retract() {
                Ok(m) => (true, format!("retracted {m}")),
                Err(e) => (false, e.to_string()),
            },

            "limit" => {
                if args.is_empty() {
                    return (false, "missing limit".to_string());
                }
                match args[0].parse::<usize>() {
                    Ok(limit) => match self.board.set_move_limit(limit) {
                        Ok(()) => (true, String::new()),
                        Err(e) => (false, e.to_string()),
                    },
                    Err(_) => (false, "invalid limit".to_string()),
                }
            }

            "moves" => {
                let moves = self
                    .board
                    .legal_moves()
                    .iter()
                    .map(Move::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                (true, moves)
            }

            "winner" => match self.board.winner() {
                Some(Piece::Empty) => (true, "tie".to_string()),
                Some(side) => (true, format!("{} wins", side.full_name())),
                None => (true, "in progress".to_string()),
            },

            "help" => (true, KNOWN_COMMANDS.join("\n")),

            "quit" => (true, String::new()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_command() {
        let mut game = Game::new();
        let (success, _) = game.execute("move", &["b1-b3"]);
        assert!(success);
        assert_eq!(game.board().moves_made(), 1);

        // Vertical range from c1 is two squares, not one.
        let (success, message) = game.execute("move", &["c1-c2"]);
        assert!(!success);
        assert!(message.contains("illegal move"));
    }

    #[test]
    fn test_move_command_rejects_bad_notation() {
        let mut game = Game::new();
        let (success, _) = game.execute("move", &["b1b3"]);
        assert!(!success);
        let (success, _) = game.execute("move", &["z9-a1"]);
        assert!(!success);
        let (success, _) = game.execute("move", &[]);
        assert!(!success);
    }

    #[test]
    fn test_undo_command() {
        let mut game = Game::new();
        game.execute("move", &["b1-b3"]);
        let (success, message) = game.execute("undo", &[]);
        assert!(success);
        assert_eq!(message, "retracted b1-b3");
        assert_eq!(game.board().moves_made(), 0);

        let (success, _) = game.execute("undo", &[]);
        assert!(!success);
    }

    #[test]
    fn test_new_resets() {
        let mut game = Game::new();
        game.execute("move", &["b1-b3"]);
        let (success, _) = game.execute("new", &[]);
        assert!(success);
        assert_eq!(game.board().moves_made(), 0);
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_moves_command() {
        let mut game = Game::new();
        let (success, message) = game.execute("moves", &[]);
        assert!(success);
        assert!(message.contains("b1-b3"));
        assert_eq!(message.split_whitespace().count(), 36);
    }

    #[test]
    fn test_random_command_plays_legal_move() {
        fastrand::seed(7);
        let mut game = Game::new();
        let (success, message) = game.execute("random", &[]);
        assert!(success);
        assert!(message.parse::<Move>().is_ok());
        assert_eq!(game.board().moves_made(), 1);
    }

    #[test]
    fn test_winner_and_limit_commands() {
        let mut game = Game::new();
        let (success, message) = game.execute("winner", &[]);
        assert!(success);
        assert_eq!(message, "in progress");

        let (success, _) = game.execute("limit", &["0"]);
        assert!(!success);
        let (success, _) = game.execute("limit", &["abc"]);
        assert!(!success);
        let (success, _) = game.execute("limit", &["10"]);
        assert!(success);
    }

    #[test]
    fn test_unknown_command() {
        let mut game = Game::new();
        let (success, message) = game.execute("resign", &[]);
        assert!(!success);
        assert!(message.contains("unknown command"));
    }
}
