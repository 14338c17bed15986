//! The automated player: depth-limited minimax with alpha-beta pruning.
//!
//! The search clones the board once per candidate move, so sibling
//! branches never share mutable state. White maximizes and Black
//! minimizes; a decided position scores `WINNING_VALUE` (or its
//! negation), which dominates any heuristic estimate while staying
//! strictly below the `INFTY` window bounds.
//!
//! At the horizon the evaluator is a deliberately crude asymmetry
//! measure over cluster counts: a side with fewer, larger clusters is
//! closer to connecting everything.

use crate::board::Board;
use crate::constants::{INFTY, SEARCH_DEPTH, WINNING_VALUE};
use crate::moves::Move;
use crate::piece::Piece;

/// An automated player that picks moves by game-tree search.
pub struct MachinePlayer {
    side: Piece,
    depth: usize,
    found_move: Option<Move>,
}

impl MachinePlayer {
    /// A player for `side` searching at the default fixed depth.
    pub fn new(side: Piece) -> Self {
        Self::with_depth(side, SEARCH_DEPTH)
    }

    /// A player for `side` searching `depth` plies deep.
    pub fn with_depth(side: Piece, depth: usize) -> Self {
        MachinePlayer {
            side,
            depth,
            found_move: None,
        }
    }

    /// The color this player plays.
    pub fn side(&self) -> Piece {
        self.side
    }

    /// Search the game tree from `board` and return the best move found.
    /// Returns `None` only when the depth is zero or no move can be
    /// played (the game is already decided).
    pub fn search_for_move(&mut self, board: &Board) -> Option<Move> {
        let mut work = board.clone();
        self.found_move = None;
        let sense = if self.side == Piece::White { 1 } else { -1 };
        self.find_move(&mut work, self.depth, true, sense, -INFTY, INFTY);
        self.found_move
    }

    /// Return the value of `board` searched to `depth` plies, recording
    /// the move found in `found_move` iff `save_move`. `sense` is 1 when
    /// the side at this level maximizes and -1 when it minimizes. A
    /// depth-0 or decided position is evaluated statically and records
    /// no move.
    fn find_move(
        &mut self,
        board: &mut Board,
        depth: usize,
        save_move: bool,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        match board.winner() {
            Some(Piece::White) => return WINNING_VALUE,
            Some(Piece::Black) => return -WINNING_VALUE,
            Some(Piece::Empty) => return 0,
            None => {}
        }
        if depth == 0 {
            return evaluate(board);
        }

        let mut best_score = if sense > 0 { -INFTY } else { INFTY };
        for m in board.legal_moves() {
            let mut child = board.clone();
            if child.make_move(m).is_err() {
                continue; // capture destinations are skipped
            }
            if save_move && self.found_move.is_none() {
                self.found_move = Some(m);
            }
            let score = self.find_move(&mut child, depth - 1, false, -sense, alpha, beta);
            if (sense > 0 && score > best_score) || (sense < 0 && score < best_score) {
                best_score = score;
                if save_move {
                    self.found_move = Some(m);
                }
            }
            if sense > 0 {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }
        best_score
    }
}

/// Static estimate of a position, from White's (maximizing) point of
/// view: 100 points per cluster the opponent has over us.
fn evaluate(board: &mut Board) -> i32 {
    let black = board.region_sizes(Piece::Black).len() as i32;
    let white = board.region_sizes(Piece::White).len() as i32;
    100 * (black - white)
}
