//! Board state and rules of Lines of Action.
//!
//! This module provides the core game logic:
//! - Grid state, turn tracking, and move history (for undo)
//! - Move legality under the piece-count-on-line rule: a piece moves
//!   exactly as many squares as there are pieces of either color
//!   anywhere on its full line of travel
//! - Connected-region analysis via 8-directional flood fill, cached
//!   between mutations
//! - Winner determination: a side wins when its pieces first form a
//!   single connected cluster
//!
//! Captures never happen here: [`Board::is_legal`] accepts a move onto
//! an enemy piece (the rules allow it) but [`Board::make_move`] refuses
//! to play one, so every applied move lands on an empty square.

use std::fmt;

use crate::constants::{BOARD_SIZE, DEFAULT_MOVE_LIMIT, NUM_DIRS, NUM_SQUARES};
use crate::moves::Move;
use crate::piece::Piece;
use crate::square::{ALL_SQUARES, Square};

const W: Piece = Piece::White;
const B: Piece = Piece::Black;
const E: Piece = Piece::Empty;

/// The standard initial position, written with rank 8 as the first row
/// so the literal reads like a printed board. Black occupies the top
/// and bottom edges minus the corners, White the left and right edges.
const INITIAL_PIECES: [[Piece; BOARD_SIZE]; BOARD_SIZE] = [
    [E, B, B, B, B, B, B, E],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [W, E, E, E, E, E, E, W],
    [E, B, B, B, B, B, B, E],
];

/// A precondition violation reported by a mutating board operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The move is not legal for the side on move, or is a capture.
    IllegalMove(Move),
    /// `retract` was called with no moves recorded.
    NothingToRetract,
    /// The requested move limit would already have been exceeded.
    MoveLimitTooSmall { limit: usize, moves_made: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::IllegalMove(m) => write!(f, "illegal move: {m}"),
            BoardError::NothingToRetract => write!(f, "no moves to retract"),
            BoardError::MoveLimitTooSmall { limit, moves_made } => write!(
                f,
                "move limit {limit} is too small: {moves_made} moves already made"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// Sizes of the maximal connected clusters of each color, largest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Regions {
    white: Vec<usize>,
    black: Vec<usize>,
}

impl Regions {
    /// One flood-fill pass over the whole grid, 8-directionally adjacent.
    fn compute(grid: &[Piece; NUM_SQUARES]) -> Regions {
        let mut regions = Regions::default();
        let mut visited = [false; NUM_SQUARES];

        for &start in ALL_SQUARES.iter() {
            let piece = grid[start.index()];
            if piece == Piece::Empty || visited[start.index()] {
                continue;
            }
            let mut stack = vec![start];
            let mut count = 0usize;
            while let Some(sq) = stack.pop() {
                if visited[sq.index()] {
                    continue;
                }
                visited[sq.index()] = true;
                count += 1;
                for dir in 0..NUM_DIRS {
                    if let Some(n) = sq.move_dest(dir, 1) {
                        if !visited[n.index()] && grid[n.index()] == piece {
                            stack.push(n);
                        }
                    }
                }
            }
            match piece {
                Piece::White => regions.white.push(count),
                _ => regions.black.push(count),
            }
        }

        regions.white.sort_unstable_by(|a, b| b.cmp(a));
        regions.black.sort_unstable_by(|a, b| b.cmp(a));
        regions
    }
}

/// The state of a game of Lines of Action.
#[derive(Clone, Debug)]
pub struct Board {
    /// Contents of square `s` at index `s.index()`.
    grid: [Piece; NUM_SQUARES],
    /// Side to move next.
    turn: Piece,
    /// Applied moves in order, each paired with the piece the move
    /// displaced from its destination (always `Empty` while captures
    /// are refused, but retract restores it regardless).
    history: Vec<(Move, Piece)>,
    /// Plies after which an undecided game is a tie.
    move_limit: usize,
    /// Cached cluster sizes, recomputed lazily after each mutation.
    regions: Option<Regions>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board in the standard initial position, Black to move.
    pub fn new() -> Board {
        Self::from_layout(INITIAL_PIECES, Piece::Black)
    }

    /// A board with explicit contents and side to move. `layout[0]` is
    /// rank 8 (the top of a printed board) and `layout[7]` is rank 1,
    /// so literals read the way the position looks.
    pub fn from_layout(layout: [[Piece; BOARD_SIZE]; BOARD_SIZE], turn: Piece) -> Board {
        debug_assert!(turn != Piece::Empty);
        let mut grid = [Piece::Empty; NUM_SQUARES];
        for (i, rank) in layout.iter().enumerate() {
            let row = BOARD_SIZE - 1 - i;
            for (col, &piece) in rank.iter().enumerate() {
                grid[row * BOARD_SIZE + col] = piece;
            }
        }
        Board {
            grid,
            turn,
            history: Vec::new(),
            move_limit: DEFAULT_MOVE_LIMIT,
            regions: None,
        }
    }

    /// Reset to the standard initial position.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The contents of square `sq`.
    #[inline]
    pub fn get(&self, sq: Square) -> Piece {
        self.grid[sq.index()]
    }

    #[inline]
    fn set(&mut self, sq: Square, v: Piece) {
        self.grid[sq.index()] = v;
    }

    /// The side to move next.
    #[inline]
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// Number of moves applied and not retracted.
    #[inline]
    pub fn moves_made(&self) -> usize {
        self.history.len()
    }

    /// Set the tie threshold to `limit` full moves per side (so `2 * limit`
    /// plies). Fails if that many plies have already been played.
    pub fn set_move_limit(&mut self, limit: usize) -> Result<(), BoardError> {
        if 2 * limit <= self.moves_made() {
            return Err(BoardError::MoveLimitTooSmall {
                limit,
                moves_made: self.moves_made(),
            });
        }
        self.move_limit = 2 * limit;
        Ok(())
    }

    /// True iff moving from `from` to `to` is legal for the side on move.
    /// A move onto an enemy piece passes this check; `make_move` is
    /// where captures are refused.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        match Move::new(from, to) {
            Some(m) => self.is_legal_move(m),
            None => false,
        }
    }

    /// True iff `m` is legal for the side on move.
    pub fn is_legal_move(&self, m: Move) -> bool {
        self.get(m.from()) == self.turn
            && m.length() == self.pieces_along_line(m.from(), m.direction())
            && !self.blocked(m.from(), m.to(), m.direction())
    }

    /// All legal moves from this position, source squares in row-major
    /// order, destinations in row-major order per source.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for &from in ALL_SQUARES.iter() {
            if self.get(from) != self.turn {
                continue;
            }
            for &to in ALL_SQUARES.iter() {
                if let Some(m) = Move::new(from, to) {
                    if self.is_legal_move(m) {
                        moves.push(m);
                    }
                }
            }
        }
        moves
    }

    /// Apply `m`. The move must be legal and must not land on an
    /// occupied square; on success the turn flips and the cached
    /// connectivity results are invalidated.
    pub fn make_move(&mut self, m: Move) -> Result<(), BoardError> {
        if !self.is_legal_move(m) {
            return Err(BoardError::IllegalMove(m));
        }
        let displaced = self.get(m.to());
        if displaced != Piece::Empty {
            // A legal capture by the rules, but captures are not played.
            return Err(BoardError::IllegalMove(m));
        }
        let mover = self.get(m.from());
        self.history.push((m, displaced));
        self.set(m.from(), Piece::Empty);
        self.set(m.to(), mover);
        self.turn = self.turn.opposite();
        self.regions = None;
        Ok(())
    }

    /// Undo the last applied move exactly, restoring the displaced piece
    /// and flipping the turn back. Returns the retracted move.
    pub fn retract(&mut self) -> Result<Move, BoardError> {
        let (m, displaced) = self.history.pop().ok_or(BoardError::NothingToRetract)?;
        let mover = self.get(m.to());
        self.set(m.to(), displaced);
        self.set(m.from(), mover);
        self.turn = self.turn.opposite();
        self.regions = None;
        Ok(m)
    }

    /// Sizes of `side`'s maximal connected clusters, largest first.
    pub fn region_sizes(&mut self, side: Piece) -> &[usize] {
        let regions = self.regions();
        match side {
            Piece::White => &regions.white,
            Piece::Black => &regions.black,
            Piece::Empty => &[],
        }
    }

    /// True iff all of `side`'s pieces form one connected cluster.
    pub fn pieces_contiguous(&mut self, side: Piece) -> bool {
        self.region_sizes(side).len() == 1
    }

    /// The winning side, if any: `None` while the game runs,
    /// `Some(Piece::Empty)` for a tie at the move limit. When a move
    /// leaves both sides contiguous, the side that did not just move
    /// (the side now on move is the one that did not act) wins.
    pub fn winner(&mut self) -> Option<Piece> {
        let white = self.pieces_contiguous(Piece::White);
        let black = self.pieces_contiguous(Piece::Black);
        if white && !black {
            Some(Piece::White)
        } else if black && !white {
            Some(Piece::Black)
        } else if white && black {
            Some(self.turn.opposite())
        } else if self.moves_made() >= self.move_limit {
            Some(Piece::Empty)
        } else {
            None
        }
    }

    /// True iff the game has ended in a win or a tie.
    pub fn game_over(&mut self) -> bool {
        self.winner().is_some()
    }

    fn regions(&mut self) -> &Regions {
        let grid = &self.grid;
        self.regions.get_or_insert_with(|| Regions::compute(grid))
    }

    /// Number of pieces of either color anywhere on the full line
    /// through `from` in direction `dir`, including `from` itself.
    fn pieces_along_line(&self, from: Square, dir: usize) -> usize {
        let mut count = usize::from(self.get(from) != Piece::Empty);
        for d in [dir, (dir + 4) % NUM_DIRS] {
            let mut steps = 1;
            while let Some(sq) = from.move_dest(d, steps) {
                if self.get(sq) != Piece::Empty {
                    count += 1;
                }
                steps += 1;
            }
        }
        count
    }

    /// True iff the path from `from` to `to` is blocked: the destination
    /// holds a friendly piece, or an enemy piece sits strictly between.
    /// Friendly pieces may be jumped over.
    fn blocked(&self, from: Square, to: Square, dir: usize) -> bool {
        let mover = self.get(from);
        if self.get(to) == mover {
            return true;
        }
        let mut steps = 1;
        while let Some(sq) = from.move_dest(dir, steps) {
            if sq == to {
                break;
            }
            if self.get(sq) == mover.opposite() {
                return true;
            }
            steps += 1;
        }
        false
    }
}

impl PartialEq for Board {
    /// Boards compare by grid contents and side to move; history and
    /// move limit are not part of position identity.
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid && self.turn == other.turn
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===")?;
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "    ")?;
            for col in 0..BOARD_SIZE {
                write!(f, "{} ", self.grid[row * BOARD_SIZE + col])?;
            }
            writeln!(f)?;
        }
        write!(f, "Next move: {}\n===", self.turn.full_name())
    }
}
