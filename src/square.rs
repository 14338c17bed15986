//! Board coordinates.
//!
//! A [`Square`] is an immutable (column, row) pair with both components in
//! `0..8`. Column 0 is file 'a', row 0 is rank 1, so `(2, 2)` prints as "c3".
//! Squares are packed into a single index (`row * 8 + col`) for array-backed
//! board storage, and know how to step along the 8 compass directions.

use std::fmt;

use crate::constants::{BOARD_SIZE, DIR_DELTAS, NUM_SQUARES};

/// A square on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    col: u8,
    row: u8,
}

/// All 64 squares in row-major order (a1, b1, ..., h8).
pub const ALL_SQUARES: [Square; NUM_SQUARES] = {
    let mut squares = [Square { col: 0, row: 0 }; NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        squares[i] = Square {
            col: (i % BOARD_SIZE) as u8,
            row: (i / BOARD_SIZE) as u8,
        };
        i += 1;
    }
    squares
};

impl Square {
    /// Create a square from a column and row, or `None` if either
    /// coordinate is off the board.
    pub fn new(col: usize, row: usize) -> Option<Square> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Square {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from its packed index, or `None` if out of range.
    pub fn from_index(index: usize) -> Option<Square> {
        ALL_SQUARES.get(index).copied()
    }

    /// Column number, 0 to 7 (file 'a' to 'h').
    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row number, 0 to 7 (rank 1 to 8).
    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Packed index into a 64-element array, `row * 8 + col`.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Compass direction from this square to `to`: 0 for north, then
    /// clockwise through 7 for northwest. Returns `None` when the two
    /// squares are equal or do not share a row, column, or diagonal.
    pub fn direction(self, to: Square) -> Option<usize> {
        let dc = to.col as i8 - self.col as i8;
        let dr = to.row as i8 - self.row as i8;
        if dc != 0 && dr != 0 && dc.abs() != dr.abs() {
            return None;
        }
        match (dc.signum(), dr.signum()) {
            (0, 1) => Some(0),
            (1, 1) => Some(1),
            (1, 0) => Some(2),
            (1, -1) => Some(3),
            (0, -1) => Some(4),
            (-1, -1) => Some(5),
            (-1, 0) => Some(6),
            (-1, 1) => Some(7),
            _ => None, // (0, 0): same square
        }
    }

    /// Chebyshev distance to `to`: the number of single steps along a
    /// compass direction needed to get there.
    pub fn distance(self, to: Square) -> usize {
        let dc = (to.col as i8 - self.col as i8).unsigned_abs() as usize;
        let dr = (to.row as i8 - self.row as i8).unsigned_abs() as usize;
        dc.max(dr)
    }

    /// The square reached by taking `steps` steps in direction `dir`,
    /// or `None` if that leaves the board.
    pub fn move_dest(self, dir: usize, steps: usize) -> Option<Square> {
        let (dc, dr) = *DIR_DELTAS.get(dir)?;
        let col = self.col as i32 + dc as i32 * steps as i32;
        let row = self.row as i32 + dr as i32 * steps as i32;
        if (0..BOARD_SIZE as i32).contains(&col) && (0..BOARD_SIZE as i32).contains(&row) {
            Some(Square {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}
