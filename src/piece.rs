//! Piece colors.

use std::fmt;

/// The contents of one square: a white piece, a black piece, or nothing.
/// `Empty` also doubles as the tie marker in [`Board::winner`].
///
/// [`Board::winner`]: crate::board::Board::winner
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Piece {
    White,
    Black,
    Empty,
}

impl Piece {
    /// The opposing color. `Empty` maps to itself; game logic never asks.
    pub fn opposite(self) -> Piece {
        match self {
            Piece::White => Piece::Black,
            Piece::Black => Piece::White,
            Piece::Empty => Piece::Empty,
        }
    }

    /// One-character abbreviation used in board dumps.
    pub fn abbrev(self) -> char {
        match self {
            Piece::White => 'w',
            Piece::Black => 'b',
            Piece::Empty => '-',
        }
    }

    /// Full color name.
    pub fn full_name(self) -> &'static str {
        match self {
            Piece::White => "White",
            Piece::Black => "Black",
            Piece::Empty => "Empty",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}
