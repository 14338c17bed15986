//! Moves and move notation.
//!
//! A [`Move`] is an immutable (from, to) pair whose endpoints lie on a
//! common row, column, or diagonal; construction fails for anything else.
//! Moves are written as two square designators joined by a dash, e.g.
//! `"c3-f6"`, and parse back from that notation via [`FromStr`].

use std::fmt;
use std::str::FromStr;

use crate::square::Square;

/// A move from one square to another along a compass direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    dir: u8,
}

impl Move {
    /// Create a move, or `None` if `from` and `to` are equal or do not
    /// line up on one of the 8 compass directions.
    pub fn new(from: Square, to: Square) -> Option<Move> {
        let dir = from.direction(to)?;
        Some(Move {
            from,
            to,
            dir: dir as u8,
        })
    }

    /// The source square.
    #[inline]
    pub fn from(self) -> Square {
        self.from
    }

    /// The destination square.
    #[inline]
    pub fn to(self) -> Square {
        self.to
    }

    /// Compass direction of travel, 0 (north) clockwise through 7.
    #[inline]
    pub fn direction(self) -> usize {
        self.dir as usize
    }

    /// Number of steps taken along the direction of travel.
    pub fn length(self) -> usize {
        self.from.distance(self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Why a move string or square designator failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// No dash separating the two square designators.
    MissingSeparator,
    /// A designator is not a column letter 'a'-'h' followed by a row
    /// digit '1'-'8'.
    BadSquare,
    /// Both squares parsed but do not share a row, column, or diagonal.
    NotAligned,
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::MissingSeparator => {
                write!(f, "invalid move: expected <from>-<to>, e.g. c3-f6")
            }
            MoveParseError::BadSquare => {
                write!(f, "invalid square: expected a column 'a'-'h' and a row '1'-'8'")
            }
            MoveParseError::NotAligned => {
                write!(f, "invalid move: squares do not share a row, column, or diagonal")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Parse a square designator such as "c3".
pub fn parse_square(s: &str) -> Result<Square, MoveParseError> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return Err(MoveParseError::BadSquare);
    }
    let col = bytes[0].wrapping_sub(b'a') as usize;
    let row = bytes[1].wrapping_sub(b'1') as usize;
    Square::new(col, row).ok_or(MoveParseError::BadSquare)
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s.split_once('-').ok_or(MoveParseError::MissingSeparator)?;
        let from = parse_square(from)?;
        let to = parse_square(to)?;
        Move::new(from, to).ok_or(MoveParseError::NotAligned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(col: usize, row: usize) -> Square {
        Square::new(col, row).unwrap()
    }

    #[test]
    fn test_new_requires_alignment() {
        assert!(Move::new(sq(2, 2), sq(5, 5)).is_some());
        assert!(Move::new(sq(2, 2), sq(2, 6)).is_some());
        assert!(Move::new(sq(2, 2), sq(4, 3)).is_none());
        assert!(Move::new(sq(2, 2), sq(2, 2)).is_none());
    }

    #[test]
    fn test_direction_and_length() {
        let m = Move::new(sq(2, 2), sq(5, 5)).unwrap();
        assert_eq!(m.direction(), 1); // NE
        assert_eq!(m.length(), 3);

        let m = Move::new(sq(4, 6), sq(4, 1)).unwrap();
        assert_eq!(m.direction(), 4); // S
        assert_eq!(m.length(), 5);
    }

    #[test]
    fn test_parse_roundtrip() {
        for text in ["c3-f6", "a1-h8", "h4-a4", "e2-e7"] {
            let m: Move = text.parse().unwrap();
            assert_eq!(m.to_string(), text);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("c3f6".parse::<Move>(), Err(MoveParseError::MissingSeparator));
        assert_eq!("i3-f6".parse::<Move>(), Err(MoveParseError::BadSquare));
        assert_eq!("c9-c3".parse::<Move>(), Err(MoveParseError::BadSquare));
        assert_eq!("c33-c3".parse::<Move>(), Err(MoveParseError::BadSquare));
        assert_eq!("c3-d5".parse::<Move>(), Err(MoveParseError::NotAligned));
        assert_eq!("c3-c3".parse::<Move>(), Err(MoveParseError::NotAligned));
    }

    #[test]
    fn test_equality_on_endpoints() {
        let a: Move = "c3-f6".parse().unwrap();
        let b = Move::new(sq(2, 2), sq(5, 5)).unwrap();
        assert_eq!(a, b);
    }
}
