use crate::kuba::Direction;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};
use test_strategy::Arbitrary;

/// A playable cell on the 7x7 Kuba board.
///
/// This type guarantees that both coordinates lie in the range `(0..=6)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[derive(Deserialize, Serialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Square {
    #[strategy(0..Square::SIDE as u8)]
    row: u8,
    #[strategy(0..Square::SIDE as u8)]
    col: u8,
}

/// The reason why a pair of coordinates does not address a playable cell.
#[derive(Debug, Display, Clone, Eq, PartialEq, Arbitrary, Error)]
#[display(fmt = "position `({}, {})` is off the 7x7 board", _0, _1)]
pub struct OutOfRange(pub usize, pub usize);

impl Square {
    /// The number of cells along each side of the board.
    pub const SIDE: usize = 7;

    /// Constructs [`Square`] from zero-based coordinates.
    pub fn new(row: usize, col: usize) -> Result<Self, OutOfRange> {
        if row < Self::SIDE && col < Self::SIDE {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(OutOfRange(row, col))
        }
    }

    /// This square's row, counted from the top.
    pub fn row(&self) -> usize {
        self.row.into()
    }

    /// This square's column, counted from the left.
    pub fn col(&self) -> usize {
        self.col.into()
    }

    /// The neighboring square in a [`Direction`], or `None` past the edge.
    pub fn step(&self, d: Direction) -> Option<Self> {
        let (dr, dc) = d.offset();
        let row = self.row().checked_add_signed(dr)?;
        let col = self.col().checked_add_signed(dc)?;
        Square::new(row, col).ok()
    }

    /// An iterator over all squares in row-major order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..Self::SIDE * Self::SIDE).map(|i| Square {
            row: (i / Self::SIDE) as u8,
            col: (i % Self::SIDE) as u8,
        })
    }

    pub(crate) fn index(&self) -> usize {
        self.row() * Self::SIDE + self.col()
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = OutOfRange;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col)
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.row(), sq.col())
    }
}

/// Prints the row followed by the column, e.g. `06` for the top right corner.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square, expected two digits")]
    #[from(ignore)]
    InvalidLength,
    #[display(fmt = "failed to parse square")]
    InvalidDigit(ParseIntError),
    #[display(fmt = "failed to parse square")]
    OutOfRange(OutOfRange),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.char_indices().map(|(i, _)| i);
        match (chars.next(), chars.next(), chars.next()) {
            (Some(0), Some(i), None) => Ok(Square::new(s[..i].parse()?, s[i..].parse()?)?),
            _ => Err(ParseSquareError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn square_fits_in_two_bytes() {
        assert_eq!(size_of::<Square>(), 2);
    }

    #[proptest]
    fn new_constructs_square_from_coordinates(sq: Square) {
        assert_eq!(Square::new(sq.row(), sq.col()), Ok(sq));
    }

    #[proptest]
    fn new_fails_if_row_is_off_the_board(
        #[strategy(Square::SIDE..)] row: usize,
        #[strategy(..Square::SIDE)] col: usize,
    ) {
        assert_eq!(Square::new(row, col), Err(OutOfRange(row, col)));
    }

    #[proptest]
    fn new_fails_if_column_is_off_the_board(
        #[strategy(..Square::SIDE)] row: usize,
        #[strategy(Square::SIDE..)] col: usize,
    ) {
        assert_eq!(Square::new(row, col), Err(OutOfRange(row, col)));
    }

    #[proptest]
    fn stepping_back_returns_to_the_same_square(sq: Square, d: Direction) {
        if let Some(next) = sq.step(d) {
            assert_eq!(next.step(!d), Some(sq));
        }
    }

    #[proptest]
    fn stepping_off_the_board_happens_only_at_the_edges(sq: Square, d: Direction) {
        let edge = match d {
            Direction::Forward => sq.row() == 0,
            Direction::Backward => sq.row() == Square::SIDE - 1,
            Direction::Left => sq.col() == 0,
            Direction::Right => sq.col() == Square::SIDE - 1,
        };

        assert_eq!(sq.step(d).is_none(), edge);
    }

    #[test]
    fn iter_visits_every_square_in_row_major_order() {
        let squares = Vec::from_iter(Square::iter());
        assert_eq!(squares.len(), 49);
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
        assert!(squares.iter().enumerate().all(|(i, sq)| sq.index() == i));
    }

    #[proptest]
    fn parsing_printed_square_is_an_identity(sq: Square) {
        assert_eq!(sq.to_string().parse(), Ok(sq));
    }

    #[proptest]
    fn parsing_square_fails_if_coordinate_is_off_the_board(
        #[strategy(..Square::SIDE)] row: usize,
        #[strategy(Square::SIDE..10)] col: usize,
    ) {
        assert_eq!(
            format!("{row}{col}").parse::<Square>(),
            Err(ParseSquareError::OutOfRange(OutOfRange(row, col)))
        );
    }

    #[proptest]
    fn parsing_square_fails_if_length_not_two(#[filter(#s.chars().count() != 2)] s: String) {
        assert_eq!(s.parse::<Square>(), Err(ParseSquareError::InvalidLength));
    }

    #[proptest]
    fn square_deserializes_from_pair_of_coordinates(sq: Square) {
        let ron = format!("({}, {})", sq.row(), sq.col());
        assert_eq!(ron::de::from_str::<Square>(&ron)?, sq);
    }

    #[test]
    fn deserializing_square_off_the_board_fails() {
        assert!(ron::de::from_str::<Square>("(7, 0)").is_err());
    }
}
