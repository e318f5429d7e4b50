use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::{ops::Not, str::FromStr};
use test_strategy::Arbitrary;

/// One of the four directions a marble can be pushed in.
///
/// Directions are relative to the board as printed: [`Direction::Forward`]
/// points towards row `0` and [`Direction::Right`] towards column `6`.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Deserialize, Serialize)]
#[repr(u8)]
pub enum Direction {
    #[display(fmt = "F")]
    Forward,
    #[display(fmt = "B")]
    Backward,
    #[display(fmt = "L")]
    Left,
    #[display(fmt = "R")]
    Right,
}

impl Direction {
    /// All four directions.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        use Direction::*;
        [Forward, Backward, Left, Right].into_iter()
    }

    /// The change in `(row, column)` of a single step in this direction.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Forward => (-1, 0),
            Direction::Backward => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// The opposite direction.
impl Not for Direction {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The reason why parsing [`Direction`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Arbitrary, Error)]
#[display(fmt = "failed to parse direction, expected one of `F`, `B`, `L` or `R`")]
pub struct ParseDirectionError;

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(Direction::Forward),
            "B" => Ok(Direction::Backward),
            "L" => Ok(Direction::Left),
            "R" => Ok(Direction::Right),
            _ => Err(ParseDirectionError),
        }
    }
}
