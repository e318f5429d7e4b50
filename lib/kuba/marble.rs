use crate::kuba::Color;
use derive_more::{Display, Error};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A marble on the Kuba board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
#[repr(u8)]
pub enum Marble {
    #[display(fmt = "W")]
    White,
    #[display(fmt = "B")]
    Black,
    #[display(fmt = "R")]
    Red,
}

impl Marble {
    /// All kinds of marbles, in tally order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        [Marble::White, Marble::Black, Marble::Red].into_iter()
    }

    /// The [`Color`] of the player who owns this marble, if any.
    ///
    /// Red marbles belong to neither player.
    pub fn color(&self) -> Option<Color> {
        match self {
            Marble::White => Some(Color::White),
            Marble::Black => Some(Color::Black),
            Marble::Red => None,
        }
    }
}

impl From<Color> for Marble {
    fn from(c: Color) -> Self {
        match c {
            Color::White => Marble::White,
            Color::Black => Marble::Black,
        }
    }
}

/// The reason why parsing [`Marble`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse marble, expected one of `W`, `B` or `R`")]
pub struct ParseMarbleError;

impl FromStr for Marble {
    type Err = ParseMarbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => Ok(Marble::White),
            "B" => Ok(Marble::Black),
            "R" => Ok(Marble::Red),
            _ => Err(ParseMarbleError),
        }
    }
}
