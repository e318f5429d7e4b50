use crate::kuba::{Direction, ParseDirectionError, ParseSquareError, Square};
use derive_more::{Constructor, Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A push of the marble on a [`Square`] one cell in a [`Direction`].
///
/// Printed as the square followed by the direction, e.g. `66F` pushes the
/// marble on the bottom right corner towards row `0`.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Constructor)]
#[derive(Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
#[display(fmt = "{}{}", square, direction)]
pub struct Push {
    square: Square,
    direction: Direction,
}

impl Push {
    /// The [`Square`] holding the marble that initiates the push.
    pub fn square(&self) -> Square {
        self.square
    }

    /// The [`Direction`] every marble in the line moves in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The square the push is initiated from, which must be open.
    ///
    /// This is `None` when the pushing marble sits on the edge of the board.
    pub fn behind(&self) -> Option<Square> {
        self.square.step(!self.direction)
    }

    /// The squares from the pushing marble up to the edge of the board.
    pub fn line(&self) -> impl Iterator<Item = Square> {
        let direction = self.direction;
        std::iter::successors(Some(self.square), move |sq| sq.step(direction))
    }
}

/// The reason why parsing [`Push`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse push, expected `<row><column><direction>`")]
pub enum ParsePushError {
    #[from(ignore)]
    InvalidLength,
    InvalidSquare(ParseSquareError),
    InvalidDirection(ParseDirectionError),
}

impl FromStr for Push {
    type Err = ParsePushError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.char_indices().next_back() {
            Some((i, _)) if i > 0 => Ok(Push::new(s[..i].parse()?, s[i..].parse()?)),
            _ => Err(ParsePushError::InvalidLength),
        }
    }
}

impl TryFrom<String> for Push {
    type Error = ParsePushError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Push> for String {
    fn from(p: Push) -> Self {
        p.to_string()
    }
}
