use crate::kuba::{Marble, ParseMarbleError, Push, Square, Tally};
use arrayvec::ArrayVec;
use derive_more::{DebugCustom, Display, Error, From};
use std::{fmt, mem::replace, ops::Index, str::FromStr};

#[cfg(test)]
use proptest::{collection::vec, prelude::*};

/// The Kuba board.
///
/// Besides the 7x7 playable cells, the board has a tray that holds the marble
/// last pushed past the edge until it is [cleared](`Board::clear_tray`).
#[derive(DebugCustom, Copy, Clone, Eq, PartialEq, Hash)]
#[debug(fmt = "Board({:?})", "self.to_string()")]
pub struct Board {
    cells: [Option<Marble>; Square::SIDE * Square::SIDE],
    tray: Option<Marble>,
}

// Arbitrary boards are drawn from the starting marbles, so they never hold
// more marbles of a kind than a real game can.
#[cfg(test)]
impl Arbitrary for Board {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let cells = Vec::from(Board::default().cells);
        let len = cells.len();
        (Just(cells).prop_shuffle(), vec(any::<bool>(), len))
            .prop_map(|(cells, keep)| {
                let mut board = Board::empty();
                for ((slot, m), k) in board.cells.iter_mut().zip(cells).zip(keep) {
                    *slot = m.filter(|_| k);
                }

                board
            })
            .boxed()
    }
}

/// The starting layout.
///
/// White marbles fill the top left and bottom right corners, black marbles
/// the other two, and red marbles form a diamond in the center.
impl Default for Board {
    fn default() -> Self {
        const W: Option<Marble> = Some(Marble::White);
        const B: Option<Marble> = Some(Marble::Black);
        const R: Option<Marble> = Some(Marble::Red);
        const E: Option<Marble> = None;

        Board {
            #[rustfmt::skip]
            cells: [
                W, W, E, E, E, B, B,
                W, W, E, R, E, B, B,
                E, E, R, R, R, E, E,
                E, R, R, R, R, R, E,
                E, E, R, R, R, E, E,
                B, B, E, R, E, W, W,
                B, B, E, E, E, W, W,
            ],
            tray: None,
        }
    }
}

impl Board {
    /// A board without any marbles.
    pub fn empty() -> Self {
        Board {
            cells: [None; Square::SIDE * Square::SIDE],
            tray: None,
        }
    }

    /// An iterator over all marbles on the playable cells.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Marble)> + '_ {
        Square::iter().filter_map(|sq| Some((sq, self[sq]?)))
    }

    /// Counts the marbles on the playable cells.
    ///
    /// The marble in the tray, if any, is not counted.
    pub fn tally(&self) -> Tally {
        self.iter().map(|(_, m)| m).collect()
    }

    /// A copy of the playable cells, row by row.
    pub fn rows(&self) -> [[Option<Marble>; Square::SIDE]; Square::SIDE] {
        let mut rows = [[None; Square::SIDE]; Square::SIDE];
        for (sq, m) in self.iter() {
            rows[sq.row()][sq.col()] = Some(m);
        }

        rows
    }

    /// Whether a marble could be pushed from this square.
    ///
    /// Empty cells are open, and so is the area past the edge of the board,
    /// which is denoted by `None`.
    pub fn is_open(&self, sq: Option<Square>) -> bool {
        sq.map_or(true, |sq| self[sq].is_none())
    }

    /// The marble last pushed off the board, if not yet cleared.
    pub fn tray(&self) -> Option<Marble> {
        self.tray
    }

    /// Empties the tray, returning the marble it held.
    pub fn clear_tray(&mut self) -> Option<Marble> {
        self.tray.take()
    }

    /// Pushes the marble on the [`Push`]'s square, and every marble in line
    /// ahead of it, one cell further.
    ///
    /// The pushed line ends at the first empty cell, which gets filled, or at
    /// the edge of the board, in which case the leading marble falls into the
    /// tray. The pushing marble always leaves an empty cell behind.
    ///
    /// The pushed square must hold a marble and the tray must be empty.
    pub fn apply_push(&mut self, push: Push) {
        debug_assert!(self[push.square()].is_some());
        debug_assert!(self.tray.is_none());

        let mut carry = None;
        for sq in push.line() {
            carry = replace(&mut self.cells[sq.index()], carry);
            if carry.is_none() {
                return;
            }
        }

        self.tray = carry;
    }
}

/// Retrieves the [`Marble`] on a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Marble>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.cells[sq.index()]
    }
}

/// Prints seven rows of seven cells, with `.` for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }

                match cell {
                    Some(m) => fmt::Display::fmt(m, f)?,
                    None => f.write_str(".")?,
                }
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseBoardError {
    #[display(fmt = "expected exactly 49 cells")]
    #[from(ignore)]
    WrongNumberOfCells,

    #[display(fmt = "expected `.` or a marble")]
    InvalidCell(ParseMarbleError),

    #[display(fmt = "the board holds more marbles than the game starts with")]
    #[from(ignore)]
    TooManyMarbles,
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = ArrayVec::<_, { Square::SIDE * Square::SIDE }>::new();

        for token in s.split_whitespace() {
            let cell = match token {
                "." => None,
                t => Some(t.parse()?),
            };

            cells
                .try_push(cell)
                .map_err(|_| ParseBoardError::WrongNumberOfCells)?;
        }

        let board = Board {
            cells: cells
                .into_inner()
                .map_err(|_| ParseBoardError::WrongNumberOfCells)?,
            tray: None,
        };

        let tally = board.tally();
        if Marble::iter().any(|m| tally[m] > Tally::INITIAL[m]) {
            return Err(ParseBoardError::TooManyMarbles);
        }

        Ok(board)
    }
}
