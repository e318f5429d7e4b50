use crate::kuba::Marble;
use derive_more::{Constructor, Display};
use std::ops::Index;

/// How many marbles of each kind are on the board.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[display(fmt = "{} white, {} black, {} red", white, black, red)]
pub struct Tally {
    pub white: usize,
    pub black: usize,
    pub red: usize,
}

impl Tally {
    /// The marbles every game starts with.
    pub const INITIAL: Tally = Tally {
        white: 8,
        black: 8,
        red: 13,
    };

    /// The number of marbles of every kind.
    pub fn total(&self) -> usize {
        self.white + self.black + self.red
    }

    /// Counts one more [`Marble`].
    pub fn add(&mut self, m: Marble) {
        match m {
            Marble::White => self.white += 1,
            Marble::Black => self.black += 1,
            Marble::Red => self.red += 1,
        }
    }
}

impl Index<Marble> for Tally {
    type Output = usize;

    fn index(&self, m: Marble) -> &Self::Output {
        match m {
            Marble::White => &self.white,
            Marble::Black => &self.black,
            Marble::Red => &self.red,
        }
    }
}

impl FromIterator<Marble> for Tally {
    fn from_iter<I: IntoIterator<Item = Marble>>(marbles: I) -> Self {
        let mut tally = Tally::default();
        marbles.into_iter().for_each(|m| tally.add(m));
        tally
    }
}

impl From<Tally> for (usize, usize, usize) {
    fn from(t: Tally) -> Self {
        (t.white, t.black, t.red)
    }
}
