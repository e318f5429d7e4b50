use crate::kuba::Color;
use derive_more::Display;
use test_strategy::Arbitrary;

/// A participant in a game of Kuba.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Arbitrary)]
#[display(fmt = "{name} ({color})")]
pub struct Player {
    #[strategy("[A-Za-z]{1,8}")]
    name: String,
    color: Color,
    #[strategy(0u8..7)]
    captured: u8,
}

impl Player {
    /// Constructs a [`Player`] who has yet to capture any marbles.
    pub fn new<N: Into<String>>(name: N, color: Color) -> Self {
        Player {
            name: name.into(),
            color,
            captured: 0,
        }
    }

    /// The name this player is addressed by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The [`Color`] of the marbles this player pushes.
    pub fn color(&self) -> Color {
        self.color
    }

    /// How many red marbles this player has pushed off the board.
    pub fn captured(&self) -> u8 {
        self.captured
    }

    pub(crate) fn capture(&mut self) {
        self.captured += 1;
    }
}
