use crate::kuba::Color;
use derive_more::Display;
use test_strategy::Arbitrary;

/// One of the possible outcomes of a game of Kuba.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub enum Outcome {
    #[display(fmt = "the {_0} player captured seven red marbles")]
    Captured(Color),

    #[display(fmt = "the {_0} player has no marbles left")]
    Eliminated(Color),
}

impl Outcome {
    /// The winning side.
    pub fn winner(&self) -> Color {
        match *self {
            Outcome::Captured(c) => c,
            Outcome::Eliminated(c) => !c,
        }
    }
}
