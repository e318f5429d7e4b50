use lib::kuba::{Game, Push};

/// Trait for types that know how to play Kuba.
#[cfg_attr(test, mockall::automock(type Error = String;))]
pub trait Play {
    /// The reason why a push could not be chosen.
    type Error;

    /// Chooses the next [`Push`] for the player with the given name.
    fn play(&mut self, game: &Game, player: &str) -> Result<Push, Self::Error>;
}
