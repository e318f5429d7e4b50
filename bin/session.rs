use crate::play::Play;
use derive_more::Constructor;
use lib::kuba::Game;
use std::fmt::{self, Display};
use tracing::{field::display, instrument, warn, Span};

/// Drives a [`Game`] to its end, asking a [`Play`] implementation for pushes.
#[derive(Debug, Constructor)]
pub struct Session<P> {
    player: P,
}

impl<P> Session<P>
where
    P: Play,
    P::Error: Display,
{
    /// Plays until the game is decided or the side to move has no legal push.
    ///
    /// Before the first push, the first player is asked to push.
    #[instrument(level = "debug", skip(self, game), err, fields(outcome))]
    pub fn run(mut self, mut game: Game) -> Result<Game, P::Error> {
        loop {
            if let Some(o) = game.outcome() {
                Span::current().record("outcome", display(o));
                break Ok(game);
            }

            let name = match game.current_turn() {
                Some(name) => name.to_owned(),
                None => game.players()[0].name().to_owned(),
            };

            if !game.moves().any(|(n, _)| n == name) {
                warn!(player = %name, "no legal push left");
                break Ok(game);
            }

            let push = self.player.play(&game, &name)?;
            if let Err(e) = game.play(&name, push) {
                warn!(player = %name, %push, "{}", e);
            }
        }
    }
}

/// Summarizes the state of a [`Game`].
#[derive(Debug, Constructor)]
pub struct Report<'a>(&'a Game);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;

        writeln!(f, "{}", game.board())?;
        writeln!(f, "marbles: {}", game.marble_counts())?;

        for p in game.players() {
            writeln!(f, "{p} captured {} red", p.captured())?;
        }

        match (game.winner(), game.outcome()) {
            (Some(w), Some(o)) => write!(f, "{w} wins, {o}"),
            _ => match game.current_turn() {
                Some(name) => write!(f, "{name} to push"),
                None => write!(f, "either player to push"),
            },
        }
    }
}
