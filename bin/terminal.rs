use crate::{io::Console, play::Play};
use lib::kuba::{Game, Push};
use std::io::{self, Read, Write};
use tracing::instrument;

/// A human player typing pushes on a [`Console`].
#[derive(Debug)]
pub struct Terminal<W: Write, R: Read> {
    console: Console<W, R>,
}

impl<W: Write, R: Read> Terminal<W, R> {
    pub fn new(console: Console<W, R>) -> Self {
        Terminal { console }
    }
}

impl<W: Write, R: Read> Play for Terminal<W, R> {
    type Error = io::Error;

    /// Prints the board and asks for a push until one is well formed.
    ///
    /// Answering `?` lists the pushes the rules currently allow.
    #[instrument(level = "trace", skip(self, game), err)]
    fn play(&mut self, game: &Game, player: &str) -> Result<Push, Self::Error> {
        self.console.send(game.board())?;
        self.console.send(format_args!("marbles: {}", game.marble_counts()))?;

        loop {
            let answer = self.console.ask(format_args!("{player} to push:"))?;
            match answer.trim() {
                "?" => {
                    let hints = Vec::from_iter(
                        game.moves()
                            .filter(|&(n, _)| n == player)
                            .map(|(_, p)| p.to_string()),
                    );

                    self.console.send(hints.join(" "))?;
                }

                s => match s.parse() {
                    Ok(push) => break Ok(push),
                    Err(e) => self.console.send(e)?,
                },
            }
        }
    }
}
