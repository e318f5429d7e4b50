use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod perft;
mod play;
mod replay;

#[derive(Debug, From, Subcommand)]
pub enum Applet {
    /// Plays a game on the terminal.
    Play(play::Play),
    /// Replays a game from a script.
    Replay(replay::Replay),
    /// Counts the legal push sequences from the starting layout.
    Perft(perft::Perft),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => a.execute(),
            Applet::Replay(a) => a.execute(),
            Applet::Perft(a) => a.execute(),
        }
    }
}
