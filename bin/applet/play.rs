use crate::config::{new_game, PlayerConfig};
use crate::session::{Report, Session};
use crate::{io::Console, terminal::Terminal};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::kuba::Color;
use std::io::{stdin, stdout};
use tracing::{info, instrument};

/// An interactive game of Kuba on the terminal.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The player asked to push first.
    #[clap(default_value_t = PlayerConfig::new("White", Color::White))]
    first: PlayerConfig,

    /// The other player.
    #[clap(default_value_t = PlayerConfig::new("Black", Color::Black))]
    second: PlayerConfig,
}

impl Default for Play {
    fn default() -> Self {
        Play {
            first: PlayerConfig::new("White", Color::White),
            second: PlayerConfig::new("Black", Color::Black),
        }
    }
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let game = new_game(&self.first, &self.second)?;
        let terminal = Terminal::new(Console::new(stdout(), stdin()));
        let game = Session::new(terminal).run(game)?;

        info!(winner = ?game.winner(), "game over");
        println!("{}", Report::new(&game));

        Ok(())
    }
}
