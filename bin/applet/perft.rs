use anyhow::Error as Anyhow;
use clap::Parser;
use lib::kuba::{Color, Game};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{info, instrument};

/// Counts the sequences of legal pushes from the starting layout.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Perft {
    /// How many pushes deep to count.
    #[clap(short, long, default_value_t = 3)]
    depth: u8,
}

impl Perft {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let game = Game::new(("first", Color::White), ("second", Color::Black));

        let timer = Instant::now();
        let nodes = perft(&game, self.depth);
        info!(depth = self.depth, nodes, elapsed = ?timer.elapsed());

        println!("{nodes}");
        Ok(())
    }
}

fn perft(game: &Game, depth: u8) -> usize {
    match depth {
        0 => 1,
        1 => game.moves().count(),
        d => game
            .moves()
            .par_bridge()
            .map(|(name, push)| {
                let mut next = game.clone();
                match next.play(name, push) {
                    Ok(()) => perft(&next, d - 1),
                    Err(_) => 0,
                }
            })
            .sum(),
    }
}
