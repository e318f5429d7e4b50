use crate::config::{new_game, Script};
use crate::session::Report;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::kuba::Game;
use std::{fs, path::PathBuf};
use tracing::{instrument, warn};

/// Replays a script of pushes and prints the resulting game.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Replay {
    /// Path to the script in RON notation.
    script: PathBuf,
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let text = fs::read_to_string(&self.script)
            .with_context(|| format!("failed to read `{}`", self.script.display()))?;

        let script = text.parse()?;
        let game = replay(&script)?;
        println!("{}", Report::new(&game));

        Ok(())
    }
}

/// Plays every push in the script in order, skipping those the rules reject.
fn replay(script: &Script) -> Result<Game, Anyhow> {
    let mut game = new_game(&script.first, &script.second)?;

    for (i, (name, push)) in script.moves.iter().enumerate() {
        if let Err(e) = game.play(name, *push) {
            warn!(index = i + 1, player = %name, %push, "{}", e);
        }
    }

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::kuba::{InvalidMove, Tally};

    #[test]
    fn replay_applies_pushes_in_order() {
        let script = r#"(
            first: (name: "A", color: white),
            second: (name: "B", color: black),
            moves: [("A", "01B"), ("B", "05B"), ("A", "21R")],
        )"#;

        let game = replay(&script.parse().unwrap()).unwrap();
        assert_eq!(game.current_turn(), Some("B"));
        assert_eq!(game.marble_counts(), Tally::INITIAL);
        assert_eq!(game.clone().play("B", "26L".parse().unwrap()), Err(InvalidMove::RepeatsPriorPosition));
    }

    #[test]
    fn replay_skips_rejected_pushes() {
        let script = r#"(
            first: (name: "A", color: white),
            second: (name: "B", color: black),
            moves: [("A", "33F"), ("B", "66F"), ("A", "66F")],
        )"#;

        let game = replay(&script.parse().unwrap()).unwrap();
        assert_eq!(game.current_turn(), Some("B"));
        assert_eq!(game.tile_at(5, 6), Ok(Some(lib::kuba::Marble::White)));
        assert_eq!(game.tile_at(6, 6), Ok(None));
    }

    #[test]
    fn replay_fails_if_players_are_misconfigured() {
        let script = r#"(
            first: (name: "A", color: white),
            second: (name: "B", color: white),
        )"#;

        assert!(replay(&script.parse().unwrap()).is_err());
    }
}
