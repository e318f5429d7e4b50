use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Play Kuba on the terminal.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    /// Installs the log subscriber and runs the chosen applet, `play` if none.
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let writer = layer()
            .pretty()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();

        self.applet.unwrap_or_default().execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn applet_is_optional_and_defaults_to_play() {
        let cli = Cli::try_parse_from(["cli"]).unwrap();
        assert!(cli.applet.is_none());
        assert!(matches!(cli.applet.unwrap_or_default(), Applet::Play(_)));
    }

    #[test]
    fn parses_every_applet() {
        let cli = Cli::try_parse_from(["cli", "play"]).unwrap();
        assert!(matches!(cli.applet, Some(Applet::Play(_))));

        let cli = Cli::try_parse_from(["cli", "replay", "game.ron"]).unwrap();
        assert!(matches!(cli.applet, Some(Applet::Replay(_))));

        let cli = Cli::try_parse_from(["cli", "perft", "--depth", "2"]).unwrap();
        assert!(matches!(cli.applet, Some(Applet::Perft(_))));
    }

    #[test]
    fn parses_verbosity() {
        let cli = Cli::try_parse_from(["cli", "--verbosity", "trace", "perft"]).unwrap();
        assert_eq!(cli.verbosity, Level::TRACE);
    }

    #[test]
    fn rejects_unknown_applets() {
        assert!(Cli::try_parse_from(["cli", "uci"]).is_err());
    }
}
