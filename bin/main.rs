use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod cli;
mod config;
mod io;
mod play;
mod session;
mod terminal;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
