use std::io;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweeper::{ConsoleInput, ConsoleOutput};
use sweeper_core::{Game, RandomMinePlacer};

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let input = ConsoleInput::new(io::stdin().lock());
    let output = ConsoleOutput::new(io::stdout());
    let mut game = Game::new(input, output, RandomMinePlacer::new(seed));

    let summary = game.run().context("Game aborted")?;
    log::info!(
        "Played {} sessions, {} won, {} lost",
        summary.sessions,
        summary.wins,
        summary.losses
    );
    Ok(())
}
