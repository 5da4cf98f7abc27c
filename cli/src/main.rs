use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use kaboom_core::{CellCount, Coord, GameConfig, GameSession};
use kaboom_cli::{Format, play};

#[derive(Parser, Debug)]
#[command(version, about = "Play Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Board width in cells
    #[arg(long, default_value_t = 12)]
    width: Coord,

    /// Board height in cells
    #[arg(long, default_value_t = 10)]
    height: Coord,

    /// Number of mines to place
    #[arg(short, long, default_value_t = 15)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print each move's outcome as a JSON line instead of drawing the board
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);

    let config = GameConfig::new(args.width, args.height, args.mines)
        .context("Could not set up the board")?;
    let mut game = GameSession::from_seed(config, seed)?;

    let format = if args.json { Format::Json } else { Format::Text };
    let outcome = play(
        &mut game,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        format,
    )?;
    log::debug!("Exiting with {:?}", outcome);

    Ok(())
}
