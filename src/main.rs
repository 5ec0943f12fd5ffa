#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use hotseat_battleship::{init_logging, Console, Game};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Two-player naval combat on a shared terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Name of the player who places ships and shoots first.
    #[arg(long, default_value = "Player 1")]
    first: String,
    /// Name of the second player.
    #[arg(long, default_value = "Player 2")]
    second: String,
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(cli.first, cli.second);
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    console.run(&mut game, &mut rng)
}
