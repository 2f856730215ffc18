#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use fleetcore::{
    init_logging, AutomaticPlayer, Board, FleetSpec, GameConfig, GameSession, Grid,
    PlacementGenerator, Player, RandomPlayer, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    MAX_PLACEMENT_ATTEMPTS,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Random,
    Automatic,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    #[arg(long, help = "Ships as length:count pairs (e.g., --fleet 5:1,4:1,3:2)")]
    fleet: Option<FleetSpec>,
    #[arg(long, default_value_t = MAX_PLACEMENT_ATTEMPTS)]
    max_attempts: usize,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Generate a random fleet and print it as JSON.
    Place {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Play two automated players against each other.
    Play {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, value_enum, default_value_t = PlayerType::Automatic)]
        first: PlayerType,
        #[arg(long, value_enum, default_value_t = PlayerType::Random)]
        second: PlayerType,
        #[arg(long, help = "Print the final report as JSON")]
        json: bool,
    },
}

#[cfg(feature = "std")]
impl GameArgs {
    fn config(&self) -> anyhow::Result<GameConfig> {
        let fleet = self.fleet.clone().unwrap_or_default();
        Ok(GameConfig::new(self.width, self.height, fleet)?
            .with_max_placement_attempts(self.max_attempts))
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => {
                log::info!("using fixed seed {} (run is reproducible)", s);
                SmallRng::seed_from_u64(s)
            }
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

#[cfg(feature = "std")]
fn build_player(kind: PlayerType, grid: Grid) -> Box<dyn Player> {
    match kind {
        PlayerType::Random => Box::new(RandomPlayer::new(grid)),
        PlayerType::Automatic => Box::new(AutomaticPlayer::new(grid)),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Place { game } => {
            let config = game.config()?;
            let mut rng = game.rng();
            let generator = PlacementGenerator::from_config(&config);
            let board = Board::random(&generator, &mut rng)?;
            println!("{}", serde_json::to_string_pretty(board.fleet())?);
        }
        Commands::Play {
            game,
            first,
            second,
            json,
        } => {
            let config = game.config()?;
            let mut rng = game.rng();
            let mut session = GameSession::new(config);
            let grid = session.config().grid;
            let mut p1 = session.seat(None, build_player(first, grid), &mut rng)?;
            let mut p2 = session.seat(None, build_player(second, grid), &mut rng)?;
            let report = session.play(&mut p1, &mut p2, &mut rng)?;

            if json {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                for (contestant, opponent, kind) in [(&p1, &p2, first), (&p2, &p1, second)] {
                    println!(
                        "{} ({:?}): {} shots, {} hits, {:?}",
                        contestant.name(),
                        kind,
                        contestant.shots(),
                        contestant.hits(),
                        GameSession::status(contestant, opponent),
                    );
                }
                println!("{} wins in {} turns", report.winner, report.turns);
            }
        }
    }
    Ok(())
}
