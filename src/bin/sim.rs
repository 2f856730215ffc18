#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use fleetcore::{AutomaticPlayer, GameConfig, GameSession};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Plays one automated game per seed and prints a JSON summary.
#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    fleetcore::init_logging_with(log::LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <seed> [<seed>...]", args[0]);
        std::process::exit(1);
    }
    let seeds = args[1..]
        .iter()
        .map(|s| s.parse::<u64>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = GameSession::new(GameConfig::default());
    let grid = session.config().grid;
    let mut games = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut p1 = session.seat(None, Box::new(AutomaticPlayer::new(grid)), &mut rng)?;
        let mut p2 = session.seat(None, Box::new(AutomaticPlayer::new(grid)), &mut rng)?;
        let report = session.play(&mut p1, &mut p2, &mut rng)?;
        games.push(json!({ "seed": seed, "report": report }));
    }

    let mean_turns = games
        .iter()
        .filter_map(|g| g["report"]["turns"].as_u64())
        .sum::<u64>() as f64
        / games.len() as f64;
    let result = json!({
        "games": games,
        "mean_turns": mean_turns,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
