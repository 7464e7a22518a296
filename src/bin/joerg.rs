//! Play one game from a JSON card library and log what happens.
//!
//! ```text
//! RUST_LOG=info joerg --library data/cards.json --players 5 --seed 7
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use joerg::{CardLibrary, GameBuilder, GameConfig, GameRng, OrientationRule, PoleRotation};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Rule {
    Majority,
    Pole,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Rotation {
    Winner,
    Pole,
}

#[derive(Debug, Parser)]
#[command(about = "Simulate a game of Joerg with random commits")]
struct Args {
    /// Card library JSON file.
    #[arg(long, default_value = "data/cards.json")]
    library: PathBuf,
    #[arg(long, default_value_t = joerg::core::DEFAULT_PLAYERS)]
    players: usize,
    /// Round wins needed to take the game.
    #[arg(long, default_value_t = joerg::core::DEFAULT_WINS_NEEDED)]
    wins: u32,
    /// Starting hand size. Defaults to the win target plus one.
    #[arg(long)]
    hand_size: Option<usize>,
    /// Victories that trigger a cycle. 0 disables cycling.
    #[arg(long)]
    cycle_at: Option<u32>,
    /// Which orientation wins a mixed round.
    #[arg(long, value_enum, default_value = "majority")]
    rule: Rule,
    /// Whom the pole passes from after a round.
    #[arg(long, value_enum, default_value = "winner")]
    rotation: Rotation,
    /// RNG seed. Random if omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Print every round report as a JSON line.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::new(self.players)
            .with_wins_needed(self.wins)
            .with_orientation_rule(match self.rule {
                Rule::Majority => OrientationRule::Majority,
                Rule::Pole => OrientationRule::PoleCard,
            })
            .with_pole_rotation(match self.rotation {
                Rotation::Winner => PoleRotation::AfterWinner,
                Rotation::Pole => PoleRotation::AfterPole,
            });
        if let Some(size) = self.hand_size {
            config = config.with_starting_hand_size(size);
        }
        if let Some(wins) = self.cycle_at {
            config = config.with_cycle_at_wins(wins);
        }
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let library = CardLibrary::from_path(&args.library)?;
    let rng = args.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    let mut game = GameBuilder::new()
        .config(args.config())
        .build(library.instantiate(), rng)?;

    while game.result().is_none() {
        let report = game.play_round()?;
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        }
    }

    for (player, wins) in game.victories().iter() {
        log::info!("{player}: {wins} victories");
    }
    if let Some(result) = game.result() {
        log::info!("{} wins the game after {} rounds", result.winner(), game.round());
    }
    Ok(())
}
