use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tictactoe_cli::{BotDelay, Config, Game, GameResult, Recorder};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Board dimension, an odd number of at least 3
    #[arg(short, long, default_value_t = 3)]
    dim: usize,

    /// Name of the human player
    #[arg(long, default_value = "player")]
    name: String,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Upper bound for the pause before a bot move, 0 disables it
    #[arg(long, default_value_t = 900)]
    max_bot_delay_ms: u64,

    /// Granularity of the pause before a bot move
    #[arg(long, default_value_t = 100)]
    bot_delay_step_ms: u64,

    /// Let two bots play against each other
    #[arg(long, default_value_t = false)]
    bots_only: bool,

    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,

    /// Record each game as a JSON file into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    wins: [usize; 2],
    draws: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let recorder = if let Some(dir_path) = args.record_games_to_directory {
        let recorder = Recorder::new(dir_path)?;
        info!(directory = %recorder.directory().display(), "Recording games");
        Some(recorder)
    } else {
        None
    };

    let mut config = Config {
        rng: StdRng::seed_from_u64(seed),
        bot_delay: BotDelay {
            max: Duration::from_millis(args.max_bot_delay_ms),
            step: Duration::from_millis(args.bot_delay_step_ms),
        },
        recorder,
    };

    println!("Tic Tac Toe with Random Bot!");

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    let mut match_score = MatchScore::default();
    let mut player_names = [String::new(), String::new()];

    for game_idx in 0..args.num_games {
        let mut game = if args.bots_only {
            Game::bots_only(args.dim, &mut config.rng)?
        } else {
            Game::new(args.dim, &args.name, &mut config.rng)?
        };
        player_names = game.players().clone().map(|p| String::from(p.name()));

        let result = game.run(
            &mut config.rng,
            &config.bot_delay,
            &mut input,
            &mut output,
        )?;
        match result {
            GameResult::WonByPlayer { player_idx } => {
                debug!(winner = player_names[player_idx], game_idx);
                match_score.wins[player_idx] += 1;
            }
            GameResult::Draw => {
                debug!(game_idx, "Draw");
                match_score.draws += 1;
            }
        }

        if let Some(recorder) = &mut config.recorder {
            let path = recorder.write_game_recording(&game, &result)?;
            debug!(path = %path.display(), "Wrote game recording");
        }
    }

    if args.num_games > 1 {
        eprintln!(
            "End result:\n- {} wins by {}\n- {} wins by {}\n- {} draws",
            match_score.wins[0],
            player_names[0],
            match_score.wins[1],
            player_names[1],
            match_score.draws
        );
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
