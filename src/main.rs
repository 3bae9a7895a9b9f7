use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vivarium_lib::model::config::AppConfig;
use vivarium_lib::model::history::HistoryLogger;
use vivarium_lib::model::world::World;

/// Headless evolution simulator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of ticks to run. Omit to run until extinction.
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Override the world seed from the config file.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory for the JSONL event log.
    #[arg(long, default_value = "logs")]
    log_dir: String,

    /// Disable event logging entirely.
    #[arg(short, long)]
    quiet: bool,
}

fn load_config(path: &str) -> Result<AppConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => AppConfig::from_toml(&content),
        Err(e) => {
            tracing::warn!(path, error = %e, "config file unavailable, using defaults");
            Ok(AppConfig::default())
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = load_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    tracing::info!(fingerprint = %config.fingerprint(), "configuration loaded");

    let logger = if args.quiet {
        HistoryLogger::new_dummy()
    } else {
        HistoryLogger::new_at(&args.log_dir)?
    };

    let mut world = World::new(config, logger)?;
    tracing::info!(
        animals = world.population(),
        food = world.food_count(),
        "world initialized"
    );

    loop {
        if let Some(budget) = args.ticks {
            if world.tick >= budget {
                break;
            }
        }
        world.update()?;
        if world.population() == 0 && world.eggs.is_empty() {
            tracing::info!(tick = world.tick, "population extinct");
            break;
        }
    }

    if let Some(sample) = world.stats.latest() {
        tracing::info!(
            tick = world.tick,
            animals = sample.animal_count,
            food = sample.plant_count,
            avg_speed = sample.avg_speed,
            avg_strength = sample.avg_strength,
            "final population sample"
        );
    } else {
        tracing::info!(tick = world.tick, animals = world.population(), "run complete");
    }

    Ok(())
}
