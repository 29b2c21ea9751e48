use anyhow::Context;
use clap::Parser;
use roulette_execution::GameRng;
use roulette_simulator::{Config, Simulator, Summary};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML file with any subset of the configuration fields.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Strategy to simulate (e.g. PASSENGER57, SEVEN_REDS, ONE_THREE_TWO_SIX).
    #[arg(short, long)]
    player: Option<String>,

    /// Maximum rounds per session.
    #[arg(short, long)]
    duration: Option<u32>,

    /// Stake at the start of each session.
    #[arg(short, long)]
    stake: Option<u64>,

    /// Number of sessions to run.
    #[arg(long)]
    samples: Option<usize>,

    /// Seed for the wheel and any randomized strategy.
    #[arg(long)]
    seed: Option<u64>,

    /// Most verbose log level to print (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(player) = &self.player {
            config.player = player.clone();
        }
        if let Some(duration) = self.duration {
            config.session_duration = duration;
        }
        if let Some(stake) = self.stake {
            config.initial_stake = stake;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    player: &'a str,
    seed: u64,
    session_duration: u32,
    initial_stake: u64,
    #[serde(flatten)]
    summary: &'a Summary,
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Load config
    let mut config = match &args.config {
        Some(path) => {
            let file = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_yaml::from_str::<Config>(&file)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => Config::default(),
    };
    args.apply(&mut config);
    let config = config.validate().context("invalid configuration")?;

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // Draw a seed when none is given so the run can be replayed
    let seed = config
        .seed
        .unwrap_or_else(|| GameRng::from_entropy().next_u64());
    info!(
        player = %config.strategy,
        seed,
        duration = config.session_duration,
        stake = config.initial_stake,
        samples = config.samples,
        "starting simulation"
    );

    let mut simulator =
        Simulator::from_config(&config, seed).context("failed to set up simulator")?;
    let summary = simulator
        .run_many(config.samples)
        .context("player placed an invalid bet")?;

    if args.json {
        let report = Report {
            player: config.strategy.name(),
            seed,
            session_duration: config.session_duration,
            initial_stake: config.initial_stake,
            summary: &summary,
        };
        let json = serde_json::to_string_pretty(&report).context("failed to encode summary")?;
        println!("{json}");
    } else {
        println!("Mean Duration: {}", summary.mean_duration);
        println!("Duration STD: {}", summary.duration_std);
        println!("Mean Maximum: {}", summary.mean_maximum);
        println!("Maximum STD: {}", summary.maximum_std);
    }

    Ok(())
}
