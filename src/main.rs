use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use perfect_pairs::game::{Settings, StatsManager};
use perfect_pairs::model::SolvingPolicy;
use perfect_pairs::solver::simulate;

#[derive(Parser)]
#[command(name = "perfect-pairs")]
#[command(about = "Simulate the perfect-pairs matchmaking puzzle with each solving policy")]
#[command(version)]
struct Cli {
    /// Settings file (JSON); defaults apply when missing
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Number of games to play per policy
    #[arg(long, short = 'n')]
    trials: Option<usize>,

    /// Base seed, game i uses seed + i (falls back to $SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Policy to simulate (naive, informed, smart); repeatable
    #[arg(long = "policy", short = 'p', value_parser = parse_policy)]
    policies: Vec<SolvingPolicy>,

    /// Directory to persist per-policy statistics in
    #[arg(long)]
    stats_dir: Option<PathBuf>,
}

fn parse_policy(input: &str) -> Result<SolvingPolicy, String> {
    SolvingPolicy::from_label(input).ok_or_else(|| format!("unknown policy {:?}", input))
}

fn init_logging() {
    env_logger::init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let mut settings = cli
        .settings
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();
    if let Some(trials) = cli.trials {
        settings.trials = trials;
    }
    if !cli.policies.is_empty() {
        settings.policies = cli.policies;
    }
    if cli.stats_dir.is_some() {
        settings.stats_dir = cli.stats_dir;
    }
    let seed = cli.seed.or_else(Settings::seed_from_env);
    debug!(
        "Settings: {:?}, seed: {:?}, debug mode: {}",
        settings,
        seed,
        Settings::is_debug_mode()
    );

    let mut stats = match &settings.stats_dir {
        Some(dir) => match StatsManager::with_data_dir(dir.clone()) {
            Ok(stats) => stats,
            Err(err) => {
                error!("Cannot use stats directory {}: {}", dir.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => StatsManager::new(),
    };

    for policy in &settings.policies {
        let summary = simulate(settings.names.as_slice(), *policy, settings.trials, seed, &mut stats);
        println!(
            "Average number of rounds for {}: {}",
            policy,
            summary.average_rounds()
        );
        println!(
            "{} was the maximum number of rounds to solve with {}",
            summary.most_rounds, policy
        );
    }

    if let Err(err) = stats.flush() {
        error!("Failed to save statistics: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
