use log::{info, warn};

use super::round_runner::run_to_completion;
use crate::game::{Game, StatsManager};
use crate::model::{GlobalStats, SolvingPolicy};

/// Plays `trials` independent games with `policy` and records each one.
///
/// Game `i` is seeded with `base_seed + i` when a base seed is given. A game
/// that fails is logged and left out of the statistics.
pub fn simulate(
    names: &[impl AsRef<str>],
    policy: SolvingPolicy,
    trials: usize,
    base_seed: Option<u64>,
    stats: &mut StatsManager,
) -> GlobalStats {
    let mut summary = GlobalStats::new(policy);

    for trial in 0..trials {
        let seed = base_seed.map(|base| base.wrapping_add(trial as u64));
        let result = Game::new(names, seed).and_then(|mut game| {
            run_to_completion(&mut game, policy)?;
            Ok(game.stats(policy))
        });

        match result {
            Ok(game_stats) => {
                summary.record(&game_stats);
                stats.record_game(&game_stats);
            }
            Err(err) => {
                warn!(target: "simulation", "{} trial {} discarded: {}", policy, trial, err);
            }
        }
    }

    info!(
        target: "simulation",
        "{}: {} game(s), average {:.2} round(s), most {}",
        policy,
        summary.total_games_played,
        summary.average_rounds(),
        summary.most_rounds
    );
    summary
}
