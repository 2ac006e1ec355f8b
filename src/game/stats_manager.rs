use crate::error::GameError;
use crate::model::{GameStats, GlobalStats, SolvingPolicy};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

const MAX_KEPT_GAMES: usize = 20;

/// Per-policy results of simulated games, optionally mirrored to JSON files
#[derive(Debug, Default)]
pub struct StatsManager {
    data_dir: Option<PathBuf>,
    games: HashMap<SolvingPolicy, Vec<GameStats>>,
    global_stats: HashMap<SolvingPolicy, GlobalStats>,
}

impl StatsManager {
    /// Statistics kept in memory only
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics loaded from and saved to `data_dir`
    pub fn with_data_dir(data_dir: PathBuf) -> Result<Self, GameError> {
        fs::create_dir_all(&data_dir)?;

        let mut manager = Self {
            data_dir: Some(data_dir),
            ..Default::default()
        };
        manager.load_all();
        Ok(manager)
    }

    fn games_path(&self, policy: SolvingPolicy) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(format!("games_{}.json", policy.label())))
    }

    fn global_stats_path(&self, policy: SolvingPolicy) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(format!("global_stats_{}.json", policy.label())))
    }

    fn load_all(&mut self) {
        for policy in SolvingPolicy::all() {
            if let Some(contents) = self
                .games_path(policy)
                .and_then(|path| fs::read_to_string(path).ok())
            {
                if let Ok(games) = serde_json::from_str(&contents) {
                    self.games.insert(policy, games);
                }
            }

            if let Some(contents) = self
                .global_stats_path(policy)
                .and_then(|path| fs::read_to_string(path).ok())
            {
                if let Ok(stats) = serde_json::from_str(&contents) {
                    self.global_stats.insert(policy, stats);
                }
            }
        }
    }

    fn save(&self, policy: SolvingPolicy) -> Result<(), GameError> {
        if let (Some(path), Some(games)) = (self.games_path(policy), self.games.get(&policy)) {
            fs::write(path, serde_json::to_string_pretty(games)?)?;
        }
        if let (Some(path), Some(stats)) = (
            self.global_stats_path(policy),
            self.global_stats.get(&policy),
        ) {
            fs::write(path, serde_json::to_string_pretty(stats)?)?;
        }
        Ok(())
    }

    pub fn record_game(&mut self, stats: &GameStats) {
        let policy = stats.policy;

        let games = self.games.entry(policy).or_default();
        games.push(stats.clone());
        // fewest rounds first
        games.sort_by_key(|game| game.rounds);
        games.truncate(MAX_KEPT_GAMES);

        self.global_stats
            .entry(policy)
            .or_insert_with(|| GlobalStats::new(policy))
            .record(stats);
    }

    /// Writes every policy's statistics when a data directory is configured
    pub fn flush(&self) -> Result<(), GameError> {
        for policy in self.global_stats.keys() {
            self.save(*policy)?;
        }
        if let Some(dir) = &self.data_dir {
            debug!(target: "stats", "Saved statistics to {}", dir.display());
        }
        Ok(())
    }

    pub fn get_best_games(&self, policy: SolvingPolicy, limit: usize) -> Vec<GameStats> {
        self.games
            .get(&policy)
            .map(|games| games.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }

    pub fn get_global_stats(&self, policy: SolvingPolicy) -> GlobalStats {
        self.global_stats
            .get(&policy)
            .cloned()
            .unwrap_or_else(|| GlobalStats::new(policy))
    }
}
