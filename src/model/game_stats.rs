use crate::model::SolvingPolicy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct GameStats {
    pub rounds: usize,
    pub n_pairs: usize,
    pub policy: SolvingPolicy,
    /// `None` for games driven by an injected rng
    pub seed: Option<u64>,
    pub timestamp: i64,
    pub playthrough_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GlobalStats {
    pub policy: SolvingPolicy,
    pub total_games_played: u32,
    pub total_rounds: u64,
    pub most_rounds: usize,
}

impl GlobalStats {
    pub fn new(policy: SolvingPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn record(&mut self, stats: &GameStats) {
        self.total_games_played += 1;
        self.total_rounds += stats.rounds as u64;
        self.most_rounds = self.most_rounds.max(stats.rounds);
    }

    pub fn average_rounds(&self) -> f64 {
        if self.total_games_played == 0 {
            return 0.0;
        }
        self.total_rounds as f64 / self.total_games_played as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(rounds: usize) -> GameStats {
        GameStats {
            rounds,
            n_pairs: 8,
            policy: SolvingPolicy::Smart,
            seed: None,
            timestamp: 0,
            playthrough_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_record_tracks_average_and_max() {
        let mut global = GlobalStats::new(SolvingPolicy::Smart);
        assert_eq!(global.average_rounds(), 0.0);

        global.record(&game(10));
        global.record(&game(20));
        global.record(&game(15));

        assert_eq!(global.total_games_played, 3);
        assert_eq!(global.most_rounds, 20);
        assert!((global.average_rounds() - 15.0).abs() < f64::EPSILON);
    }
}
