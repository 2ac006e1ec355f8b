use log::{info, trace};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::collections::HashSet;
use uuid::Uuid;

use super::feedback_evaluator::evaluate_round;
use super::guess_arbiter::arbitrate_guess;
use super::pairing_generator::{preference_pairs, random_pairs};
use super::settings::Settings;
use crate::error::GameError;
use crate::model::{
    GameStats, GroundTruth, Pair, Participant, ParticipantId, Roster, SolvingPolicy,
};

/// One matchmaking game: the contestants, the hidden perfect pairs and
/// everything learned so far.
pub struct Game {
    roster: Roster,
    truth: GroundTruth,
    confirmed: Vec<Pair>,
    round_correct: Vec<Pair>,
    rounds: usize,
    rng: Box<dyn RngCore>,
    seed: Option<u64>,
    playthrough_id: Uuid,
    debug_mode: bool,
    guess_history: Vec<(Pair, bool)>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game {{rounds: {}, confirmed: [{}], unmatched: {}}}",
            self.rounds,
            self.roster.describe_all(&self.confirmed),
            self.roster.unmatched().len()
        )
    }
}

impl Game {
    /// Sets up a game seeded from `seed`, or from a fresh random seed
    pub fn new(names: &[impl AsRef<str>], seed: Option<u64>) -> Result<Self, GameError> {
        let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
        let mut game = Self::with_rng(names, Box::new(StdRng::seed_from_u64(seed)))?;
        game.seed = Some(seed);
        Ok(game)
    }

    /// Sets up a game drawing all of its randomness from `rng`
    pub fn with_rng(names: &[impl AsRef<str>], mut rng: Box<dyn RngCore>) -> Result<Self, GameError> {
        let roster = Roster::new(names)?;
        let pool = roster.ids();
        let truth = GroundTruth::new(random_pairs(&pool, pool.len() / 2, rng.as_mut())?);
        trace!(target: "game", "Perfect pairs: {}", roster.describe_all(truth.pairs()));

        let playthrough_id = Uuid::new_v4();
        let debug_mode = Settings::is_debug_mode();
        info!(
            target: "game",
            "New game {} with {} participants",
            playthrough_id,
            roster.len()
        );
        if debug_mode {
            info!(target: "game", "Perfect pairs: {}", roster.describe_all(truth.pairs()));
        }

        Ok(Self {
            roster,
            truth,
            confirmed: Vec::new(),
            round_correct: Vec::new(),
            rounds: 0,
            rng,
            seed: None,
            playthrough_id,
            debug_mode,
            guess_history: Vec::new(),
        })
    }

    pub fn participants(&self) -> &[Participant] {
        self.roster.participants()
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.roster.get(id)
    }

    pub fn find(&self, name: &str) -> Option<ParticipantId> {
        self.roster.find(name)
    }

    pub fn name_of(&self, id: ParticipantId) -> &str {
        self.roster.name_of(id)
    }

    pub fn describe(&self, pair: &Pair) -> String {
        self.roster.describe(pair)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn unmatched(&self) -> &[ParticipantId] {
        self.roster.unmatched()
    }

    pub fn ground_truth(&self) -> &GroundTruth {
        &self.truth
    }

    pub fn confirmed(&self) -> &[Pair] {
        &self.confirmed
    }

    /// Perfect pairs from the most recently scored round
    pub fn round_correct(&self) -> &[Pair] {
        &self.round_correct
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn total_pairs(&self) -> usize {
        self.truth.len()
    }

    pub fn remaining_pairs(&self) -> usize {
        self.total_pairs() - self.confirmed.len()
    }

    pub fn is_solved(&self) -> bool {
        self.confirmed.len() == self.total_pairs()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn playthrough_id(&self) -> Uuid {
        self.playthrough_id
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// In debug mode every committed guess is logged and kept in
    /// [`Game::guess_history`]
    pub fn set_debug_mode(&mut self, debug_mode: bool) {
        if debug_mode && !self.debug_mode {
            info!(
                target: "game",
                "Perfect pairs: {}",
                self.roster.describe_all(self.truth.pairs())
            );
        }
        self.debug_mode = debug_mode;
    }

    /// Guesses committed while in debug mode, with whether each was perfect
    pub fn guess_history(&self) -> &[(Pair, bool)] {
        &self.guess_history
    }

    /// Starts a round with a uniformly random pairing of everyone unmatched
    pub fn propose_round(&mut self) -> Result<Vec<Pair>, GameError> {
        self.propose_round_for(SolvingPolicy::Naive)
    }

    /// Starts a round with the pairing `policy` would propose. A solved game
    /// gets an empty pairing and no new round.
    pub fn propose_round_for(&mut self, policy: SolvingPolicy) -> Result<Vec<Pair>, GameError> {
        let n_pairs = self.remaining_pairs();
        let pool = self.roster.unmatched();
        let pairs = if policy.uses_preferences() {
            preference_pairs(pool, n_pairs, &self.roster, self.rng.as_mut())?
        } else {
            random_pairs(pool, n_pairs, self.rng.as_mut())?
        };

        if n_pairs > 0 {
            self.rounds += 1;
        }
        trace!(
            target: "game",
            "Round {}: {}",
            self.rounds,
            self.roster.describe_all(&pairs)
        );
        Ok(pairs)
    }

    /// Reveals which proposed pairs are perfect and updates everyone's
    /// candidates and exclusions
    pub fn score_round(&mut self, pairs: &[Pair]) -> Result<Vec<Pair>, GameError> {
        let mut seen = HashSet::new();
        for pair in pairs {
            for id in pair.members() {
                if !self.roster.contains(id) {
                    return Err(GameError::InvalidInput(format!(
                        "unknown participant {}",
                        id
                    )));
                }
                if !seen.insert(id) {
                    return Err(GameError::InvalidInput(format!(
                        "{} appears more than once in the round",
                        self.roster.name_of(id)
                    )));
                }
            }
        }

        self.round_correct = evaluate_round(pairs, &self.truth, &mut self.roster);
        Ok(self.round_correct.clone())
    }

    /// Commits to `pair` as a perfect pair; true when it is one
    pub fn submit_guess(&mut self, pair: Pair) -> Result<bool, GameError> {
        let confirmed_before = self.confirmed.len();
        let perfect = arbitrate_guess(pair, &self.truth, &mut self.roster, &mut self.confirmed)?;
        debug_assert!(self.confirmed.len() == confirmed_before + usize::from(perfect));

        if self.debug_mode {
            info!(
                target: "game",
                "Round {}: guessed {}, {}",
                self.rounds,
                self.roster.describe(&pair),
                if perfect { "perfect match" } else { "not a match" }
            );
            self.guess_history.push((pair, perfect));
        }

        if self.is_solved() {
            info!(
                target: "game",
                "Game {} solved after {} round(s)",
                self.playthrough_id,
                self.rounds
            );
        }
        Ok(perfect)
    }

    pub fn stats(&self, policy: SolvingPolicy) -> GameStats {
        GameStats {
            rounds: self.rounds,
            n_pairs: self.total_pairs(),
            policy,
            seed: self.seed,
            timestamp: chrono::Utc::now().timestamp(),
            playthrough_id: self.playthrough_id,
        }
    }
}
