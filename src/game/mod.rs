pub mod feedback_evaluator;
mod game_engine;
pub mod guess_arbiter;
pub mod pairing_generator;
pub mod settings;
pub mod stats_manager;

pub use feedback_evaluator::evaluate_round;
pub use game_engine::Game;
pub use guess_arbiter::arbitrate_guess;
pub use pairing_generator::{preference_pairs, random_pairs};
pub use settings::Settings;
pub use stats_manager::StatsManager;
