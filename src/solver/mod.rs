pub mod guess_selection;
pub mod round_runner;
pub mod simulation;

pub use guess_selection::choose_guess;
pub use round_runner::{play_round, run_to_completion, RoundOutcome};
pub use simulation::simulate;
