pub mod error;
pub mod game;
pub mod model;
pub mod solver;

pub use error::GameError;
pub use game::Game;
pub use model::{Pair, ParticipantId, SolvingPolicy};
pub use solver::run_to_completion;
