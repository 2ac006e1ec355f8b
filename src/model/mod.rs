mod game_stats;
mod ground_truth;
mod pair;
mod participant;
mod roster;
mod solving_policy;

pub use game_stats::{GameStats, GlobalStats};
pub use ground_truth::GroundTruth;
pub use pair::Pair;
pub use participant::{Participant, ParticipantId};
pub use roster::Roster;
pub use solving_policy::SolvingPolicy;
