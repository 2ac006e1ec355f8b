use serde::{Deserialize, Serialize};

/// How a game is driven round after round
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SolvingPolicy {
    /// Random pairings, always commit to the first pair
    Naive,
    /// Random pairings, commit to the most constrained candidate pair
    Informed,
    /// Candidate-aware pairings, informed guess
    Smart,
}

impl Default for SolvingPolicy {
    fn default() -> Self {
        SolvingPolicy::Informed
    }
}

impl SolvingPolicy {
    pub fn all() -> Vec<SolvingPolicy> {
        vec![
            SolvingPolicy::Informed,
            SolvingPolicy::Naive,
            SolvingPolicy::Smart,
        ]
    }

    pub fn uses_preferences(&self) -> bool {
        matches!(self, SolvingPolicy::Smart)
    }

    pub fn uses_candidates_for_guess(&self) -> bool {
        !matches!(self, SolvingPolicy::Naive)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SolvingPolicy::Naive => "naive",
            SolvingPolicy::Informed => "informed",
            SolvingPolicy::Smart => "smart",
        }
    }

    pub fn from_label(input: &str) -> Option<Self> {
        match input.to_ascii_lowercase().as_str() {
            "naive" | "random" => Some(SolvingPolicy::Naive),
            "informed" | "auto" => Some(SolvingPolicy::Informed),
            "smart" => Some(SolvingPolicy::Smart),
            _ => None,
        }
    }
}

impl std::fmt::Display for SolvingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SolvingPolicy::Naive => "Naive Solve",
            SolvingPolicy::Informed => "Informed Solve",
            SolvingPolicy::Smart => "Smart Solve",
        };
        write!(f, "{}", name)
    }
}
