use serde::{Deserialize, Serialize};

use super::{Pair, ParticipantId};

/// The hidden perfect matching a game is played against. Fixed at setup.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GroundTruth {
    pairs: Vec<Pair>,
}

impl GroundTruth {
    pub fn new(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// True when `pair` matches a perfect pair in either order
    pub fn is_perfect(&self, pair: &Pair) -> bool {
        self.pairs.iter().any(|perfect| perfect.same_as(pair))
    }

    pub fn partner_of(&self, id: ParticipantId) -> Option<ParticipantId> {
        self.pairs.iter().find_map(|pair| pair.partner_of(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_perfect_either_order() {
        let truth = GroundTruth::new(vec![
            Pair::new(ParticipantId(0), ParticipantId(1)),
            Pair::new(ParticipantId(2), ParticipantId(3)),
        ]);

        assert!(truth.is_perfect(&Pair::new(ParticipantId(1), ParticipantId(0))));
        assert!(truth.is_perfect(&Pair::new(ParticipantId(2), ParticipantId(3))));
        assert!(!truth.is_perfect(&Pair::new(ParticipantId(0), ParticipantId(2))));
        assert_eq!(truth.partner_of(ParticipantId(3)), Some(ParticipantId(2)));
    }
}
