use serde::{Deserialize, Serialize};

use super::ParticipantId;

/// Two participants proposed together.
///
/// Order records who initiated the pair (the first member); identity
/// comparisons through [`Pair::same_as`] ignore it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct Pair {
    pub first: ParticipantId,
    pub second: ParticipantId,
}

impl Pair {
    pub fn new(first: ParticipantId, second: ParticipantId) -> Self {
        Self { first, second }
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.second, self.first)
    }

    /// Same two members, in either order
    pub fn same_as(&self, other: &Pair) -> bool {
        *self == *other || *self == other.reversed()
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.first == id || self.second == id
    }

    /// The member of the pair that isn't `id`
    pub fn partner_of(&self, id: ParticipantId) -> Option<ParticipantId> {
        if self.first == id {
            Some(self.second)
        } else if self.second == id {
            Some(self.first)
        } else {
            None
        }
    }

    /// Lower id first, for order-independent keys
    pub fn normalized(&self) -> Self {
        if self.first <= self.second {
            *self
        } else {
            self.reversed()
        }
    }

    pub fn members(&self) -> [ParticipantId; 2] {
        [self.first, self.second]
    }
}

impl std::fmt::Debug for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.first, self.second)
    }
}
