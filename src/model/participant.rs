use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Stable index of a participant within its game's roster
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct ParticipantId(pub usize);

impl ParticipantId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::fmt::Debug for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One contestant and what is currently known about their perfect partner.
///
/// `excluded` and `candidates` never intersect: once someone is excluded they
/// can't come back as a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    excluded: BTreeSet<ParticipantId>,
    candidates: BTreeSet<ParticipantId>,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            excluded: BTreeSet::new(),
            candidates: BTreeSet::new(),
        }
    }

    pub fn exclude(&mut self, other: ParticipantId) {
        self.excluded.insert(other);
        self.candidates.remove(&other);
    }

    /// Contradicts nothing: a no-op when `other` is already excluded
    pub fn add_candidate(&mut self, other: ParticipantId) {
        if !self.excluded.contains(&other) {
            self.candidates.insert(other);
        }
    }

    pub fn excluded(&self) -> &BTreeSet<ParticipantId> {
        &self.excluded
    }

    pub fn candidates(&self) -> &BTreeSet<ParticipantId> {
        &self.candidates
    }

    pub fn is_excluded(&self, other: ParticipantId) -> bool {
        self.excluded.contains(&other)
    }

    pub fn is_candidate(&self, other: ParticipantId) -> bool {
        self.candidates.contains(&other)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
