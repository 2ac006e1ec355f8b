use std::collections::HashSet;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{Pair, Participant, ParticipantId};
use crate::error::GameError;

/// Arena of every participant in a game plus the ordered list of those
/// still waiting to be confirmed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Roster {
    participants: Vec<Participant>,
    unmatched: Vec<ParticipantId>,
}

impl Roster {
    pub fn new(names: &[impl AsRef<str>]) -> Result<Self, GameError> {
        if names.is_empty() || names.len() % 2 != 0 {
            return Err(GameError::InvalidInput(format!(
                "need a positive even number of participants, got {}",
                names.len()
            )));
        }

        let names: Vec<&str> = names.iter().map(|name| AsRef::<str>::as_ref(name)).collect();

        let mut seen: HashSet<&str> = HashSet::new();
        for &name in &names {
            if !seen.insert(name) {
                return Err(GameError::InvalidInput(format!(
                    "duplicate participant name {:?}",
                    name
                )));
            }
        }

        let participants: Vec<Participant> = names
            .iter()
            .enumerate()
            .map(|(index, name)| Participant::new(ParticipantId(index), *name))
            .collect();
        let unmatched = participants.iter().map(|p| p.id).collect();

        Ok(Self {
            participants,
            unmatched,
        })
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id).collect()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(id.index())
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        id.index() < self.participants.len()
    }

    pub fn find(&self, name: &str) -> Option<ParticipantId> {
        self.participants
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.id)
    }

    pub fn name_of(&self, id: ParticipantId) -> &str {
        self.get(id).map(|p| p.name.as_str()).unwrap_or("?")
    }

    pub fn unmatched(&self) -> &[ParticipantId] {
        &self.unmatched
    }

    pub fn is_unmatched(&self, id: ParticipantId) -> bool {
        self.unmatched.contains(&id)
    }

    /// Number of candidates `id` currently has, zero for unknown ids
    pub fn candidate_count(&self, id: ParticipantId) -> usize {
        self.get(id).map(|p| p.candidates().len()).unwrap_or(0)
    }

    pub fn is_candidate_of(&self, id: ParticipantId, other: ParticipantId) -> bool {
        self.get(id).map(|p| p.is_candidate(other)).unwrap_or(false)
    }

    pub fn exclude_each_other(&mut self, pair: &Pair) {
        self.exclude(pair.first, pair.second);
        self.exclude(pair.second, pair.first);
    }

    pub fn mark_candidates(&mut self, pair: &Pair) {
        if let Some(first) = self.participants.get_mut(pair.first.index()) {
            first.add_candidate(pair.second);
        }
        if let Some(second) = self.participants.get_mut(pair.second.index()) {
            second.add_candidate(pair.first);
        }
    }

    pub fn exclude(&mut self, id: ParticipantId, other: ParticipantId) {
        if let Some(participant) = self.participants.get_mut(id.index()) {
            participant.exclude(other);
        }
    }

    /// Drops both members of a confirmed pair from the unmatched list
    pub(crate) fn remove_unmatched(&mut self, pair: &Pair) {
        self.unmatched.retain(|id| !pair.contains(*id));
    }

    pub fn describe(&self, pair: &Pair) -> String {
        format!("({}, {})", self.name_of(pair.first), self.name_of(pair.second))
    }

    pub fn describe_all(&self, pairs: &[Pair]) -> String {
        pairs.iter().map(|pair| self.describe(pair)).join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_odd_and_empty() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Roster::new(&empty),
            Err(GameError::InvalidInput(_))
        ));
        assert!(matches!(
            Roster::new(&["Bob", "John", "Mary"]),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        assert!(matches!(
            Roster::new(&["Bob", "Bob"]),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_everyone_starts_unmatched() {
        let roster = Roster::new(&["Bob", "John", "Mary", "Rick"]).unwrap();
        assert_eq!(roster.unmatched(), roster.ids().as_slice());
        assert_eq!(roster.find("Mary"), Some(ParticipantId(2)));
        assert_eq!(roster.name_of(ParticipantId(3)), "Rick");
    }

    #[test]
    fn test_describe_all() {
        let roster = Roster::new(&["Bob", "John", "Mary", "Rick"]).unwrap();
        let pairs = vec![
            Pair::new(ParticipantId(0), ParticipantId(2)),
            Pair::new(ParticipantId(3), ParticipantId(1)),
        ];
        assert_eq!(roster.describe_all(&pairs), "(Bob, Mary), (Rick, John)");
    }
}
