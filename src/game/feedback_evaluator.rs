use log::trace;

use crate::model::{GroundTruth, Pair, Roster};

/// Scores a round and folds the result into every participant's knowledge.
///
/// Returns the proposed pairs that are perfect. When none are, every proposed
/// pair is mutually excluded. When at least one is, every proposed pair
/// becomes a mutual candidate; the aggregate count alone doesn't say which.
pub fn evaluate_round(pairs: &[Pair], truth: &GroundTruth, roster: &mut Roster) -> Vec<Pair> {
    let correct: Vec<Pair> = pairs
        .iter()
        .filter(|pair| truth.is_perfect(pair))
        .copied()
        .collect();

    trace!(
        target: "feedback",
        "{} of {} pair(s) perfect this round",
        correct.len(),
        pairs.len()
    );

    for pair in pairs {
        if correct.is_empty() {
            roster.exclude_each_other(pair);
        } else {
            roster.mark_candidates(pair);
        }
    }

    correct
}

#[cfg(test)]
mod tests {
    use test_context::test_context;

    use super::*;
    use crate::model::ParticipantId;
    use crate::tests::UsingLogger;

    fn setup() -> (Roster, GroundTruth) {
        let roster = Roster::new(&["A", "B", "C", "D"]).unwrap();
        let truth = GroundTruth::new(vec![
            Pair::new(ParticipantId(0), ParticipantId(1)),
            Pair::new(ParticipantId(2), ParticipantId(3)),
        ]);
        (roster, truth)
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_no_hits_excludes_every_pair(_: &mut UsingLogger) {
        let (mut roster, truth) = setup();
        let round = vec![
            Pair::new(ParticipantId(0), ParticipantId(2)),
            Pair::new(ParticipantId(1), ParticipantId(3)),
        ];

        let correct = evaluate_round(&round, &truth, &mut roster);
        assert!(correct.is_empty());

        for pair in &round {
            let first = roster.get(pair.first).unwrap();
            let second = roster.get(pair.second).unwrap();
            assert!(first.is_excluded(pair.second));
            assert!(second.is_excluded(pair.first));
        }
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_hits_mark_every_pair_as_candidates(_: &mut UsingLogger) {
        let (mut roster, truth) = setup();
        let round = vec![
            Pair::new(ParticipantId(1), ParticipantId(0)),
            Pair::new(ParticipantId(3), ParticipantId(2)),
        ];

        let correct = evaluate_round(&round, &truth, &mut roster);
        assert_eq!(correct, round);

        assert!(roster.is_candidate_of(ParticipantId(0), ParticipantId(1)));
        assert!(roster.is_candidate_of(ParticipantId(1), ParticipantId(0)));
        assert!(roster.is_candidate_of(ParticipantId(2), ParticipantId(3)));
        assert!(roster.is_candidate_of(ParticipantId(3), ParticipantId(2)));
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_candidates_never_override_exclusions(_: &mut UsingLogger) {
        let roster_names = ["A", "B", "C", "D", "E", "F"];
        let mut roster = Roster::new(&roster_names).unwrap();
        let truth = GroundTruth::new(vec![
            Pair::new(ParticipantId(0), ParticipantId(1)),
            Pair::new(ParticipantId(2), ParticipantId(3)),
            Pair::new(ParticipantId(4), ParticipantId(5)),
        ]);
        roster.exclude_each_other(&Pair::new(ParticipantId(2), ParticipantId(4)));

        let round = vec![
            Pair::new(ParticipantId(0), ParticipantId(1)),
            Pair::new(ParticipantId(2), ParticipantId(4)),
            Pair::new(ParticipantId(3), ParticipantId(5)),
        ];
        let correct = evaluate_round(&round, &truth, &mut roster);
        assert_eq!(correct.len(), 1);

        assert!(!roster.is_candidate_of(ParticipantId(2), ParticipantId(4)));
        assert!(roster.is_candidate_of(ParticipantId(3), ParticipantId(5)));
        for participant in roster.participants() {
            assert!(participant
                .excluded()
                .is_disjoint(participant.candidates()));
        }
    }
}
