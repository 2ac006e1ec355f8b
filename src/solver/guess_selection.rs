use log::trace;

use crate::model::{Pair, Roster, SolvingPolicy};

/// Picks the pair to commit to this round, or `None` for an empty round.
///
/// Naive always takes the first pair. Informed and smart only look further
/// when the round had at least one perfect pair: among pairs whose first
/// member is a candidate of the second, they take the one where the second
/// member has the fewest (but some) candidates, earliest on ties. A partner
/// with a single candidate can't be beaten, so the scan stops there. With
/// nothing qualifying they fall back to the first pair.
pub fn choose_guess(
    policy: SolvingPolicy,
    pairs: &[Pair],
    round_correct: &[Pair],
    roster: &Roster,
) -> Option<Pair> {
    let first = *pairs.first()?;
    if !policy.uses_candidates_for_guess() || round_correct.is_empty() {
        return Some(first);
    }

    let mut guess = first;
    let mut fewest = usize::MAX;
    for pair in pairs {
        if !roster.is_candidate_of(pair.second, pair.first) {
            continue;
        }
        let count = roster.candidate_count(pair.second);
        if count > 0 && count < fewest {
            guess = *pair;
            fewest = count;
        }
        if fewest == 1 {
            break;
        }
    }

    trace!(
        target: "solver",
        "Guessing {} ({} candidate(s))",
        roster.describe(&guess),
        fewest
    );
    Some(guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParticipantId;

    fn id(index: usize) -> ParticipantId {
        ParticipantId(index)
    }

    fn roster() -> Roster {
        Roster::new(&["A", "B", "C", "D", "E", "F", "G", "H"]).unwrap()
    }

    #[test]
    fn test_naive_takes_first_pair() {
        let mut roster = roster();
        let pairs = vec![Pair::new(id(0), id(1)), Pair::new(id(2), id(3))];
        roster.mark_candidates(&pairs[1]);

        let guess = choose_guess(SolvingPolicy::Naive, &pairs, &pairs[1..], &roster);
        assert_eq!(guess, Some(pairs[0]));
    }

    #[test]
    fn test_empty_round_has_no_guess() {
        let roster = roster();
        assert_eq!(choose_guess(SolvingPolicy::Smart, &[], &[], &roster), None);
    }

    #[test]
    fn test_informed_ignores_candidates_without_hits() {
        let mut roster = roster();
        let pairs = vec![Pair::new(id(0), id(1)), Pair::new(id(2), id(3))];
        roster.mark_candidates(&pairs[1]);

        let guess = choose_guess(SolvingPolicy::Informed, &pairs, &[], &roster);
        assert_eq!(guess, Some(pairs[0]));
    }

    #[test]
    fn test_informed_prefers_single_candidate() {
        let mut roster = roster();
        let pairs = vec![
            Pair::new(id(0), id(1)),
            Pair::new(id(2), id(3)),
            Pair::new(id(4), id(5)),
            Pair::new(id(6), id(7)),
        ];
        // B has three candidates, D has two, F has exactly one
        roster.mark_candidates(&Pair::new(id(1), id(0)));
        roster.mark_candidates(&Pair::new(id(1), id(4)));
        roster.mark_candidates(&Pair::new(id(1), id(6)));
        roster.mark_candidates(&Pair::new(id(3), id(2)));
        roster.mark_candidates(&Pair::new(id(3), id(6)));
        roster.mark_candidates(&Pair::new(id(5), id(4)));
        // H is tighter on paper but G isn't among H's candidates
        roster.mark_candidates(&Pair::new(id(7), id(0)));

        let guess = choose_guess(SolvingPolicy::Informed, &pairs, &pairs[..1], &roster);
        assert_eq!(guess, Some(pairs[2]));
    }

    #[test]
    fn test_single_candidate_wins_even_when_listed_last() {
        let mut roster = roster();
        let pairs = vec![Pair::new(id(0), id(1)), Pair::new(id(2), id(3))];
        roster.mark_candidates(&Pair::new(id(1), id(0)));
        roster.mark_candidates(&Pair::new(id(1), id(2)));
        roster.mark_candidates(&Pair::new(id(3), id(2)));

        let guess = choose_guess(SolvingPolicy::Smart, &pairs, &pairs[..1], &roster);
        assert_eq!(guess, Some(pairs[1]));
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let mut roster = roster();
        let pairs = vec![
            Pair::new(id(0), id(1)),
            Pair::new(id(2), id(3)),
            Pair::new(id(4), id(5)),
        ];
        roster.mark_candidates(&Pair::new(id(3), id(2)));
        roster.mark_candidates(&Pair::new(id(3), id(6)));
        roster.mark_candidates(&Pair::new(id(5), id(4)));
        roster.mark_candidates(&Pair::new(id(5), id(6)));

        let guess = choose_guess(SolvingPolicy::Informed, &pairs, &pairs[..1], &roster);
        assert_eq!(guess, Some(pairs[1]));
    }
}
