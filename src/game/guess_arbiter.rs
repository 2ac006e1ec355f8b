use log::{debug, trace};

use crate::error::GameError;
use crate::model::{GroundTruth, Pair, Roster};

/// Checks a committed guess against the hidden truth.
///
/// A perfect guess leaves the unmatched list, gets excluded by everyone still
/// unmatched and joins `confirmed`. A wrong guess only excludes the two
/// members from each other. Guesses involving someone already matched, or
/// the same person twice, are rejected without touching any state.
pub fn arbitrate_guess(
    guess: Pair,
    truth: &GroundTruth,
    roster: &mut Roster,
    confirmed: &mut Vec<Pair>,
) -> Result<bool, GameError> {
    if guess.first == guess.second {
        return Err(GameError::InvalidGuess(format!(
            "{} cannot be paired with themselves",
            roster.name_of(guess.first)
        )));
    }
    for id in guess.members() {
        if !roster.contains(id) {
            return Err(GameError::InvalidGuess(format!("unknown participant {}", id)));
        }
        if !roster.is_unmatched(id) {
            return Err(GameError::InvalidGuess(format!(
                "{} is already matched",
                roster.name_of(id)
            )));
        }
    }

    if !truth.is_perfect(&guess) {
        trace!(target: "arbiter", "Guess {} is not a match", roster.describe(&guess));
        roster.exclude_each_other(&guess);
        return Ok(false);
    }

    roster.remove_unmatched(&guess);
    let still_unmatched = roster.unmatched().to_vec();
    for id in still_unmatched {
        for member in guess.members() {
            roster.exclude(id, member);
        }
    }
    confirmed.push(guess);

    debug!(
        target: "arbiter",
        "Confirmed {} ({} confirmed, {} unmatched)",
        roster.describe(&guess),
        confirmed.len(),
        roster.unmatched().len()
    );
    Ok(true)
}
