use log::{debug, trace};

use super::guess_selection::choose_guess;
use crate::error::GameError;
use crate::game::Game;
use crate::model::{Pair, SolvingPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub pairs: Vec<Pair>,
    pub correct: Vec<Pair>,
    pub guess: Pair,
    pub guess_was_perfect: bool,
}

/// Plays one round: propose, score, commit a single guess.
///
/// Returns `None` without touching the game once it is solved.
pub fn play_round(game: &mut Game, policy: SolvingPolicy) -> Result<Option<RoundOutcome>, GameError> {
    if game.is_solved() {
        return Ok(None);
    }

    let pairs = game.propose_round_for(policy)?;
    let correct = game.score_round(&pairs)?;
    let Some(guess) = choose_guess(policy, &pairs, &correct, game.roster()) else {
        return Err(GameError::EmptyRound {
            requested: game.remaining_pairs(),
        });
    };
    let guess_was_perfect = game.submit_guess(guess)?;

    trace!(
        target: "solver",
        "Round {}: {} perfect, guessed {} ({})",
        game.rounds(),
        correct.len(),
        game.describe(&guess),
        if guess_was_perfect { "match" } else { "no match" }
    );

    Ok(Some(RoundOutcome {
        pairs,
        correct,
        guess,
        guess_was_perfect,
    }))
}

/// Plays rounds until every perfect pair is confirmed and returns the total
/// number of rounds the game took.
///
/// Each round either confirms a pair or permanently excludes the guessed
/// one, so the loop has no round cap.
pub fn run_to_completion(game: &mut Game, policy: SolvingPolicy) -> Result<usize, GameError> {
    while !game.is_solved() {
        let confirmed_before = game.confirmed().len();
        play_round(game, policy)?;
        debug_assert!(game.confirmed().len() >= confirmed_before);
    }

    debug!(
        target: "solver",
        "{} finished in {} round(s)",
        policy,
        game.rounds()
    );
    Ok(game.rounds())
}
