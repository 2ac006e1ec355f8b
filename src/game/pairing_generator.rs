use log::trace;
use rand::Rng;

use crate::error::GameError;
use crate::model::{Pair, ParticipantId, Roster};

fn check_pool(pool: &[ParticipantId], n_pairs: usize) -> Result<(), GameError> {
    if n_pairs > 0 && pool.is_empty() {
        return Err(GameError::EmptyRound {
            requested: n_pairs,
        });
    }
    if pool.len() != n_pairs * 2 {
        return Err(GameError::InvalidInput(format!(
            "{} participant(s) cannot form exactly {} pair(s)",
            pool.len(),
            n_pairs
        )));
    }
    Ok(())
}

/// Pairs up `pool` uniformly at random.
///
/// Each pair is two draws without replacement from the shrinking pool, which
/// makes every perfect matching of the pool equally likely.
pub fn random_pairs<R: Rng + ?Sized>(
    pool: &[ParticipantId],
    n_pairs: usize,
    rng: &mut R,
) -> Result<Vec<Pair>, GameError> {
    check_pool(pool, n_pairs)?;

    let mut remaining = pool.to_vec();
    let mut pairs = Vec::with_capacity(n_pairs);
    while remaining.len() >= 2 {
        let first = remaining.remove(rng.random_range(0..remaining.len()));
        let second = remaining.remove(rng.random_range(0..remaining.len()));
        pairs.push(Pair::new(first, second));
    }

    trace!(target: "pairing", "Random pairs: {:?}", pairs);
    Ok(pairs)
}

/// Pairs participants with their own candidates where possible.
///
/// Walks `pool` in order, matching each unassigned participant with the
/// lowest-id candidate that is still unassigned. Whoever is left over is
/// paired by [`random_pairs`].
pub fn preference_pairs<R: Rng + ?Sized>(
    pool: &[ParticipantId],
    n_pairs: usize,
    roster: &Roster,
    rng: &mut R,
) -> Result<Vec<Pair>, GameError> {
    check_pool(pool, n_pairs)?;

    let mut available: Vec<ParticipantId> = pool.to_vec();
    let mut pairs = Vec::with_capacity(n_pairs);

    for &id in pool {
        if !available.contains(&id) {
            continue;
        }
        let Some(participant) = roster.get(id) else {
            continue;
        };
        let partner = participant
            .candidates()
            .iter()
            .copied()
            .find(|candidate| *candidate != id && available.contains(candidate));

        if let Some(partner) = partner {
            available.retain(|other| *other != id && *other != partner);
            pairs.push(Pair::new(id, partner));
        }
    }

    trace!(
        target: "pairing",
        "Preference pairs: {:?}, {} left for random pairing",
        pairs,
        available.len()
    );

    let leftover = n_pairs - pairs.len();
    pairs.extend(random_pairs(&available, leftover, rng)?);
    Ok(pairs)
}
