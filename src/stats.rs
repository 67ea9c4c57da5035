//! Summary statistics over a [`ScoreStore`].
//!
//! Every function is total: an empty store yields `0.0` or an empty
//! [`Extremum`] instead of an error.

use crate::analyzers::types::Extremum;
use crate::analyzers::utility;
use crate::store::ScoreStore;

/// Arithmetic mean of all scores.
///
/// The result is bounded by the lowest and highest score, so rounding in the
/// sum can never push it outside that range.
pub fn average(scores: &ScoreStore) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let avg = utility::mean(&scores.scores());
    // f64::max/min ignore a NaN bound where clamp would panic.
    avg.max(min_score(scores).score).min(max_score(scores).score)
}

/// Median of all scores.
pub fn median(scores: &ScoreStore) -> f64 {
    utility::median(&scores.scores())
}

/// Student with the highest score. Ties go to whoever was inserted first.
pub fn max_score(scores: &ScoreStore) -> Extremum {
    extremum(scores, |candidate, best| candidate > best)
}

/// Student with the lowest score. Ties go to whoever was inserted first.
pub fn min_score(scores: &ScoreStore) -> Extremum {
    extremum(scores, |candidate, best| candidate < best)
}

fn extremum(scores: &ScoreStore, beats: impl Fn(f64, f64) -> bool) -> Extremum {
    let mut best: Option<(&str, f64)> = None;

    for (name, score) in scores.iter() {
        match best {
            Some((_, current)) if !beats(score, current) => {}
            _ => best = Some((name, score)),
        }
    }

    best.map(|(name, score)| Extremum::new(name, score))
        .unwrap_or_default()
}
