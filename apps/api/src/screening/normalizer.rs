//! Normalizer & classifier — scales raw scores against the batch best and assigns tiers.

use crate::screening::models::{NormalizedResult, RawScore, Tier};

/// Lower bound of the high tier (inclusive).
pub const HIGH_THRESHOLD: f64 = 0.7;
/// Lower bound of the medium tier (inclusive).
pub const MEDIUM_THRESHOLD: f64 = 0.4;

/// Maps a normalized score onto its tier.
pub fn classify(score: f64) -> Tier {
    if score >= HIGH_THRESHOLD {
        Tier::High
    } else if score >= MEDIUM_THRESHOLD {
        Tier::Medium
    } else {
        Tier::Low
    }
}

/// Rounds to 4 decimal places, ties to even on the exact binary value (`1/32` → `0.0312`).
pub fn round4(value: f64) -> f64 {
    format!("{value:.4}").parse().unwrap_or(value)
}

/// Divides every raw score by the batch maximum, rounds, and classifies.
///
/// An all-zero batch normalizes to 0.0 everywhere. Output order matches input order.
pub fn normalize(raw_scores: &[RawScore]) -> Vec<NormalizedResult> {
    let max_score = raw_scores.iter().map(|r| r.score).max().unwrap_or(1);

    raw_scores
        .iter()
        .map(|raw| {
            let score = if max_score == 0 {
                0.0
            } else {
                round4(f64::from(raw.score) / f64::from(max_score))
            };
            NormalizedResult {
                id: raw.id.clone(),
                score,
                tier: classify(score),
            }
        })
        .collect()
}
