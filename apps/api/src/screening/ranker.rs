use std::cmp::Ordering;

use crate::screening::models::NormalizedResult;

/// Orders results by score, best first. Equal scores keep their submission order.
pub fn rank(mut results: Vec<NormalizedResult>) -> Vec<NormalizedResult> {
    // stable: equal scores stay in submission order
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results
}
