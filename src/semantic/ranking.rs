//! Selection of the best-scoring posts.

/// A post position paired with its similarity to the prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedIndex {
    /// Position of the post in the request
    pub index: usize,
    /// Cosine similarity score
    pub score: f32,
}

/// All indices ordered by descending score.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank_all(scores: &[f32]) -> Vec<RankedIndex> {
    let mut ranked: Vec<RankedIndex> = scores
        .iter()
        .enumerate()
        .map(|(index, &score)| RankedIndex { index, score })
        .collect();

    ranked.sort_by(|a, b| sort_key(b.score).total_cmp(&sort_key(a.score)));
    ranked
}

/// NaN sorts last.
fn sort_key(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        score
    }
}

/// Take the first `limit` ranked indices, then drop those below `threshold`.
pub fn select_top(scores: &[f32], limit: usize, threshold: f32) -> Vec<RankedIndex> {
    rank_all(scores)
        .into_iter()
        .take(limit)
        .filter(|ranked| ranked.score >= threshold)
        .collect()
}
