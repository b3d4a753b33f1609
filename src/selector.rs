use crate::candidate::{compare_candidates, Candidate};
use std::collections::HashSet;

/// Ranks candidates best first and keeps one representative per distinct
/// score. Ties keep discovery order, so the representative is the first
/// walk found with that score.
pub fn select_best(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(compare_candidates);

    let mut seen_scores = HashSet::new();
    candidates.retain(|c| seen_scores.insert(c.score()));
    candidates
}

/// [`select_best`] capped at `limit` entries when one is given.
pub fn select_top(candidates: Vec<Candidate>, limit: Option<usize>) -> Vec<Candidate> {
    let mut best = select_best(candidates);
    if let Some(n) = limit {
        best.truncate(n);
    }
    best
}
