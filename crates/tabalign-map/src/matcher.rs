//! Best-match resolution between a target name and a candidate pool.

use rapidfuzz::distance::indel;

use crate::normalize::normalize_key;

/// How a candidate was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Normalized forms are identical; similarity scoring was bypassed.
    Exact,
    /// Highest similarity score at or above the cutoff.
    Fuzzy,
}

/// A winning candidate: the original (non-normalized) column name, its
/// similarity score against the target, and how it was selected.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchHit {
    pub column: String,
    pub score: f64,
    pub kind: MatchKind,
}

/// Resolves the single best candidate for `target`, or `None`.
///
/// Candidates are reduced to an insertion-ordered pool of distinct
/// normalized keys, each keeping the first original name that produced it;
/// later duplicates are invisible. An exact normalized match wins outright.
/// Otherwise every key is scored with the indel similarity ratio (symmetric,
/// length-normalized, 1.0 only for identical strings) and the highest score
/// at or above `cutoff` wins, the earliest candidate taking ties.
///
/// Pure function of its inputs; an empty pool yields `None`.
pub fn best_match(target: &str, candidates: &[String], cutoff: f64) -> Option<MatchHit> {
    let normalized_target = normalize_key(target);

    // First occurrence wins; order decides fuzzy tie-breaks below.
    let mut pool: Vec<(String, &str)> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let key = normalize_key(candidate);
        if !pool.iter().any(|(seen, _)| *seen == key) {
            pool.push((key, candidate.as_str()));
        }
    }

    if let Some((_, original)) = pool.iter().find(|(key, _)| *key == normalized_target) {
        return Some(MatchHit {
            column: (*original).to_string(),
            score: 1.0,
            kind: MatchKind::Exact,
        });
    }

    let mut best: Option<MatchHit> = None;
    for (key, original) in &pool {
        let score = indel::normalized_similarity(normalized_target.chars(), key.chars());
        if score < cutoff {
            continue;
        }
        // Strict comparison keeps the earliest candidate on equal scores.
        if best.as_ref().is_none_or(|hit| score > hit.score) {
            best = Some(MatchHit {
                column: (*original).to_string(),
                score,
                kind: MatchKind::Fuzzy,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn exact_match_bypasses_scoring_even_at_cutoff_one() {
        let candidates = columns(&["customer id", "customer ids"]);
        let hit = best_match("Customer_ID", &candidates, 1.0).unwrap();
        assert_eq!(hit.column, "customer id");
        assert_eq!(hit.kind, MatchKind::Exact);
        assert_eq!(hit.score, 1.0);
    }

    #[test]
    fn duplicate_normalized_candidates_keep_first_occurrence() {
        let candidates = columns(&["Customer-ID", "customer_id", "customer id"]);
        let hit = best_match("CUSTOMER ID", &candidates, 0.6).unwrap();
        assert_eq!(hit.column, "Customer-ID");
    }

    #[test]
    fn fuzzy_match_pins_indel_ratio() {
        // "email" vs "email address": shared subsequence of 5 chars over a
        // combined length of 18 gives exactly 10/18.
        let candidates = columns(&["email_address"]);
        let hit = best_match("Email", &candidates, 0.5).unwrap();
        assert_eq!(hit.kind, MatchKind::Fuzzy);
        assert!((hit.score - 10.0 / 18.0).abs() < 1e-12);

        // The same pair falls below the default 0.6 cutoff.
        assert!(best_match("Email", &candidates, 0.6).is_none());
    }

    #[test]
    fn tie_break_prefers_earliest_candidate() {
        // Both normalize to distinct keys at the same distance from "abcd".
        let candidates = columns(&["abce", "abcf"]);
        let hit = best_match("abcd", &candidates, 0.5).unwrap();
        assert_eq!(hit.column, "abce");
    }

    #[test]
    fn empty_pool_yields_none() {
        assert!(best_match("anything", &[], 0.0).is_none());
    }
}
