//! Property tests for the alignment engine's contracts.

use proptest::prelude::*;

use tabalign_map::{MappingEngine, best_match, normalize_key};

fn name_strategy() -> impl Strategy<Value = String> {
    // Headers as they show up in the wild: word characters, separators,
    // stray punctuation, uneven spacing.
    "[A-Za-z0-9_\\- .()]{0,16}"
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in ".*") {
        let once = normalize_key(&raw);
        prop_assert_eq!(normalize_key(&once), once);
    }

    #[test]
    fn normalized_keys_contain_only_alphanumerics_and_single_spaces(raw in ".*") {
        let key = normalize_key(&raw);
        prop_assert!(key.chars().all(|ch| ch.is_alphanumeric() || ch == ' '));
        prop_assert!(!key.contains("  "));
        prop_assert_eq!(key.trim(), &key);
    }

    #[test]
    fn lowering_the_cutoff_never_loses_a_match(
        target in name_strategy(),
        candidates in prop::collection::vec(name_strategy(), 0..6),
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let (lower, higher) = if a <= b { (a, b) } else { (b, a) };
        if best_match(&target, &candidates, higher).is_some() {
            prop_assert!(best_match(&target, &candidates, lower).is_some());
        }
    }

    #[test]
    fn matcher_returns_an_original_candidate(
        target in name_strategy(),
        candidates in prop::collection::vec(name_strategy(), 0..6),
        cutoff in 0.0f64..=1.0,
    ) {
        if let Some(hit) = best_match(&target, &candidates, cutoff) {
            prop_assert!(candidates.contains(&hit.column));
            prop_assert!((0.0..=1.0).contains(&hit.score));
        }
    }

    #[test]
    fn suggestion_is_total_over_reference_columns(
        refs in prop::collection::vec(name_strategy(), 0..8),
        content in prop::collection::vec(name_strategy(), 0..8),
        cutoff in 0.0f64..=1.0,
    ) {
        let mapping = MappingEngine::new(cutoff).unwrap().suggest(&refs, &content);
        prop_assert!(mapping.is_total_over(&refs));
    }
}
