//! Suggestion ranking invariants over arbitrary corpora.

use std::collections::HashSet;

use proptest::prelude::*;

use confscout::catalog::TagSet;
use confscout::config::SuggestConfig;
use confscout::suggestions::{suggest, suggest_with};

use crate::strategies::{arb_corpus, arb_query, arb_tags};

const ALWAYS_PARALLEL: SuggestConfig = SuggestConfig {
    parallel_threshold: 0,
    max_results: None,
};

proptest! {
    #[test]
    fn empty_query_never_suggests(corpus in arb_corpus(), tags in arb_tags()) {
        prop_assert!(suggest(&corpus, "", &tags).is_empty());
    }

    #[test]
    fn parallel_scan_matches_sequential(
        corpus in arb_corpus(),
        query in arb_query(),
        tags in arb_tags(),
    ) {
        let sequential = suggest(&corpus, &query, &tags);
        let parallel = suggest_with(&corpus, &query, &tags, &ALWAYS_PARALLEL);
        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn completion_words_are_unique(corpus in arb_corpus(), query in arb_query()) {
        let suggestions = suggest(&corpus, &query, &TagSet::new());
        let mut seen = HashSet::new();
        for suggestion in &suggestions {
            prop_assert!(seen.insert(suggestion.complete_word().to_string()));
        }
    }

    #[test]
    fn ranking_is_non_increasing(
        corpus in arb_corpus(),
        query in arb_query(),
        tags in arb_tags(),
    ) {
        let counts: Vec<usize> = suggest(&corpus, &query, &tags)
            .iter()
            .map(|s| s.talk_count())
            .collect();
        prop_assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn every_completion_contains_the_query(corpus in arb_corpus(), query in arb_query()) {
        let needle = query.to_lowercase();
        for suggestion in suggest(&corpus, &query, &TagSet::new()) {
            prop_assert!(suggestion.complete_word().contains(&needle));
            prop_assert!(!suggestion.sources().is_empty());
            prop_assert!(suggestion.talk_count() >= 1);
            let (_, matched, _) = suggestion.segments();
            prop_assert_eq!(matched, needle.as_str());
        }
    }

    #[test]
    fn tagged_suggestions_only_cite_tagged_talks(
        corpus in arb_corpus(),
        query in arb_query(),
        tags in arb_tags(),
    ) {
        for suggestion in suggest(&corpus, &query, &tags) {
            prop_assert!(suggestion.talks().iter().all(|t| tags.is_subset(&t.tags)));
        }
    }

    #[test]
    fn max_results_truncates_the_ranking(
        corpus in arb_corpus(),
        query in arb_query(),
        limit in 0usize..4,
    ) {
        let full = suggest(&corpus, &query, &TagSet::new());
        let config = SuggestConfig {
            parallel_threshold: usize::MAX,
            max_results: Some(limit),
        };
        let capped = suggest_with(&corpus, &query, &TagSet::new(), &config);
        prop_assert_eq!(capped.as_slice(), &full[..full.len().min(limit)]);
    }
}
