//! Filtering invariants over arbitrary corpora.

use proptest::prelude::*;

use confscout::catalog::{TagSet, filter_conferences, talk_count};

use crate::strategies::{arb_corpus, arb_query, arb_tags};

proptest! {
    #[test]
    fn kept_talks_carry_every_active_tag(corpus in arb_corpus(), tags in arb_tags()) {
        let filtered = filter_conferences(&corpus, "", &tags);
        for conference in &filtered {
            for talk in &conference.talks {
                prop_assert!(tags.is_subset(&talk.tags));
            }
        }
    }

    #[test]
    fn no_conference_is_left_empty(
        corpus in arb_corpus(),
        query in arb_query(),
        tags in arb_tags(),
    ) {
        let filtered = filter_conferences(&corpus, &query, &tags);
        prop_assert!(filtered.iter().all(|c| !c.talks.is_empty()));
    }

    #[test]
    fn filtering_preserves_relative_order(
        corpus in arb_corpus(),
        query in arb_query(),
        tags in arb_tags(),
    ) {
        let filtered = filter_conferences(&corpus, &query, &tags);

        // Every kept conference maps to a strictly later source position, and
        // its talks form a subsequence of the source talks.
        let mut cursor = 0;
        for kept in &filtered {
            let offset = corpus[cursor..]
                .iter()
                .position(|c| c.name == kept.name && is_subsequence(&kept.talks, &c.talks));
            prop_assert!(offset.is_some());
            cursor += offset.unwrap_or_default() + 1;
        }
    }

    #[test]
    fn empty_query_and_tags_is_identity(corpus in arb_corpus()) {
        let filtered = filter_conferences(&corpus, "", &TagSet::new());
        let non_empty: Vec<_> = corpus.iter().filter(|c| !c.talks.is_empty()).cloned().collect();
        prop_assert_eq!(filtered, non_empty);
    }

    #[test]
    fn filtering_never_mutates_input(
        corpus in arb_corpus(),
        query in arb_query(),
        tags in arb_tags(),
    ) {
        let before = corpus.clone();
        let filtered = filter_conferences(&corpus, &query, &tags);
        prop_assert_eq!(&corpus, &before);
        prop_assert!(talk_count(&filtered) <= talk_count(&corpus));
    }
}

fn is_subsequence<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|item| rest.any(|candidate| candidate == item))
}
