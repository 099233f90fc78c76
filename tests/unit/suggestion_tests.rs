//! Suggestion ranking and provenance over the sample corpus.

use confscout::catalog::TagSet;
use confscout::config::SuggestConfig;
use confscout::suggestions::{Suggestion, SuggestionSource, suggest, suggest_with, tokenize};
use confscout::test_utils::{TestCase, TestLogger, run_table_tests, sample_corpus, synthetic_corpus};

fn tags(values: &[&str]) -> TagSet {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn summary(suggestions: &[Suggestion]) -> Vec<(String, usize)> {
    suggestions
        .iter()
        .map(|s| (s.complete_word().to_string(), s.talk_count()))
        .collect()
}

#[test]
fn sync_query_ranks_async_first() {
    let log = TestLogger::new("sync_query_ranks_async_first");
    let suggestions = suggest(&sample_corpus(), "sync", &TagSet::new());
    let actual = summary(&suggestions);
    let expected = vec![
        ("async".to_string(), 4),
        ("sync".to_string(), 1),
        ("asyncson".to_string(), 1),
    ];
    log.log_expected(&expected);
    log.log_actual(&actual);
    assert_eq!(actual, expected);

    let sources: Vec<SuggestionSource> = suggestions[0].sources().iter().copied().collect();
    assert_eq!(sources, vec![SuggestionSource::Title, SuggestionSource::Details]);
    assert!(suggestions[1].has_source(SuggestionSource::SpeakerLastname));
    log.pass();
}

#[test]
fn active_tags_limit_candidates() {
    let suggestions = suggest(&sample_corpus(), "sync", &tags(&["rust"]));
    assert_eq!(
        summary(&suggestions),
        vec![("async".to_string(), 3), ("asyncson".to_string(), 1)]
    );
    assert!(
        suggestions
            .iter()
            .flat_map(Suggestion::talks)
            .all(|t| t.tags.contains("rust"))
    );
}

#[test]
fn tied_suggestions_keep_scan_order() {
    let suggestions = suggest(&sample_corpus(), "swift", &TagSet::new());
    let words: Vec<&str> = suggestions.iter().map(Suggestion::complete_word).collect();
    assert_eq!(words, vec!["ana_swift", "swift", "swiftui"]);
    assert!(suggestions[0].has_source(SuggestionSource::Twitter));
}

#[test]
fn every_word_appears_once() {
    let suggestions = suggest(&synthetic_corpus(12, 20), "a", &TagSet::new());
    let mut words: Vec<&str> = suggestions.iter().map(Suggestion::complete_word).collect();
    let total = words.len();
    words.sort_unstable();
    words.dedup();
    assert_eq!(words.len(), total);
}

#[test]
fn ranking_is_non_increasing() {
    let suggestions = suggest(&synthetic_corpus(10, 15), "s", &TagSet::new());
    assert!(!suggestions.is_empty());
    assert!(
        suggestions
            .windows(2)
            .all(|pair| pair[0].talk_count() >= pair[1].talk_count())
    );
}

#[test]
fn parallel_and_sequential_agree_on_synthetic_corpus() {
    let corpus = synthetic_corpus(16, 32);
    let parallel = SuggestConfig {
        parallel_threshold: 0,
        max_results: None,
    };
    for query in ["sync", "ACT", "part", "family1"] {
        assert_eq!(
            suggest_with(&corpus, query, &TagSet::new(), &parallel),
            suggest(&corpus, query, &TagSet::new()),
            "query {query}"
        );
    }
}

#[test]
fn text_keeps_query_as_typed() {
    let suggestions = suggest(&sample_corpus(), "CLEAN", &TagSet::new());
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].text(), "CLEAN");
    assert_eq!(suggestions[0].complete_word(), "cleanup");
    assert_eq!(suggestions[0].segments(), ("", "clean", "up"));
}

#[test]
fn tokenize_table() {
    run_table_tests(
        vec![
            TestCase {
                name: "plain words",
                input: "Intro to Rust",
                expected: "intro to rust".to_string(),
            },
            TestCase {
                name: "hyphens kept",
                input: "Server-side Swift",
                expected: "server-side swift".to_string(),
            },
            TestCase {
                name: "punctuation runs",
                input: "async/await...and: more!!",
                expected: "async await and more".to_string(),
            },
            TestCase {
                name: "digits",
                input: "Rust 2024 edition",
                expected: "rust 2024 edition".to_string(),
            },
            TestCase {
                name: "empty",
                input: "",
                expected: "".to_string(),
            },
        ],
        |input| tokenize(input).join(" "),
    );
}
