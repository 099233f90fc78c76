use proptest::prelude::*;

use confscout::catalog::{Conference, Speaker, TagSet, Talk};

const TAG_POOL: [&str; 5] = ["rust", "swift", "async", "ui", "web"];
const WORD_POOL: [&str; 10] = [
    "async", "sync", "rust", "swift", "actors", "Generics", "server-side", "UI", "tests", "2024",
];

pub fn arb_tags() -> impl Strategy<Value = TagSet> {
    prop::collection::btree_set(prop::sample::select(TAG_POOL.to_vec()), 0..3)
        .prop_map(|set| set.into_iter().map(str::to_string).collect())
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => prop::sample::select(WORD_POOL.to_vec()).prop_map(str::to_string),
            1 => "[A-Za-z0-9!,.:/ -]{1,8}",
        ],
        1..6,
    )
    .prop_map(|words| words.join(" "))
}

pub fn arb_talk() -> impl Strategy<Value = Talk> {
    (
        arb_text(),
        prop::option::of(arb_text()),
        "[A-Z][a-z]{1,8}",
        "[A-Z][a-z]{1,8}",
        prop::option::of("[a-z_]{3,10}"),
        arb_tags(),
    )
        .prop_map(|(title, details, first, last, twitter, tags)| {
            let mut speaker = Speaker::new(first, last);
            speaker.twitter = twitter;
            let mut talk = Talk::new(title, speaker).with_tags(tags);
            talk.details = details;
            talk
        })
}

pub fn arb_corpus() -> impl Strategy<Value = Vec<Conference>> {
    prop::collection::vec(
        ("[A-Za-z]{3,10}", prop::collection::vec(arb_talk(), 0..6))
            .prop_map(|(name, talks)| Conference::new(name, talks)),
        0..5,
    )
}

pub fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["a", "sync", "RUST", "s", "-", "ui"]).prop_map(str::to_string),
        "[a-z]{1,3}",
    ]
}
