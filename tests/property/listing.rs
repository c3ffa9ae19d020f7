//! Listing and blank-query invariants.

use glean::{parse_date, PostRecord, Searcher};
use proptest::prelude::*;

use super::common::make_post;

/// Dates: mostly valid, some timestamps, a few that will not parse.
fn date_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => (2000i32..2030, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d)),
        2 => (2000i32..2030, 1u32..=12, 1u32..=28, 0u32..24)
            .prop_map(|(y, m, d, h)| format!("{:04}-{:02}-{:02}T{:02}:00:00Z", y, m, d, h)),
        1 => Just("not a date".to_string()),
    ]
}

fn corpus_strategy() -> impl Strategy<Value = Vec<PostRecord>> {
    prop::collection::vec(("[a-z]{3,8}( [a-z]{3,8}){0,3}", date_strategy()), 0..12).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, date))| make_post(&format!("p{}", i), &title, &date))
                .collect()
        },
    )
}

proptest! {
    /// Property: list_all returns every post exactly once, newest first,
    /// undated posts last.
    #[test]
    fn prop_list_all_is_complete_and_ordered(posts in corpus_strategy()) {
        let searcher = Searcher::new(posts.clone());
        let listed = searcher.list_all();
        prop_assert_eq!(listed.len(), posts.len());

        let mut seen: Vec<&str> = listed.iter().map(|r| r.slug()).collect();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), posts.len());

        let dates: Vec<_> = listed.iter().map(|r| parse_date(&r.item().date)).collect();
        for pair in dates.windows(2) {
            match (pair[0], pair[1]) {
                (Some(a), Some(b)) => prop_assert!(a >= b),
                (None, Some(_)) => prop_assert!(false, "undated post before a dated one"),
                _ => {}
            }
        }
        prop_assert!(listed.iter().all(|r| r.score().is_none()));
    }

    /// Property: blank queries never match, whatever the corpus.
    #[test]
    fn prop_blank_query_is_empty(posts in corpus_strategy(), blank in "[ \t\n]{0,4}") {
        let searcher = Searcher::new(posts);
        prop_assert!(searcher.search(&blank).is_empty());
    }
}
