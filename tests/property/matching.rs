//! Matching invariants over generated titles.

use glean::{PostRecord, Searcher};
use proptest::prelude::*;

use super::common::make_post;

fn titles_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z][a-zA-Z ]{1,23}", 1..5)
}

fn posts_from(titles: &[String]) -> Vec<PostRecord> {
    titles
        .iter()
        .enumerate()
        .map(|(i, t)| make_post(&format!("p{}", i), t, "2024-01-01"))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: any substring of a title (two or more chars, not all
    /// whitespace) finds that post.
    #[test]
    fn prop_title_substring_finds_post(
        titles in titles_strategy(),
        start in any::<prop::sample::Index>(),
        len in any::<prop::sample::Index>(),
    ) {
        let searcher = Searcher::new(posts_from(&titles));

        for (i, title) in titles.iter().enumerate() {
            let n = title.len();
            let s = start.index(n - 1);
            let l = 2 + len.index(n - s - 1);
            let snippet = &title[s..s + l];
            if snippet.trim().is_empty() {
                continue;
            }
            let results = searcher.search(snippet);
            prop_assert!(
                results.iter().any(|r| r.ref_index() == Some(i)),
                "{:?} not found by {:?}", title, snippet
            );
        }
    }

    /// Property: search is deterministic.
    #[test]
    fn prop_search_is_deterministic(titles in titles_strategy(), query in "[a-z]{2,6}") {
        let searcher = Searcher::new(posts_from(&titles));
        let first: Vec<(usize, f64)> = searcher
            .search(&query)
            .iter()
            .map(|r| (r.ref_index().unwrap(), r.score().unwrap()))
            .collect();
        let second: Vec<(usize, f64)> = searcher
            .search(&query)
            .iter()
            .map(|r| (r.ref_index().unwrap(), r.score().unwrap()))
            .collect();
        prop_assert_eq!(first, second);
    }

    /// Property: scores are positive and at most 1.
    #[test]
    fn prop_scores_in_range(titles in titles_strategy(), query in "[a-z ]{2,10}") {
        let searcher = Searcher::new(posts_from(&titles));
        for result in searcher.search(&query) {
            let score = result.score().unwrap();
            prop_assert!(score > 0.0 && score <= 1.0, "score {}", score);
        }
    }
}
