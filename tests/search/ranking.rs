//! Ordering of ranked results.

use glean::Searcher;

use super::common::{make_post, make_post_full, slugs, SAMPLE};

#[test]
fn test_rust_posts_lead() {
    let results = SAMPLE.search("rust");
    assert_eq!(slugs(&results)[..2], ["rust-ownership", "rust-async"]);
}

#[test]
fn test_matching_more_fields_ranks_higher() {
    let posts = vec![
        make_post_full("title", "Rust", "2024-01-01", None, &[], "x"),
        make_post_full("both", "Rust", "2020-01-01", None, &["rust"], "x"),
    ];
    let searcher = Searcher::new(posts);
    assert_eq!(slugs(&searcher.search("rust")), vec!["both", "title"]);
}

#[test]
fn test_equal_scores_order_by_date_undated_last() {
    let posts = vec![
        make_post("undated", "Same", "someday"),
        make_post("old", "Same", "2020-01-01"),
        make_post("new", "Same", "2024-01-01"),
    ];
    let searcher = Searcher::new(posts);
    let results = searcher.search("same");
    assert_eq!(slugs(&results), vec!["new", "old", "undated"]);
    assert!(results.windows(2).all(|w| w[0].score() == w[1].score()));
}

#[test]
fn test_timestamps_break_ties_within_a_day() {
    let posts = vec![
        make_post("morning", "Same", "2024-01-01T08:00:00Z"),
        make_post("evening", "Same", "2024-01-01T20:00:00Z"),
    ];
    let searcher = Searcher::new(posts);
    assert_eq!(slugs(&searcher.search("same")), vec!["evening", "morning"]);
}

#[test]
fn test_scores_ascend() {
    let results = SAMPLE.search("async");
    assert!(results.len() >= 2);
    for pair in results.windows(2) {
        assert!(pair[0].score().unwrap() <= pair[1].score().unwrap());
    }
}

#[test]
fn test_search_limited_keeps_best() {
    let all = SAMPLE.search("rust");
    let top = SAMPLE.search_limited("rust", 2);
    assert_eq!(slugs(&top), slugs(&all)[..2]);
}
