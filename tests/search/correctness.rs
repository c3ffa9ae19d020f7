//! Every field is searchable, and the right post comes back.

use super::common::{slugs, SAMPLE};

#[test]
fn test_finds_by_title() {
    let results = SAMPLE.search("ownership");
    assert_eq!(slugs(&results), vec!["rust-ownership"]);
}

#[test]
fn test_finds_by_summary() {
    assert_eq!(slugs(&SAMPLE.search("coroutines")), vec!["async-python"]);
    assert_eq!(slugs(&SAMPLE.search("executors")), vec!["rust-async"]);
}

#[test]
fn test_finds_by_keyword() {
    assert_eq!(SAMPLE.search("react")[0].slug(), "nextjs-blog");
}

#[test]
fn test_finds_by_content_only() {
    assert_eq!(slugs(&SAMPLE.search("markdown")), vec!["nextjs-blog"]);
}

#[test]
fn test_tolerates_typos() {
    assert_eq!(slugs(&SAMPLE.search("ownrship")), vec!["rust-ownership"]);
    assert_eq!(slugs(&SAMPLE.search("helo")), vec!["hello-world"]);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(
        slugs(&SAMPLE.search("Event Loop")),
        slugs(&SAMPLE.search("event loop"))
    );
    assert_eq!(slugs(&SAMPLE.search("EVENT LOOP")), vec!["async-python"]);
}

#[test]
fn test_unrelated_query_finds_nothing() {
    assert!(SAMPLE.search("zzzz").is_empty());
    assert!(SAMPLE.search("kubernetes").is_empty());
}

#[test]
fn test_every_result_is_ranked_and_indexed() {
    let corpus = SAMPLE.posts();
    for result in SAMPLE.search("rust") {
        assert!(result.is_ranked());
        let i = result.ref_index().unwrap();
        assert_eq!(corpus[i].slug, result.slug());
    }
}

#[test]
fn test_list_all_returns_everything_newest_first() {
    let results = SAMPLE.list_all();
    assert_eq!(results.len(), SAMPLE.posts().len());
    assert_eq!(
        slugs(&results),
        vec![
            "nextjs-blog",
            "rust-ownership",
            "async-python",
            "rust-async",
            "hello-world"
        ]
    );
}
