//! Degenerate inputs: nothing here may panic.

use glean::Searcher;

use super::common::{make_post, SAMPLE};

#[test]
fn test_blank_queries() {
    for query in ["", " ", "   ", "\t", "\n \t"] {
        assert!(SAMPLE.search(query).is_empty(), "{:?}", query);
    }
}

#[test]
fn test_empty_corpus() {
    let searcher = Searcher::new(Vec::new());
    assert!(searcher.search("rust").is_empty());
    assert!(searcher.list_all().is_empty());
    assert!(searcher.browse("").is_empty());
}

#[test]
fn test_punctuation_and_metacharacters() {
    let posts = SAMPLE.posts();
    for query in ["!!", "a.b", ".*", "(", "[a-z]+", "\\", "$^", "c++"] {
        for result in SAMPLE.search(query) {
            assert!(result.is_ranked(), "{:?}", query);
            let index = result.ref_index().unwrap();
            assert!(index < posts.len(), "{:?}", query);
            assert_eq!(result.slug(), posts[index].slug, "{:?}", query);
            let score = result.score().unwrap();
            assert!(score > 0.0 && score <= 1.0, "{:?} scored {}", query, score);
        }
    }
    // Single characters need a run of two to match
    assert!(SAMPLE.search("(").is_empty());
    assert!(SAMPLE.search("\\").is_empty());
    assert!(SAMPLE.search("a.b").is_empty());
    assert!(SAMPLE.search(".*").is_empty());
}

#[test]
fn test_single_character_query() {
    // Shorter than the minimum match length
    assert!(SAMPLE.search("a").is_empty());
}

#[test]
fn test_very_long_query() {
    let query = "x".repeat(100);
    assert!(SAMPLE.search(&query).is_empty());

    let title = "the quick brown fox jumps over the lazy dog again and again";
    let searcher = Searcher::new(vec![make_post("fox", title, "2024-01-01")]);
    assert_eq!(searcher.search(title).len(), 1);
}

#[test]
fn test_unicode() {
    let posts = vec![
        make_post("cafe", "Café Culture", "2024-01-01"),
        make_post("zh", "搜索引擎入门", "2024-01-02"),
    ];
    let searcher = Searcher::new(posts);
    assert_eq!(searcher.search("CAFÉ")[0].slug(), "cafe");
    assert_eq!(searcher.search("搜索")[0].slug(), "zh");
    assert!(searcher.search("🦀🦀").is_empty());
}
