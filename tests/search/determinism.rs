//! Same corpus, same query, same answer.

use glean::Searcher;

use super::common::{sample_corpus, slugs, synthetic_corpus};

fn scored(searcher: &Searcher, query: &str) -> Vec<(String, f64)> {
    searcher
        .search(query)
        .iter()
        .map(|r| (r.slug().to_string(), r.score().unwrap()))
        .collect()
}

#[test]
fn test_repeated_search_is_identical() {
    let searcher = Searcher::new(synthetic_corpus(200));
    for query in ["rust", "databses", "async notes", "post 17"] {
        assert_eq!(scored(&searcher, query), scored(&searcher, query), "{}", query);
    }
}

#[test]
fn test_rebuild_after_clear_is_identical() {
    let mut searcher = Searcher::new(synthetic_corpus(100));
    let before = scored(&searcher, "caching");
    searcher.clear_cache();
    assert_eq!(scored(&searcher, "caching"), before);
}

#[test]
fn test_independent_searchers_agree() {
    let a = Searcher::new(sample_corpus());
    let b = Searcher::new(sample_corpus());
    assert_eq!(slugs(&a.search("async")), slugs(&b.search("async")));
    assert_eq!(slugs(&a.list_all()), slugs(&b.list_all()));
}
