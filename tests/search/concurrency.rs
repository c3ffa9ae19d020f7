//! A shared `Searcher` builds its index once and serves many threads.

use std::sync::Arc;
use std::thread;

use glean::Searcher;

use super::common::synthetic_corpus;

fn slugs_for(searcher: &Searcher, query: &str) -> Vec<String> {
    searcher
        .search(query)
        .iter()
        .map(|r| r.slug().to_string())
        .collect()
}

#[test]
fn test_concurrent_first_use() {
    let searcher = Arc::new(Searcher::new(synthetic_corpus(300)));
    assert!(!searcher.is_indexed());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let searcher = Arc::clone(&searcher);
            thread::spawn(move || slugs_for(&searcher, "networking"))
        })
        .collect();
    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(searcher.is_indexed());
    assert!(!results[0].is_empty());
    for other in &results[1..] {
        assert_eq!(other, &results[0]);
    }
}

#[test]
fn test_mixed_operations_in_parallel() {
    let searcher = Searcher::new(synthetic_corpus(120));
    let expected = slugs_for(&searcher, "security");

    thread::scope(|s| {
        for i in 0..6 {
            let searcher = &searcher;
            let expected = &expected;
            s.spawn(move || {
                if i % 2 == 0 {
                    assert_eq!(&slugs_for(searcher, "security"), expected);
                } else {
                    assert_eq!(searcher.list_all().len(), 120);
                }
            });
        }
    });
}
