//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::LazyLock;

use glean::{PostRecord, SearchResult, Searcher};

// Re-export canonical test utilities from glean::testing
pub use glean::testing::{make_featured, make_post, make_post_full, sample_corpus};

/// Searcher over the sample corpus, shared across tests in one binary.
pub static SAMPLE: LazyLock<Searcher> = LazyLock::new(|| Searcher::new(sample_corpus()));

const TOPICS: &[&str] = &[
    "rust", "python", "async", "compilers", "databases", "networking", "testing", "parsing",
    "caching", "security", "design", "linux",
];

const FILLER: &[&str] = &[
    "notes", "about", "building", "small", "tools", "with", "care", "and", "some", "patience",
    "while", "learning", "how", "things", "work",
];

/// A deterministic blog of `n` posts, one per day going back from 2024-12-31.
pub fn synthetic_corpus(n: usize) -> Vec<PostRecord> {
    (0..n)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            let other = TOPICS[(i * 7 + 3) % TOPICS.len()];
            let body: Vec<&str> = (0..60).map(|j| FILLER[(i + j * 3) % FILLER.len()]).collect();
            let year = 2024 - (i / 365) as i32;
            let day_of_year = 365 - (i % 365);
            let month = (day_of_year - 1) / 31 + 1;
            let day = (day_of_year - 1) % 28 + 1;
            let summary = format!("A look at {}", topic);
            make_post_full(
                &format!("post-{}", i),
                &format!("Post {} on {} and {}", i, topic, other),
                &format!("{:04}-{:02}-{:02}", year, month.min(12), day),
                Some(summary.as_str()),
                &[topic, other],
                &format!("{} {} {}", topic, body.join(" "), other),
            )
        })
        .collect()
}

/// Slugs of a result list, in order.
pub fn slugs<'a>(results: &[SearchResult<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.slug()).collect()
}
