//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::PostRecord;

/// Create a post with only the required fields filled in.
///
/// Content defaults to a sentence mentioning the title so searchable text is
/// never empty.
pub fn make_post(slug: &str, title: &str, date: &str) -> PostRecord {
    PostRecord {
        title: title.to_string(),
        slug: slug.to_string(),
        date: date.to_string(),
        summary: None,
        keywords: vec![],
        content: format!("Notes about {}.", title),
        featured: None,
    }
}

/// Create a post with every searchable field specified.
pub fn make_post_full(
    slug: &str,
    title: &str,
    date: &str,
    summary: Option<&str>,
    keywords: &[&str],
    content: &str,
) -> PostRecord {
    PostRecord {
        title: title.to_string(),
        slug: slug.to_string(),
        date: date.to_string(),
        summary: summary.map(str::to_string),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        content: content.to_string(),
        featured: None,
    }
}

/// Create a featured post.
pub fn make_featured(slug: &str, title: &str, date: &str) -> PostRecord {
    PostRecord {
        featured: Some(true),
        ..make_post(slug, title, date)
    }
}

/// A small, realistic corpus used across the integration tests.
pub fn sample_corpus() -> Vec<PostRecord> {
    vec![
        make_post_full(
            "rust-ownership",
            "Understanding Rust Ownership",
            "2024-03-10",
            Some("Borrowing, moves and lifetimes without the pain"),
            &["rust", "memory"],
            "Ownership is the feature that makes Rust different. Every value has a single owner.",
        ),
        make_post_full(
            "async-python",
            "Async Python in Practice",
            "2023-11-02",
            Some("Event loops and coroutines"),
            &["python", "async"],
            "Asyncio schedules coroutines on an event loop. Await yields control.",
        ),
        make_post_full(
            "nextjs-blog",
            "Building a Blog with Next.js",
            "2024-06-21",
            None,
            &["nextjs", "react", "blog"],
            "Static generation turns markdown posts into fast pages.",
        ),
        make_post_full(
            "rust-async",
            "Async Rust: Futures Explained",
            "2022-08-15",
            Some("Polling, wakers and executors"),
            &["rust", "async"],
            "A future does nothing until polled. Executors drive futures to completion.",
        ),
        PostRecord {
            featured: Some(true),
            ..make_post_full(
                "hello-world",
                "Hello World",
                "2021-01-01",
                Some("The first post"),
                &[],
                "Welcome to the blog.",
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_post() {
        let post = make_post("x", "Title", "2024-01-01");
        assert_eq!(post.slug, "x");
        assert_eq!(post.content, "Notes about Title.");
        assert!(!post.is_featured());
    }

    #[test]
    fn test_make_featured() {
        assert!(make_featured("x", "T", "2024-01-01").is_featured());
    }

    #[test]
    fn test_sample_corpus_slugs_unique() {
        let corpus = sample_corpus();
        let mut slugs: Vec<&str> = corpus.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), corpus.len());
    }
}
