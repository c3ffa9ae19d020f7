// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! `Searcher` owns the posts and builds the index the first time a query
//! needs it. After that every call is a read over immutable data, so a
//! `Searcher` can sit behind an `Arc` and serve any number of threads.
//!
//! ```ignore
//! let searcher = Searcher::new(posts);
//! for result in searcher.search("rust async") {
//!     println!("{} {:?}", result.slug(), result.score());
//! }
//! ```

use std::sync::OnceLock;

use chrono::{DateTime, Utc};

use crate::fuzzy::Pattern;
use crate::index::{build_index_with, IndexedPost, SearchIndex};
use crate::options::SearchOptions;
use crate::scoring::ranking::{compare_by_date_desc, compare_scored, ScoredPost};
use crate::scoring::ScoreAccumulator;
use crate::types::{PostRecord, SearchResult};
use crate::utils::parse_date;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Score one indexed post against a compiled pattern.
pub fn score_post(index: &SearchIndex, pattern: &Pattern, post: &IndexedPost) -> Option<f64> {
    let mut acc = ScoreAccumulator::default();
    for value in &post.values {
        if let Some(score) = pattern.score(&value.chars) {
            acc.add(score, index.weight(value.key), value.norm);
        }
    }
    acc.finish()
}

/// Rank every post in the index against `query`.
///
/// Blank queries return nothing. The result is sorted best first.
pub fn rank(index: &SearchIndex, query: &str) -> Vec<ScoredPost> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let pattern = Pattern::from_options(query, index.options());
    let score_one = |post: &IndexedPost| {
        score_post(index, &pattern, post).map(|score| ScoredPost {
            ref_index: post.ref_index,
            score,
            published: post.published,
        })
    };

    let mut scored: Vec<ScoredPost> = {
        #[cfg(feature = "parallel")]
        {
            index.posts().par_iter().filter_map(score_one).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            index.posts().iter().filter_map(score_one).collect()
        }
    };

    scored.sort_by(compare_scored);
    tracing::trace!(query, matches = scored.len(), "ranked query");
    scored
}

/// Owns a corpus and its lazily built index.
#[derive(Debug)]
pub struct Searcher {
    posts: Vec<PostRecord>,
    options: SearchOptions,
    index: OnceLock<SearchIndex>,
}

impl Searcher {
    pub fn new(posts: Vec<PostRecord>) -> Self {
        Searcher::with_options(posts, SearchOptions::default())
    }

    pub fn with_options(posts: Vec<PostRecord>, options: SearchOptions) -> Self {
        Searcher {
            posts,
            options,
            index: OnceLock::new(),
        }
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Look a post up by slug.
    pub fn get(&self, slug: &str) -> Option<&PostRecord> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// The index, built on first use.
    ///
    /// Concurrent first callers block on a single build; later calls are a
    /// plain load.
    pub fn index(&self) -> &SearchIndex {
        self.index.get_or_init(|| build_index_with(&self.posts, &self.options))
    }

    /// Has the index been built yet?
    pub fn is_indexed(&self) -> bool {
        self.index.get().is_some()
    }

    /// Drop the cached index; the next query rebuilds it.
    pub fn clear_cache(&mut self) {
        if self.index.take().is_some() {
            tracing::debug!("search index cache cleared");
        }
    }

    /// Fuzzy search across title, summary, keywords and full text.
    ///
    /// Blank queries return an empty list, not every post: use `list_all`
    /// for that.
    pub fn search(&self, query: &str) -> Vec<SearchResult<'_>> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        rank(self.index(), query)
            .into_iter()
            .map(|scored| SearchResult::Ranked {
                item: &self.posts[scored.ref_index],
                score: scored.score,
                ref_index: scored.ref_index,
            })
            .collect()
    }

    /// `search`, keeping only the best `limit` results.
    pub fn search_limited(&self, query: &str, limit: usize) -> Vec<SearchResult<'_>> {
        let mut results = self.search(query);
        results.truncate(limit);
        results
    }

    /// What the search page shows for the current input: every post when
    /// the query is blank, ranked matches otherwise.
    pub fn browse(&self, query: &str) -> Vec<SearchResult<'_>> {
        if query.trim().is_empty() {
            self.list_all()
        } else {
            self.search(query)
        }
    }

    /// Every post, newest first, without scores. Reads the records directly
    /// and never builds the index.
    pub fn list_all(&self) -> Vec<SearchResult<'_>> {
        let mut order: Vec<(Option<DateTime<Utc>>, &PostRecord)> = self
            .posts
            .iter()
            .map(|post| (parse_date(&post.date), post))
            .collect();
        order.sort_by(|a, b| compare_by_date_desc(a.0.as_ref(), b.0.as_ref()));
        order
            .into_iter()
            .map(|(_, item)| SearchResult::Plain { item })
            .collect()
    }
}
