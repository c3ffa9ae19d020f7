// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search index construction.
//!
//! The index is a projection of the post list: for each post, every non-blank
//! searchable value lowercased and split into characters, tagged with its
//! field and length norm. Matching never touches the original strings again.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **ONE_TO_ONE**: `index.posts()[i].ref_index == i`, one entry per input post
//! 2. **LOWERCASE**: every indexed buffer and `searchable_text` is lowercase
//! 3. **NO_BLANKS**: blank values are never indexed, so they can never match
//! 4. **IMMUTABLE**: nothing mutates an index after `build_index` returns

use chrono::{DateTime, Utc};

use crate::options::{FieldWeights, SearchOptions};
use crate::scoring::field_norm;
use crate::types::{FieldKey, PostRecord};
use crate::utils::{count_tokens, is_blank, normalize, parse_date};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One searchable value, ready for the matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    pub key: FieldKey,
    pub chars: Vec<char>,
    pub norm: f64,
}

impl FieldValue {
    fn new(key: FieldKey, raw: &str) -> Option<Self> {
        if is_blank(raw) {
            return None;
        }
        let lowered = normalize(raw);
        Some(FieldValue {
            key,
            norm: field_norm(count_tokens(&lowered)),
            chars: lowered.chars().collect(),
        })
    }
}

/// Everything the engine knows about one post.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPost {
    /// Position of the source post in the corpus.
    pub ref_index: usize,
    pub slug: String,
    pub published: Option<DateTime<Utc>>,
    /// Lowercased title, summary, keywords and content, space-joined.
    pub searchable_text: String,
    pub values: Vec<FieldValue>,
}

/// The complete searchable corpus.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    posts: Vec<IndexedPost>,
    weights: FieldWeights,
    options: SearchOptions,
}

impl SearchIndex {
    pub fn posts(&self) -> &[IndexedPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Normalized weight for a field.
    pub fn weight(&self, key: FieldKey) -> f64 {
        self.weights.get(key)
    }

    /// Total number of indexed values across all posts.
    pub fn value_count(&self) -> usize {
        self.posts.iter().map(|p| p.values.len()).sum()
    }
}

/// The catch-all text: title, summary, keywords and content joined by single
/// spaces, then lowercased. A missing summary still contributes its separator.
pub fn searchable_text(post: &PostRecord) -> String {
    normalize(&format!(
        "{} {} {} {}",
        post.title,
        post.summary_or_empty(),
        post.keywords.join(" "),
        post.content
    ))
}

fn index_post(ref_index: usize, post: &PostRecord) -> IndexedPost {
    let searchable = searchable_text(post);

    let mut values = Vec::with_capacity(3 + post.keywords.len());
    values.extend(FieldValue::new(FieldKey::Title, &post.title));
    values.extend(FieldValue::new(FieldKey::Summary, post.summary_or_empty()));
    values.extend(
        post.keywords
            .iter()
            .filter_map(|keyword| FieldValue::new(FieldKey::Keywords, keyword)),
    );
    values.extend(FieldValue::new(FieldKey::SearchableText, &searchable));

    IndexedPost {
        ref_index,
        slug: post.slug.clone(),
        published: parse_date(&post.date),
        searchable_text: searchable,
        values,
    }
}

/// Build an index with the default options.
pub fn build_index(posts: &[PostRecord]) -> SearchIndex {
    build_index_with(posts, &SearchOptions::default())
}

/// Build an index from posts.
///
/// Pure: same posts and options, same index. With the `parallel` feature the
/// per-post projection runs on rayon; `collect` keeps input order either way.
pub fn build_index_with(posts: &[PostRecord], options: &SearchOptions) -> SearchIndex {
    let span = tracing::debug_span!("build_index", posts = posts.len());
    let _guard = span.enter();

    let indexed: Vec<IndexedPost> = {
        #[cfg(feature = "parallel")]
        {
            posts
                .par_iter()
                .enumerate()
                .map(|(i, post)| index_post(i, post))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            posts
                .iter()
                .enumerate()
                .map(|(i, post)| index_post(i, post))
                .collect()
        }
    };

    let undated = indexed.iter().filter(|p| p.published.is_none()).count();
    if undated > 0 {
        tracing::warn!(undated, "posts with unparseable dates will sort last");
    }

    let index = SearchIndex {
        posts: indexed,
        weights: options.weights.normalized(),
        options: options.clone(),
    };
    tracing::debug!(values = index.value_count(), "search index built");
    index
}
