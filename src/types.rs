// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search core.
//!
//! Posts come in from the content pipeline already parsed. Everything the
//! index derives from them lives in `index.rs`; this module only holds the
//! shapes that cross the crate boundary.
//!
//! # Invariants
//!
//! - **PostRecord**: `slug` is unique across a corpus. Not checked here; a
//!   duplicate slug is the content pipeline's bug.
//! - **SearchResult**: `Ranked` results are ordered by score, `Plain` results
//!   by date. The two never mix in one result list.

use serde::{Deserialize, Serialize};

// =============================================================================
// POST RECORDS
// =============================================================================

/// One blog post as produced by the front-matter parser.
///
/// Read-only to the search core. Field names follow the pipeline's JSON
/// (`camelCase`), so a dump of the content collection deserializes as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub title: String,
    pub slug: String,
    /// ISO-8601 publication date (`2024-03-01` or a full RFC 3339 timestamp).
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl PostRecord {
    /// Summary text, or the empty string when the post has none.
    pub fn summary_or_empty(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    pub fn is_featured(&self) -> bool {
        self.featured == Some(true)
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// The four weighted fields a query is matched against.
///
/// Order matters only for display; scoring looks weights up by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Title,
    Summary,
    Keywords,
    SearchableText,
}

impl FieldKey {
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Title,
        FieldKey::Summary,
        FieldKey::Keywords,
        FieldKey::SearchableText,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Title => "title",
            FieldKey::Summary => "summary",
            FieldKey::Keywords => "keywords",
            FieldKey::SearchableText => "searchableText",
        }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// What callers get back from the query engine.
///
/// A fuzzy match carries a score (lower is better, 0 is perfect) and the
/// post's position in the corpus. A listing entry carries neither: listings
/// are ordered by date, so a score would mean nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SearchResult<'a> {
    #[serde(rename_all = "camelCase")]
    Ranked {
        item: &'a PostRecord,
        score: f64,
        ref_index: usize,
    },
    Plain { item: &'a PostRecord },
}

impl<'a> SearchResult<'a> {
    /// The originating post, whichever variant this is.
    pub fn item(&self) -> &'a PostRecord {
        match self {
            SearchResult::Ranked { item, .. } | SearchResult::Plain { item } => item,
        }
    }

    /// Match quality for ranked results; `None` for listing entries.
    pub fn score(&self) -> Option<f64> {
        match self {
            SearchResult::Ranked { score, .. } => Some(*score),
            SearchResult::Plain { .. } => None,
        }
    }

    pub fn ref_index(&self) -> Option<usize> {
        match self {
            SearchResult::Ranked { ref_index, .. } => Some(*ref_index),
            SearchResult::Plain { .. } => None,
        }
    }

    pub fn slug(&self) -> &'a str {
        &self.item().slug
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, SearchResult::Ranked { .. })
    }
}
