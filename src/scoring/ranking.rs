// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Sort order for fuzzy results:
//! 1. **Score** ascending (best match first)
//! 2. **Date** descending (newer post wins a tie)
//! 3. **Corpus position** ascending, for absolute determinism
//!
//! Listings skip step 1. Posts whose date did not parse sort after every
//! dated post, so the comparator stays a total order.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// A post that matched, before it is turned into a `SearchResult`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPost {
    pub ref_index: usize,
    pub score: f64,
    pub published: Option<DateTime<Utc>>,
}

/// Newest first; undated last.
pub fn compare_by_date_desc(
    a: Option<&DateTime<Utc>>,
    b: Option<&DateTime<Utc>>,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare two scored posts for ranking.
///
/// Scores are compared exactly: two scores that differ in the last bit are
/// not a tie. `total_cmp` keeps NaN from breaking the sort.
pub fn compare_scored(a: &ScoredPost, b: &ScoredPost) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| compare_by_date_desc(a.published.as_ref(), b.published.as_ref()))
        .then_with(|| a.ref_index.cmp(&b.ref_index))
}
