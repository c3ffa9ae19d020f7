// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted fuzzy search for static blog posts.
//!
//! A query is matched against four fields of every post (title, summary,
//! keywords and a catch-all full text) with a bitap matcher that tolerates a
//! few typos. Per-field scores are combined with field weights and length
//! norms; results come back best first, newest first on ties.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  index.rs    │────▶│  search/     │
//! │ (PostRecord,│     │ (build_index,│     │  (Searcher,  │
//! │ SearchResult│     │  FieldValue) │     │   rank)      │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │  fuzzy/      │     │  scoring/    │
//!                     │  (Pattern)   │     │ (norms, sort)│
//!                     └──────────────┘     └──────────────┘
//!
//! highlight.rs · excerpt.rs · present.rs   presentation helpers
//! archive.rs                               tag and date views
//! debounce.rs                              caller-side input policy
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use glean::{highlight, excerpt_default, Searcher};
//!
//! let searcher = Searcher::new(posts);
//! for result in searcher.search("rust ownership") {
//!     let title = highlight(&result.item().title, "rust ownership");
//!     println!("{}", title.render_html());
//! }
//! ```

mod archive;
mod debounce;
mod error;
mod excerpt;
mod fuzzy;
mod highlight;
mod index;
mod load;
mod options;
mod present;
mod scoring;
mod search;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use archive::{
    featured_posts, group_by_year_and_month, posts_with_tag, tag_counts, MonthGroup, TagCount,
    YearGroup,
};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use error::LoadError;
pub use excerpt::{excerpt, excerpt_default, DEFAULT_EXCERPT_LENGTH, ELLIPSIS};
pub use fuzzy::{Pattern, MAX_PATTERN_BITS, MIN_MATCH_SCORE};
pub use highlight::{highlight, Highlight, Segment, MARK_CLOSE, MARK_OPEN};
pub use index::{build_index, build_index_with, searchable_text, FieldValue, IndexedPost, SearchIndex};
pub use load::{load_posts, parse_posts};
pub use options::{
    FieldWeights, OptionsError, SearchOptions, DEFAULT_MIN_MATCH_CHAR_LENGTH, DEFAULT_THRESHOLD,
};
pub use present::{
    keyword_chips, match_percentage, reading_time_minutes, word_count, KeywordChips, ResultCard,
    RESULT_EXCERPT_LENGTH, RESULT_KEYWORD_LIMIT, WORDS_PER_MINUTE,
};
pub use scoring::ranking::{compare_by_date_desc, compare_scored, ScoredPost};
pub use scoring::{field_norm, ScoreAccumulator};
pub use search::{rank, score_post, Searcher};
pub use types::{FieldKey, PostRecord, SearchResult};
pub use utils::{normalize, parse_date};
