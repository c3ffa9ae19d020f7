// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything a result list shows besides the title: word count, reading
//! time, match percentage, keyword chips and the content excerpt.

use serde::Serialize;

use crate::excerpt::excerpt;
use crate::highlight::{highlight, Highlight};
use crate::types::SearchResult;

/// Mixed CJK and Latin reading speed, words (or ideographs) per minute.
pub const WORDS_PER_MINUTE: usize = 350;

/// Keywords shown on a result card before collapsing into "+N".
pub const RESULT_KEYWORD_LIMIT: usize = 5;

/// Excerpt window on a result card. Longer than the list default.
pub const RESULT_EXCERPT_LENGTH: usize = 200;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == '_'
        || matches!(c,
            '\u{0392}'..='\u{03c9}'   // Greek
            | '\u{00c0}'..='\u{00ff}' // Latin-1 letters
            | '\u{0600}'..='\u{06ff}' // Arabic
            | '\u{0400}'..='\u{04ff}') // Cyrillic
}

fn is_cjk_char(c: char) -> bool {
    matches!(c,
        '\u{4e00}'..='\u{9fff}'
        | '\u{3400}'..='\u{4dbf}'
        | '\u{f900}'..='\u{faff}'
        | '\u{3040}'..='\u{309f}'
        | '\u{ac00}'..='\u{d7af}')
}

#[derive(Clone, Copy, PartialEq)]
enum Run {
    None,
    Word,
    Cjk { per_char: bool },
}

/// Words in `content`.
///
/// A run of alphabetic characters is one word. In a CJK run every character
/// is a word, unless the run starts below U+4E00 (kana), in which case the
/// whole run counts once.
pub fn word_count(content: &str) -> usize {
    let mut count = 0;
    let mut run = Run::None;
    for c in content.chars() {
        if is_word_char(c) {
            if run != Run::Word {
                count += 1;
                run = Run::Word;
            }
        } else if is_cjk_char(c) {
            match run {
                Run::Cjk { per_char: true } => count += 1,
                Run::Cjk { per_char: false } => {}
                _ => {
                    count += 1;
                    run = Run::Cjk {
                        per_char: c >= '\u{4e00}',
                    };
                }
            }
        } else {
            run = Run::None;
        }
    }
    count
}

/// Minutes to read `content`, rounded up. Empty content reads in 0 minutes.
pub fn reading_time_minutes(content: &str) -> usize {
    word_count(content).div_ceil(WORDS_PER_MINUTE)
}

/// Score as a percentage: 0.0 is 100%, 1.0 is 0%.
pub fn match_percentage(score: f64) -> u8 {
    ((1.0 - score) * 100.0).round().clamp(0.0, 100.0) as u8
}

impl SearchResult<'_> {
    /// Match percentage for display.
    ///
    /// `None` for listing entries and for a perfect score, which the result
    /// list shows without a badge.
    pub fn match_percentage(&self) -> Option<u8> {
        self.score()
            .filter(|&score| score != 0.0)
            .map(match_percentage)
    }
}

/// Keywords split into the ones shown and a count of the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordChips<'a> {
    pub shown: &'a [String],
    pub overflow: usize,
}

pub fn keyword_chips(keywords: &[String], limit: usize) -> KeywordChips<'_> {
    let shown = &keywords[..keywords.len().min(limit)];
    KeywordChips {
        shown,
        overflow: keywords.len() - shown.len(),
    }
}

/// One rendered search result, ready for a template or the terminal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultCard<'a> {
    pub slug: &'a str,
    pub date: &'a str,
    pub featured: bool,
    pub title: Highlight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Highlight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<Highlight>,
    pub keywords: Vec<Highlight>,
    pub hidden_keywords: usize,
    pub word_count: usize,
    pub reading_time_minutes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<u8>,
}

impl<'a> ResultCard<'a> {
    pub fn from_result(result: &SearchResult<'a>, query: &str) -> Self {
        let post = result.item();
        let chips = keyword_chips(&post.keywords, RESULT_KEYWORD_LIMIT);

        let excerpt = if query.trim().is_empty() {
            None
        } else {
            Some(excerpt(&post.content, query, RESULT_EXCERPT_LENGTH))
                .filter(|text| !text.is_empty())
                .map(|text| highlight(&text, query))
        };

        ResultCard {
            slug: &post.slug,
            date: &post.date,
            featured: post.is_featured(),
            title: highlight(&post.title, query),
            summary: post
                .summary
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(|s| highlight(s, query)),
            excerpt,
            keywords: chips.shown.iter().map(|k| highlight(k, query)).collect(),
            hidden_keywords: chips.overflow,
            word_count: word_count(&post.content),
            reading_time_minutes: reading_time_minutes(&post.content),
            match_percentage: result.match_percentage(),
        }
    }
}
