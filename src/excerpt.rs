// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpt windows around the first match.

use crate::utils::find_ignore_case;

/// Truncation marker on either side of a window.
pub const ELLIPSIS: &str = "...";

/// Window length used by result lists.
pub const DEFAULT_EXCERPT_LENGTH: usize = 150;

/// A window of at most `max_length` characters from `content`.
///
/// When the query occurs as given (case-insensitive, literal, surrounding
/// spaces included) the window starts a third of `max_length` before the first
/// occurrence. A blank query or a miss yields the head of the content.
/// Positions count characters, not bytes.
pub fn excerpt(content: &str, query: &str, max_length: usize) -> String {
    let chars: Vec<char> = content.chars().collect();
    let found = if query.trim().is_empty() {
        None
    } else {
        find_ignore_case(&chars, query)
    };

    let Some((query_index, _)) = found else {
        return head(&chars, max_length);
    };

    let start = query_index.saturating_sub(max_length / 3);
    let end = chars.len().min(start + max_length);

    let mut out = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.extend(&chars[start..end]);
    if end < chars.len() {
        out.push_str(ELLIPSIS);
    }
    out
}

/// `excerpt` with the default window length.
pub fn excerpt_default(content: &str, query: &str) -> String {
    excerpt(content, query, DEFAULT_EXCERPT_LENGTH)
}

fn head(chars: &[char], max_length: usize) -> String {
    if chars.len() <= max_length {
        return chars.iter().collect();
    }
    let mut out: String = chars[..max_length].iter().collect();
    out.push_str(ELLIPSIS);
    out
}
