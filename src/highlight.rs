// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting.
//!
//! `highlight` splits text into segments instead of returning markup. The
//! caller decides what emphasis looks like: `<mark>` for the site, ANSI
//! colours for the terminal. Matching is literal and case-insensitive;
//! highlighted segments keep the original casing.

use serde::Serialize;

use crate::utils::find_all_ignore_case;

/// Opening marker used by `render_html`. Templates match on it.
pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// A run of text that is either all match or all context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

/// Highlighted text as ordered segments.
///
/// Concatenating every segment's `text` gives back the input exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub segments: Vec<Segment>,
}

impl Highlight {
    fn push(&mut self, text: String, highlighted: bool) {
        if !text.is_empty() {
            self.segments.push(Segment { text, highlighted });
        }
    }

    /// Did the query occur at all?
    pub fn is_highlighted(&self) -> bool {
        self.segments.iter().any(|s| s.highlighted)
    }

    /// The input text, markers dropped.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Wrap highlighted runs in custom markers. Text is not escaped.
    pub fn render_with(&self, open: &str, close: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if segment.highlighted {
                out.push_str(open);
                out.push_str(&segment.text);
                out.push_str(close);
            } else {
                out.push_str(&segment.text);
            }
        }
        out
    }

    /// HTML with `<mark>` around matches. All text is escaped, so post
    /// content can never inject markup.
    pub fn render_html(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if segment.highlighted {
                out.push_str(MARK_OPEN);
                escape_html_into(&segment.text, &mut out);
                out.push_str(MARK_CLOSE);
            } else {
                escape_html_into(&segment.text, &mut out);
            }
        }
        out
    }
}

fn escape_html_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Mark every occurrence of the trimmed `query` in `text`.
///
/// A blank query yields the text as a single plain segment.
pub fn highlight(text: &str, query: &str) -> Highlight {
    let mut result = Highlight::default();
    let needle = query.trim();
    if needle.is_empty() {
        result.push(text.to_string(), false);
        return result;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut cursor = 0;
    for (start, len) in find_all_ignore_case(&chars, needle) {
        result.push(chars[cursor..start].iter().collect(), false);
        result.push(chars[start..start + len].iter().collect(), true);
        cursor = start + len;
    }
    result.push(chars[cursor..].iter().collect(), false);
    result
}
