//! Utility functions for string processing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Normalize a string for matching: lowercase only.
///
/// No diacritic stripping and no whitespace collapsing. The fuzzy matcher
/// compares raw character sequences, so "a  b" and "a b" are different
/// patterns.
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// True when the value is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Number of maximal runs of non-space characters.
///
/// Only U+0020 separates tokens; tabs and newlines are part of a token.
pub fn count_tokens(value: &str) -> usize {
    value.split(' ').filter(|t| !t.is_empty()).count()
}

/// Parse a post date.
///
/// Accepts RFC 3339 (`2024-03-01T09:30:00+08:00`), a naive timestamp
/// (`2024-03-01T09:30:00`, fractional seconds allowed, taken as UTC) and a
/// bare date (`2024-03-01`, midnight UTC). Anything else is `None`.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

// =============================================================================
// LITERAL CASE-INSENSITIVE MATCHING
// =============================================================================
//
// Highlighting and excerpting both need "where does this query occur,
// ignoring case" with positions in the ORIGINAL text. Lowercasing the whole
// text and searching there is wrong: some characters change length when
// lowercased ('İ' becomes two chars), which shifts every later position.
// So we compare one original character at a time against the needle.

/// Lowercase a needle into the character sequence the matchers compare against.
pub fn fold_needle(needle: &str) -> Vec<char> {
    needle.chars().flat_map(char::to_lowercase).collect()
}

/// If `needle` (already folded) matches `text` starting at char `start`,
/// return how many original characters the match spans.
///
/// A match must end on an original character boundary: if the needle ends in
/// the middle of a character's lowercase expansion, it does not count.
pub fn match_folded_at(text: &[char], start: usize, needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let mut matched = 0;
    let mut consumed = 0;
    for &c in text.get(start..)? {
        for lower in c.to_lowercase() {
            if matched == needle.len() || needle[matched] != lower {
                return None;
            }
            matched += 1;
        }
        consumed += 1;
        if matched == needle.len() {
            return Some(consumed);
        }
    }
    None
}

/// First case-insensitive occurrence of `needle` in `text`.
///
/// Returns `(char_start, char_len)` in original-text characters. The needle is
/// taken literally: no character has special meaning.
pub fn find_ignore_case(text: &[char], needle: &str) -> Option<(usize, usize)> {
    let folded = fold_needle(needle);
    (0..text.len()).find_map(|start| match_folded_at(text, start, &folded).map(|len| (start, len)))
}

/// Every non-overlapping case-insensitive occurrence, scanning left to right.
pub fn find_all_ignore_case(text: &[char], needle: &str) -> Vec<(usize, usize)> {
    let folded = fold_needle(needle);
    let mut found = Vec::new();
    let mut start = 0;
    while start < text.len() {
        match match_folded_at(text, start, &folded) {
            Some(len) => {
                found.push((start, len));
                start += len;
            }
            None => start += 1,
        }
    }
    found
}
