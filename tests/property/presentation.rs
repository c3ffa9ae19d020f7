//! Highlight and excerpt invariants.

use glean::{excerpt, highlight, match_percentage, ELLIPSIS};
use proptest::prelude::*;

proptest! {
    /// Property: a blank query leaves text untouched.
    #[test]
    fn prop_highlight_blank_query_is_identity(text in ".{0,60}", blank in "[ \t]{0,3}") {
        let h = highlight(&text, &blank);
        prop_assert_eq!(h.plain_text(), text);
        prop_assert!(!h.is_highlighted());
    }

    /// Property: segments always reassemble into the input.
    #[test]
    fn prop_highlight_reassembles(text in ".{0,60}", query in ".{0,6}") {
        prop_assert_eq!(highlight(&text, &query).plain_text(), text);
    }

    /// Property: every highlighted segment equals the trimmed query, ignoring
    /// ASCII case.
    #[test]
    fn prop_highlighted_segments_match_query(
        text in "[a-zA-Z .]{0,60}",
        query in "[a-zA-Z.]{1,4}",
    ) {
        for segment in highlight(&text, &query).segments.iter().filter(|s| s.highlighted) {
            prop_assert!(segment.text.eq_ignore_ascii_case(&query));
        }
    }

    /// Property: excerpts never exceed the window plus both markers.
    #[test]
    fn prop_excerpt_length_bound(
        content in ".{0,300}",
        query in ".{0,8}",
        max_length in 0usize..200,
    ) {
        let out = excerpt(&content, &query, max_length);
        prop_assert!(out.chars().count() <= max_length + 2 * ELLIPSIS.len());
    }

    /// Property: a query short enough to fit the window is inside the excerpt.
    #[test]
    fn prop_excerpt_contains_first_match(
        prefix in "[0-9 ]{0,200}",
        needle in "[A-Z]{1,10}",
        suffix in "[0-9 ]{0,200}",
        max_length in 30usize..150,
    ) {
        let content = format!("{}{}{}", prefix, needle, suffix);
        let out = excerpt(&content, &needle.to_lowercase(), max_length);
        prop_assert!(out.contains(&needle), "{:?} missing from {:?}", needle, out);
    }

    /// Property: match percentage is always a percentage.
    #[test]
    fn prop_match_percentage_in_range(score in 0.0f64..=1.0) {
        prop_assert!(match_percentage(score) <= 100);
    }
}
