// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collection views over the corpus: tags, featured posts, the archive.
//!
//! These never touch the search index. They read post records directly and
//! order by publication date with the same rule as `list_all`.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::scoring::ranking::compare_by_date_desc;
use crate::types::PostRecord;
use crate::utils::parse_date;

/// A keyword and how many times the corpus uses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount<'a> {
    pub name: &'a str,
    pub count: usize,
}

/// Every keyword in use, most used first. Equal counts keep the order in
/// which the tags first appear. Every occurrence counts, including a keyword
/// repeated within one post.
pub fn tag_counts(posts: &[PostRecord]) -> Vec<TagCount<'_>> {
    let mut counts: Vec<TagCount<'_>> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for post in posts {
        for keyword in &post.keywords {
            let name = keyword.as_str();
            match slots.get(name) {
                Some(&slot) => counts[slot].count += 1,
                None => {
                    slots.insert(name, counts.len());
                    counts.push(TagCount { name, count: 1 });
                }
            }
        }
    }

    // Stable: ties stay in first-appearance order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

fn newest_first(posts: Vec<&PostRecord>) -> Vec<&PostRecord> {
    let mut dated: Vec<(Option<DateTime<Utc>>, &PostRecord)> =
        posts.into_iter().map(|p| (parse_date(&p.date), p)).collect();
    dated.sort_by(|a, b| compare_by_date_desc(a.0.as_ref(), b.0.as_ref()));
    dated.into_iter().map(|(_, p)| p).collect()
}

/// Posts tagged with exactly `tag`, newest first.
pub fn posts_with_tag<'a>(posts: &'a [PostRecord], tag: &str) -> Vec<&'a PostRecord> {
    newest_first(
        posts
            .iter()
            .filter(|p| p.keywords.iter().any(|k| k == tag))
            .collect(),
    )
}

/// Featured posts, newest first.
pub fn featured_posts(posts: &[PostRecord]) -> Vec<&PostRecord> {
    newest_first(posts.iter().filter(|p| p.is_featured()).collect())
}

/// One calendar month of the archive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup<'a> {
    /// `YYYY-MM`.
    pub key: String,
    pub posts: Vec<&'a PostRecord>,
}

/// One year of the archive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearGroup<'a> {
    pub year: i32,
    pub months: Vec<MonthGroup<'a>>,
}

impl YearGroup<'_> {
    pub fn post_count(&self) -> usize {
        self.months.iter().map(|m| m.posts.len()).sum()
    }
}

/// The archive page: years newest first, months newest first within a year,
/// posts newest first within a month. Posts without a parseable date are left
/// out.
pub fn group_by_year_and_month(posts: &[PostRecord]) -> Vec<YearGroup<'_>> {
    let mut dated: Vec<(DateTime<Utc>, &PostRecord)> = posts
        .iter()
        .filter_map(|p| parse_date(&p.date).map(|d| (d, p)))
        .collect();
    let skipped = posts.len() - dated.len();
    if skipped > 0 {
        tracing::debug!(skipped, "archive skipped posts without a parseable date");
    }
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    let mut years: Vec<YearGroup<'_>> = Vec::new();
    for (date, post) in dated {
        if years.last().map(|y| y.year) != Some(date.year()) {
            years.push(YearGroup {
                year: date.year(),
                months: Vec::new(),
            });
        }
        let Some(year) = years.last_mut() else {
            continue;
        };

        let key = format!("{:04}-{:02}", date.year(), date.month());
        match year.months.last_mut() {
            Some(month) if month.key == key => month.posts.push(post),
            _ => year.months.push(MonthGroup {
                key,
                posts: vec![post],
            }),
        }
    }
    years
}
