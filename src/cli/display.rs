// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the glean CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Matches are drawn
//! bold in the accent colour; without colour support they fall back to
//! `[brackets]` so a match is still visible in a pipe or a log file.
//!
//! # Theme detection order
//!
//! 1. `GLEAN_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use glean::{Highlight, KeywordChips, MonthGroup, ResultCard, TagCount, YearGroup};

/// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// COLORFGBG is "fg;bg"; background 7 and up (except 8) is a light terminal.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("GLEAN_THEME").ok().as_deref().and_then(parse_theme) {
        return theme;
    }

    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(theme_from_colorfgbg)
    {
        return theme;
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_YELLOW);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors on stdout? Off for `NO_COLOR` and for anything that isn't a TTY.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ANSI escapes excluded.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border, content, " ".repeat(pad), border);
}

fn labelled_rule(left: &str, right: &str, label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], left),
        label_part,
        themed(GRAY, &[], &format!("{}{}", "─".repeat(remaining), right))
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    labelled_rule("┌", "┐", label);
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    labelled_rule("├", "┤", label);
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Highlighted text for the terminal.
pub fn highlighted(h: &Highlight) -> String {
    if use_colors() {
        let open = format!("{}{}", BOLD, BRIGHT_YELLOW());
        h.render_with(&open, RESET)
    } else {
        h.render_with("[", "]")
    }
}

/// Match percentage, green when strong, yellow when middling, red when weak.
pub fn match_badge(percentage: Option<u8>) -> String {
    let Some(pct) = percentage else {
        return String::new();
    };
    let text = format!("{:>3}%", pct);
    if pct >= 80 {
        themed(GREEN, &[BOLD], &text)
    } else if pct >= 50 {
        themed(YELLOW, &[], &text)
    } else {
        themed(RED, &[], &text)
    }
}

pub fn featured_badge() -> String {
    themed(MAGENTA, &[BOLD], "★ featured")
}

/// `#tag #tag +2`
pub fn keyword_line(chips: &[Highlight], hidden: usize) -> String {
    let mut parts: Vec<String> = chips
        .iter()
        .map(|h| themed(BLUE, &[], &format!("#{}", highlighted(h))))
        .collect();
    if hidden > 0 {
        parts.push(themed(GRAY, &[], &format!("+{}", hidden)));
    }
    parts.join(" ")
}

/// Plain keyword chips for listings where nothing is highlighted.
pub fn plain_keyword_line(chips: &KeywordChips<'_>) -> String {
    let highlights: Vec<Highlight> = chips
        .shown
        .iter()
        .map(|k| glean::highlight(k, ""))
        .collect();
    keyword_line(&highlights, chips.overflow)
}

fn metadata_line(card: &ResultCard<'_>) -> String {
    let minutes = if card.reading_time_minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{} minutes", card.reading_time_minutes)
    };
    let mut parts = vec![
        card.date.to_string(),
        format!("{} words", card.word_count),
        minutes,
    ];
    if let Some(pct) = card.match_percentage {
        parts.push(format!("match {}%", pct));
    }
    themed(GRAY, &[], &parts.join(" · "))
}

/// One result card, numbered.
pub fn print_card(rank: usize, card: &ResultCard<'_>) {
    let mut heading = format!(
        "{} {}",
        themed(GRAY, &[], &format!("{:>2}.", rank)),
        themed(CYAN, &[BOLD], &highlighted(&card.title))
    );
    if card.featured {
        heading.push_str("  ");
        heading.push_str(&featured_badge());
    }
    let badge = match_badge(card.match_percentage);
    if !badge.is_empty() {
        heading.push_str("  ");
        heading.push_str(&badge);
    }
    println!("{}", heading);
    println!("    {} {}", themed(GRAY, &[DIM], card.slug), metadata_line(card));
    if let Some(summary) = &card.summary {
        println!("    {}", highlighted(summary));
    }
    if let Some(excerpt) = &card.excerpt {
        println!("    {}", themed(GRAY, &[], &highlighted(excerpt)));
    }
    if !card.keywords.is_empty() {
        println!("    {}", keyword_line(&card.keywords, card.hidden_keywords));
    }
    println!();
}

pub fn print_tag_counts(tags: &[TagCount<'_>]) {
    section_top(&format!("TAGS ({})", tags.len()));
    if tags.is_empty() {
        row(&themed(GRAY, &[], " no tags"));
    }
    let widest = tags.iter().map(|t| t.name.chars().count()).max().unwrap_or(0);
    for tag in tags {
        let name = format!("#{}", tag.name);
        let pad = (widest + 1).saturating_sub(visible_len(&name));
        row(&format!(
            " {}{} {}",
            themed(BLUE, &[], &name),
            " ".repeat(pad),
            themed(GREEN, &[], &tag.count.to_string())
        ));
    }
    section_bot();
}

fn print_month(month: &MonthGroup<'_>) {
    row(&format!(" {}", themed(YELLOW, &[BOLD], &month.key)));
    for post in &month.posts {
        row(&format!("   {}  {}", themed(GRAY, &[], &post.date), post.title));
    }
}

pub fn print_archive(years: &[YearGroup<'_>]) {
    if years.is_empty() {
        section_top("ARCHIVE");
        row(&themed(GRAY, &[], " no dated posts"));
        section_bot();
        return;
    }
    for (i, year) in years.iter().enumerate() {
        let label = format!("{} ({} posts)", year.year, year.post_count());
        if i == 0 {
            section_top(&label);
        } else {
            section_mid(&label);
        }
        for month in &year.months {
            print_month(month);
        }
    }
    section_bot();
}

/// "Found N posts" line under the query.
pub fn summary_line(query: &str, count: usize) -> String {
    if query.trim().is_empty() {
        return themed(GRAY, &[], &format!("{} posts", count));
    }
    format!(
        "{} {} {}",
        themed(GRAY, &[], "search"),
        themed(CYAN, &[BOLD], &format!("\"{}\"", query)),
        themed(GRAY, &[], &format!("· found {} results", count))
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
