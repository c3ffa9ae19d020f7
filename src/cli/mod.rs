// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the glean command-line interface.
//!
//! Every subcommand reads the same input: a JSON array of post records, as
//! exported by the blog's content pipeline. `search` and `list` can print
//! JSON instead of the themed terminal view for piping into other tools.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use glean::{SearchOptions, DEFAULT_EXCERPT_LENGTH, DEFAULT_MIN_MATCH_CHAR_LENGTH, DEFAULT_THRESHOLD};

#[derive(Parser)]
#[command(
    name = "glean",
    about = "Fuzzy search, highlighting and excerpts for static blog posts",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub tuning: Tuning,

    #[command(subcommand)]
    pub command: Commands,
}

/// Matcher tuning shared by every subcommand.
#[derive(Args)]
pub struct Tuning {
    /// Match tolerance, 0 (exact) to 1 (anything)
    #[arg(long, global = true, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Shortest run of query characters that counts as a match
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_MATCH_CHAR_LENGTH)]
    pub min_match: usize,
}

impl Tuning {
    pub fn to_options(&self) -> SearchOptions {
        SearchOptions {
            threshold: self.threshold,
            min_match_char_length: self.min_match,
            ..SearchOptions::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fuzzy search posts and print ranked results
    Search {
        /// Path to a JSON array of posts
        posts: PathBuf,

        /// Search query (a blank query lists every post)
        query: String,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every post, newest first
    List {
        /// Path to a JSON array of posts
        posts: PathBuf,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every tag with its post count
    Tags {
        /// Path to a JSON array of posts
        posts: PathBuf,

        /// Only list posts carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show posts grouped by year and month
    Archive {
        /// Path to a JSON array of posts
        posts: PathBuf,
    },

    /// Print the excerpt a result card would show for one post
    Excerpt {
        /// Path to a JSON array of posts
        posts: PathBuf,

        /// Slug of the post
        slug: String,

        /// Query to center the excerpt on
        query: String,

        /// Excerpt window in characters
        #[arg(long, default_value_t = DEFAULT_EXCERPT_LENGTH)]
        max_length: usize,
    },
}
