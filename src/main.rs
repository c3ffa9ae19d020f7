// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use glean::{
    excerpt, featured_posts, group_by_year_and_month, highlight, keyword_chips, load_posts,
    posts_with_tag, tag_counts, ResultCard, Searcher, RESULT_KEYWORD_LIMIT,
};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = cli.tuning.to_options();
    options.validate().context("invalid search options")?;

    match cli.command {
        Commands::Search {
            posts,
            query,
            limit,
            json,
        } => {
            let searcher = Searcher::with_options(load(&posts)?, options);
            let mut results = searcher.browse(&query);
            let total = results.len();
            results.truncate(limit);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            println!("{}", display::summary_line(&query, total));
            println!();
            for (i, result) in results.iter().enumerate() {
                display::print_card(i + 1, &ResultCard::from_result(result, &query));
            }
            if total > results.len() {
                println!(
                    "{}",
                    display::themed(
                        display::GRAY,
                        &[],
                        &format!("… {} more (raise --limit)", total - results.len())
                    )
                );
            }
        }

        Commands::List { posts, json } => {
            let searcher = Searcher::with_options(load(&posts)?, options);
            let results = searcher.list_all();

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            let featured: Vec<&str> = featured_posts(searcher.posts())
                .iter()
                .map(|p| p.slug.as_str())
                .collect();
            for result in &results {
                let post = result.item();
                let mut line = format!(
                    "{}  {}",
                    display::themed(display::GRAY, &[], &post.date),
                    display::themed(display::CYAN, &[display::BOLD], &post.title)
                );
                if featured.contains(&post.slug.as_str()) {
                    line.push_str("  ");
                    line.push_str(&display::featured_badge());
                }
                let chips = keyword_chips(&post.keywords, RESULT_KEYWORD_LIMIT);
                if !chips.shown.is_empty() {
                    line.push_str("  ");
                    line.push_str(&display::plain_keyword_line(&chips));
                }
                println!("{}", line);
            }
        }

        Commands::Tags { posts, tag } => {
            let posts = load(&posts)?;
            match tag {
                Some(tag) => {
                    let tagged = posts_with_tag(&posts, &tag);
                    display::section_top(&format!("#{} ({})", tag, tagged.len()));
                    for post in tagged {
                        display::row(&format!(
                            " {}  {}",
                            display::themed(display::GRAY, &[], &post.date),
                            post.title
                        ));
                    }
                    display::section_bot();
                }
                None => display::print_tag_counts(&tag_counts(&posts)),
            }
        }

        Commands::Archive { posts } => {
            let posts = load(&posts)?;
            display::print_archive(&group_by_year_and_month(&posts));
        }

        Commands::Excerpt {
            posts,
            slug,
            query,
            max_length,
        } => {
            let searcher = Searcher::with_options(load(&posts)?, options);
            let post = searcher
                .get(&slug)
                .with_context(|| format!("no post with slug '{}'", slug))?;
            let text = excerpt(&post.content, &query, max_length);
            println!("{}", display::highlighted(&highlight(&text, &query)));
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<Vec<glean::PostRecord>> {
    let posts = load_posts(path)?;
    tracing::info!(posts = posts.len(), path = %path.display(), "corpus loaded");
    Ok(posts)
}
