// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading a post collection exported by the content pipeline.
//!
//! The file is a JSON array of post records. Fields are trusted as-is: no
//! slug uniqueness check, no date validation.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::types::PostRecord;

/// Parse a JSON array of posts.
pub fn parse_posts(json: &str) -> Result<Vec<PostRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load posts from a JSON file.
pub fn load_posts(path: impl AsRef<Path>) -> Result<Vec<PostRecord>, LoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let posts = parse_posts(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), posts = posts.len(), "loaded posts");
    Ok(posts)
}
