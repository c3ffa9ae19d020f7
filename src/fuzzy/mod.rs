// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance for a whole query against one field value.
//!
//! Bitap (shift-and) with error levels. The query is a single pattern, not a
//! bag of terms: "rust async" matches text containing roughly that phrase.
//! Location inside the value is ignored, so the score depends only on how
//! many edits the best alignment needed.

mod bitap;

pub use bitap::*;
