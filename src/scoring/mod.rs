// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! Lower is better throughout. A score of 0 means some value was identical to
//! the query; anything that merely contains the query scores above that.

mod core;
pub mod ranking;

pub use core::*;
