// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! The defaults are the blog's tuned values and are what every caller gets
//! unless it explicitly deserializes or builds something else. The CLI
//! exposes `threshold` and `min_match_char_length` as flags.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::FieldKey;

/// Default matching tolerance: 0 is exact, 1 matches anything.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Substrings shorter than this never count as a match.
pub const DEFAULT_MIN_MATCH_CHAR_LENGTH: usize = 2;

/// Relative importance of each field. Normalized to sum to 1 at index time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldWeights {
    pub title: f64,
    pub summary: f64,
    pub keywords: f64,
    pub searchable_text: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            title: 0.4,
            summary: 0.3,
            keywords: 0.2,
            searchable_text: 0.1,
        }
    }
}

impl FieldWeights {
    pub fn get(&self, key: FieldKey) -> f64 {
        match key {
            FieldKey::Title => self.title,
            FieldKey::Summary => self.summary,
            FieldKey::Keywords => self.keywords,
            FieldKey::SearchableText => self.searchable_text,
        }
    }

    fn total(&self) -> f64 {
        FieldKey::ALL.iter().map(|&key| self.get(key)).sum()
    }

    /// Scale weights so they sum to 1.
    pub fn normalized(&self) -> FieldWeights {
        let total = self.total();
        if total <= 0.0 {
            return *self;
        }
        FieldWeights {
            title: self.title / total,
            summary: self.summary / total,
            keywords: self.keywords / total,
            searchable_text: self.searchable_text / total,
        }
    }
}

/// Everything that tunes matching and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    pub weights: FieldWeights,
    pub threshold: f64,
    pub min_match_char_length: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            weights: FieldWeights::default(),
            threshold: DEFAULT_THRESHOLD,
            min_match_char_length: DEFAULT_MIN_MATCH_CHAR_LENGTH,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("threshold must be within 0..=1, got {0}")]
    ThresholdOutOfRange(f64),
    #[error("min match length must be at least 1")]
    ZeroMinMatchLength,
    #[error("field weight for {field} must be finite and non-negative, got {weight}")]
    InvalidWeight { field: &'static str, weight: f64 },
    #[error("at least one field weight must be positive")]
    AllWeightsZero,
}

impl SearchOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(OptionsError::ThresholdOutOfRange(self.threshold));
        }
        if self.min_match_char_length == 0 {
            return Err(OptionsError::ZeroMinMatchLength);
        }
        for key in FieldKey::ALL {
            let weight = self.weights.get(key);
            if !weight.is_finite() || weight < 0.0 {
                return Err(OptionsError::InvalidWeight {
                    field: key.as_str(),
                    weight,
                });
            }
        }
        if self.weights.total() <= 0.0 {
            return Err(OptionsError::AllWeightsZero);
        }
        Ok(())
    }
}
