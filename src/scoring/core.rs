// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a result's score.
//!
//! Every matched value contributes a factor `s^(w * n)` where `s` is the
//! fuzzy score (0 best, 1 worst), `w` the normalized field weight and `n` the
//! value's length norm. The post's score is the product of those factors.
//!
//! Two consequences worth knowing:
//!
//! - More matched values means a smaller product, so a post matching in title
//!   AND summary beats one matching in title only.
//! - Exponents are at most 1 and `s <= 1`, so every factor is in `(0, 1]`.
//!   A heavier field shrinks the product more for the same `s`.
//!
//! # Norm
//!
//! `n = round3(1 / sqrt(tokens))`. A one-word keyword has `n = 1`; a
//! 400-word body has `n = 0.05`. Long values barely move the score, which is
//! what keeps the catch-all `searchableText` field from dominating.

/// Exact zero would zero the whole product and erase every other factor,
/// so it is clamped to this before exponentiation.
pub const ZERO_SCORE_SUBSTITUTE: f64 = f64::EPSILON;

/// Decimal places kept in a field norm.
pub const NORM_MANTISSA: i32 = 3;

/// Length norm for a value with `token_count` space-separated tokens.
pub fn field_norm(token_count: usize) -> f64 {
    let tokens = token_count.max(1) as f64;
    let norm = 1.0 / tokens.sqrt();
    let scale = 10f64.powi(NORM_MANTISSA);
    (norm * scale).round() / scale
}

/// One matched value's contribution to the product.
pub fn field_factor(score: f64, weight: f64, norm: f64) -> f64 {
    let base = if score == 0.0 && weight != 0.0 {
        ZERO_SCORE_SUBSTITUTE
    } else {
        score
    };
    base.powf(weight * norm)
}

/// Running product over a post's matched values.
#[derive(Debug, Clone, Copy)]
pub struct ScoreAccumulator {
    product: f64,
    matched: usize,
}

impl Default for ScoreAccumulator {
    fn default() -> Self {
        ScoreAccumulator {
            product: 1.0,
            matched: 0,
        }
    }
}

impl ScoreAccumulator {
    pub fn add(&mut self, score: f64, weight: f64, norm: f64) {
        self.product *= field_factor(score, weight, norm);
        self.matched += 1;
    }

    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Final score, or `None` if nothing matched.
    pub fn finish(self) -> Option<f64> {
        (self.matched > 0).then_some(self.product)
    }
}
