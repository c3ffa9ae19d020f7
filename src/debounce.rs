// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keystroke debouncing for interactive search.
//!
//! The search core never waits. This is the caller-side policy that decides
//! WHEN to call `search`: only after input has been quiet for `delay`. Time
//! is passed in rather than read from the clock, so a UI loop drives it with
//! `Instant::now()` and tests drive it with fixed instants.

use std::time::{Duration, Instant};

/// Quiet period before a query fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
    settled: String,
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: None,
            settled: String::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record the current input. Restarts the quiet period.
    pub fn input(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some((query.into(), now));
    }

    /// The query to run, once the quiet period has elapsed. Each input fires
    /// at most once.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let ready = matches!(
            &self.pending,
            Some((_, at)) if now.saturating_duration_since(*at) >= self.delay
        );
        if !ready {
            return None;
        }
        let (query, _) = self.pending.take()?;
        self.settled.clone_from(&query);
        Some(query)
    }

    /// True while input is waiting out the quiet period and differs from the
    /// last query that fired. Drives the "searching" indicator.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|(query, _)| *query != self.settled)
    }

    /// The last query that fired.
    pub fn settled(&self) -> &str {
        &self.settled
    }
}
