// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bit-parallel approximate substring matching.
//!
//! Each pattern chunk (at most 32 chars) gets a per-character bitmask. The
//! text is scanned right to left, so when the top bit of the state word is set
//! the current position is the START of an alignment. Error level `e` folds in
//! the previous level's state to allow substitutions, insertions and
//! deletions, Wu-Manber style.
//!
//! Score of an alignment is `errors / chunk_len`. The threshold caps that
//! ratio, which caps the error levels we bother scanning: with the default
//! 0.3 a 3-char query must match exactly and a 10-char query tolerates 3 edits.
//!
//! # Acceptance
//!
//! A chunk matches when both hold:
//! 1. some alignment scores within the threshold, and
//! 2. the text has a run of `min_match_char_length` consecutive characters
//!    that all occur in the chunk.
//!
//! The second check is coarse: it only rejects values where the
//! alignment was assembled from isolated characters.

use std::collections::HashMap;

use crate::options::SearchOptions;
use crate::utils::normalize;

/// Longest chunk the state word can track.
pub const MAX_PATTERN_BITS: usize = 32;

/// Floor for non-identical matches, so an exact substring hit still ranks
/// below a value that IS the query.
pub const MIN_MATCH_SCORE: f64 = 0.001;

/// A query compiled for repeated matching against many values.
#[derive(Debug, Clone)]
pub struct Pattern {
    folded: Vec<char>,
    chunks: Vec<Chunk>,
    threshold: f64,
    min_match_char_length: usize,
}

#[derive(Debug, Clone)]
struct Chunk {
    chars: Vec<char>,
    alphabet: HashMap<char, u64>,
}

impl Chunk {
    fn new(chars: &[char]) -> Self {
        let len = chars.len();
        let mut alphabet: HashMap<char, u64> = HashMap::with_capacity(len);
        for (i, &c) in chars.iter().enumerate() {
            *alphabet.entry(c).or_insert(0) |= 1 << (len - i - 1);
        }
        Chunk {
            chars: chars.to_vec(),
            alphabet,
        }
    }

    fn char_mask(&self, c: Option<&char>) -> u64 {
        c.and_then(|c| self.alphabet.get(c)).copied().unwrap_or(0)
    }
}

/// Outcome of matching one chunk.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ChunkMatch {
    is_match: bool,
    score: f64,
}

impl Pattern {
    /// Compile `query` for matching. The query is lowercased but otherwise
    /// kept verbatim, whitespace included.
    pub fn new(query: &str, threshold: f64, min_match_char_length: usize) -> Self {
        let folded: Vec<char> = normalize(query).chars().collect();
        let chunks = split_chunks(&folded);
        Pattern {
            folded,
            chunks,
            threshold,
            min_match_char_length,
        }
    }

    pub fn from_options(query: &str, options: &SearchOptions) -> Self {
        Pattern::new(query, options.threshold, options.min_match_char_length)
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// Number of chunks the pattern was split into.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Score a lowercased value. `None` means no match.
    ///
    /// A value identical to the pattern scores exactly 0. Everything else
    /// scores at least `MIN_MATCH_SCORE`.
    pub fn score(&self, text: &[char]) -> Option<f64> {
        if self.chunks.is_empty() {
            return None;
        }
        if text == self.folded.as_slice() {
            return Some(0.0);
        }

        let mut total = 0.0;
        let mut any_match = false;
        for chunk in &self.chunks {
            let result = self.match_chunk(text, chunk);
            any_match |= result.is_match;
            total += result.score;
        }

        any_match.then(|| total / self.chunks.len() as f64)
    }

    fn match_chunk(&self, text: &[char], chunk: &Chunk) -> ChunkMatch {
        let pattern_len = chunk.chars.len();
        let text_len = text.len();

        // An exact occurrence pins the threshold to zero: no point looking
        // for sloppier alignments.
        let mut current_threshold = self.threshold;
        if text_len >= pattern_len && text.windows(pattern_len).any(|w| w == chunk.chars.as_slice()) {
            current_threshold = 0.0;
        }

        let accept_bit = 1u64 << (pattern_len - 1);
        // Scan a pattern's length past the end so trailing deletions can land.
        let finish = text_len + pattern_len;
        let mut best_location: Option<usize> = None;
        let mut final_score = 1.0;
        let mut last_state: Vec<u64> = Vec::new();

        for errors in 0..pattern_len {
            let mut state = vec![0u64; finish + 2];
            state[finish + 1] = (1u64 << errors) - 1;

            for j in (1..=finish).rev() {
                let location = j - 1;
                let char_mask = chunk.char_mask(text.get(location));
                state[j] = ((state[j + 1] << 1) | 1) & char_mask;

                if errors > 0 {
                    let prev_next = last_state.get(j + 1).copied().unwrap_or(0);
                    let prev_here = last_state.get(j).copied().unwrap_or(0);
                    state[j] |= ((prev_next | prev_here) << 1) | 1 | prev_next;
                }

                if state[j] & accept_bit != 0 {
                    final_score = errors as f64 / pattern_len as f64;
                    if final_score <= current_threshold {
                        current_threshold = final_score;
                        best_location = Some(location);
                    }
                }
            }

            let next_level = (errors + 1) as f64 / pattern_len as f64;
            if next_level > current_threshold {
                break;
            }
            last_state = state;
        }

        let is_match =
            best_location.is_some() && has_alphabet_run(text, chunk, self.min_match_char_length);

        ChunkMatch {
            is_match,
            score: final_score.max(MIN_MATCH_SCORE),
        }
    }
}

/// Split a pattern into state-word-sized chunks.
///
/// Full chunks first; a leftover tail is replaced by the LAST 32 characters,
/// overlapping the previous chunk, so every chunk is full width.
fn split_chunks(folded: &[char]) -> Vec<Chunk> {
    let len = folded.len();
    if len == 0 {
        return Vec::new();
    }
    if len <= MAX_PATTERN_BITS {
        return vec![Chunk::new(folded)];
    }

    let remainder = len % MAX_PATTERN_BITS;
    let mut chunks: Vec<Chunk> = folded[..len - remainder]
        .chunks(MAX_PATTERN_BITS)
        .map(Chunk::new)
        .collect();
    if remainder > 0 {
        chunks.push(Chunk::new(&folded[len - MAX_PATTERN_BITS..]));
    }
    chunks
}

/// Does the text contain `min_len` consecutive characters drawn from the chunk?
fn has_alphabet_run(text: &[char], chunk: &Chunk, min_len: usize) -> bool {
    let mut run = 0;
    for c in text {
        if chunk.alphabet.contains_key(c) {
            run += 1;
            if run >= min_len {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
