// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-based crisis detection.
//!
//! Matches whole words and phrases against a built-in crisis vocabulary,
//! optionally extended from configuration. Matching is case-insensitive and
//! whitespace-normalized, with word boundaries so "suicide" does not fire
//! on unrelated longer words.

use haven_core::{CrisisDetector, HavenError};
use regex::Regex;

/// Built-in crisis keywords and phrases.
///
/// Both the contracted and apostrophe-free spellings of "can't go on" are
/// listed because normalization keeps apostrophes.
pub const BUILTIN_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "harm myself",
    "want to die",
    "i can't go on",
    "i cant go on",
];

/// Lowercase, trim, and collapse runs of whitespace to single spaces.
///
/// Keyword phrases are single-spaced, so multi-space or newline-separated
/// input must be collapsed before matching.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut last_was_space = true;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Word-boundary keyword detector over the built-in list plus any extras
/// from configuration.
pub struct KeywordDetector {
    patterns: Vec<Regex>,
}

impl KeywordDetector {
    /// Build a detector from the built-in keywords only.
    pub fn new() -> Result<Self, HavenError> {
        Self::with_extra_keywords(&[])
    }

    /// Build a detector from the built-in keywords plus configured extras.
    ///
    /// Extras are normalized the same way as incoming messages so that a
    /// config entry like "No Way Out" still matches.
    pub fn with_extra_keywords(extra: &[String]) -> Result<Self, HavenError> {
        let mut patterns = Vec::with_capacity(BUILTIN_KEYWORDS.len() + extra.len());
        for kw in BUILTIN_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .chain(extra.iter().map(|k| normalize(k)))
        {
            if kw.is_empty() {
                continue;
            }
            let pattern = format!(r"\b{}\b", regex::escape(&kw));
            let re = Regex::new(&pattern).map_err(|e| {
                HavenError::Config(format!("invalid crisis keyword `{kw}`: {e}"))
            })?;
            patterns.push(re);
        }
        Ok(Self { patterns })
    }
}

impl CrisisDetector for KeywordDetector {
    fn name(&self) -> &str {
        "keyword"
    }

    fn is_crisis(&self, text: &str) -> bool {
        let normalized = normalize(text);
        self.patterns.iter().any(|re| re.is_match(&normalized))
    }
}
