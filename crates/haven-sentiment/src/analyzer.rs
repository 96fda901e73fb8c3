// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based sentiment scoring.
//!
//! Scores messages with a valence lexicon plus negation and intensifier
//! handling. No model download, no network, no latency. The compound score
//! uses the VADER normalization `x / sqrt(x^2 + alpha)` so it stays in
//! [-1.0, 1.0] regardless of message length.

use std::collections::HashMap;

use strum::{Display, EnumString};

use crate::lexicon::{BOOSTERS, LEXICON, NEGATORS};

/// Compound score at or above which a message reads as positive.
pub const POSITIVE_THRESHOLD: f32 = 0.05;

/// Compound score at or below which a message reads as negative.
pub const NEGATIVE_THRESHOLD: f32 = -0.05;

/// Normalization constant from VADER. Maps the raw valence sum into
/// [-1.0, 1.0] with a reasonable slope for short chat messages.
const NORMALIZATION_ALPHA: f32 = 15.0;

/// Multiplier for a negated valence word. Flips the sign and dampens,
/// since "not happy" is negative but weaker than "sad".
const NEGATION_DAMPING: f32 = -0.74;

/// How many tokens before a valence word to scan for a negation.
const NEGATION_WINDOW: usize = 3;

/// Coarse sentiment label derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Map a compound score to a label using the +-0.05 thresholds.
    pub fn from_compound(compound: f32) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Lexicon-based sentiment analyzer.
///
/// Construction builds the lookup tables once; `compound` and `sentiment`
/// are then allocation-light and deterministic.
pub struct SentimentAnalyzer {
    lexicon: HashMap<&'static str, f32>,
    boosters: HashMap<&'static str, f32>,
}

impl SentimentAnalyzer {
    /// Create an analyzer with the embedded lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
        }
    }

    /// Score a message. Returns the compound score in [-1.0, 1.0].
    pub fn compound(&self, text: &str) -> f32 {
        let tokens = tokenize(text);
        let mut sum = 0.0f32;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.lexicon.get(token.as_str()) else {
                continue;
            };
            let mut valence = base;

            // Intensifier directly before the word scales it away from or
            // toward zero.
            if i > 0 {
                if let Some(&boost) = self.boosters.get(tokens[i - 1].as_str()) {
                    valence += if valence > 0.0 { boost } else { -boost };
                }
            }

            // Negation anywhere in the preceding window flips and dampens.
            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i]
                .iter()
                .any(|t| NEGATORS.contains(&t.as_str()))
            {
                valence *= NEGATION_DAMPING;
            }

            sum += valence;
        }

        normalize(sum)
    }

    /// Score a message and return its coarse label.
    pub fn sentiment(&self, text: &str) -> Sentiment {
        Sentiment::from_compound(self.compound(text))
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase and split into word tokens, keeping in-word apostrophes so
/// contractions like "can't" survive.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric() || *c == '\'')
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// VADER-style normalization into [-1.0, 1.0].
fn normalize(sum: f32) -> f32 {
    let norm = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}
