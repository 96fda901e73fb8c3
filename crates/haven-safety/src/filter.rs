// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Crisis screening that runs before any reply generation.
//!
//! Combines a pluggable keyword detector with a sentiment despair check.
//! Either signal short-circuits the pipeline into the fixed crisis reply;
//! no message that trips the filter is ever forwarded to a provider.

use haven_core::CrisisDetector;
use tracing::warn;

/// The fixed reply returned for any message that trips the filter.
///
/// Deliberately constant: crisis responses must not vary with provider
/// availability, sentiment nuance, or configuration.
pub const CRISIS_MESSAGE: &str = "I'm really sorry you're feeling this way. If you are in \
     immediate danger or think you might harm yourself, please contact your local emergency \
     services right now. If you can, reach out to someone you trust or a mental health \
     professional. I'm supportive, but not a replacement for professional care.";

/// Which signal tripped the filter. Used for structured logging only;
/// the reply is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrisisSignal {
    /// A crisis keyword or phrase matched.
    Keyword,
    /// The compound sentiment score fell at or below the despair threshold.
    Despair,
}

/// Safety filter combining keyword detection and despair escalation.
pub struct CrisisFilter {
    detector: Box<dyn CrisisDetector>,
    despair_threshold: f32,
}

impl CrisisFilter {
    /// Create a filter around a detector with the given despair threshold.
    ///
    /// The threshold is a compound score in [-1.0, 0.0]; messages scoring at
    /// or below it are treated as a crisis even without a keyword match.
    pub fn new(detector: Box<dyn CrisisDetector>, despair_threshold: f32) -> Self {
        Self {
            detector,
            despair_threshold,
        }
    }

    /// Screen a message. Returns the signal that tripped, or `None` when the
    /// message may proceed to reply generation.
    ///
    /// Keyword detection is checked first so the logged signal names the
    /// stronger evidence when both would fire.
    pub fn screen(&self, text: &str, compound: f32) -> Option<CrisisSignal> {
        if self.detector.is_crisis(text) {
            warn!(detector = self.detector.name(), "crisis keyword detected");
            return Some(CrisisSignal::Keyword);
        }
        if compound <= self.despair_threshold {
            warn!(
                compound,
                threshold = self.despair_threshold,
                "despair threshold reached"
            );
            return Some(CrisisSignal::Despair);
        }
        None
    }
}
