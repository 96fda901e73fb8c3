// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pluggable crisis detection predicate.

/// Decides whether a message text indicates a self-harm or mental-health
/// crisis.
///
/// Implementations must be deterministic and side-effect-free: no network,
/// no filesystem, no clocks. The safety check runs before any provider call
/// and must remain safe to run with no network access at all. Swapping the
/// detection strategy (keyword list, classifier) must not touch the request
/// handler.
pub trait CrisisDetector: Send + Sync + 'static {
    /// Returns the human-readable name of this detector.
    fn name(&self) -> &str;

    /// Returns true when the text indicates a crisis.
    fn is_crisis(&self, text: &str) -> bool;
}
