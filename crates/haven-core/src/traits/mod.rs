// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seam traits for the Haven pipeline.

pub mod detector;
pub mod provider;

pub use detector::CrisisDetector;
pub use provider::CompletionProvider;
