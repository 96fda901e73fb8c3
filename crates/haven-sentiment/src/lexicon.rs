// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Embedded valence lexicon.
//!
//! A compact word list with VADER-style valence ratings on a roughly
//! -4.0 to +4.0 scale. Covers the vocabulary that shows up in supportive
//! chat: mood words, common intensifiers, and negations.

/// Word valence entries. Positive values are positive sentiment.
pub const LEXICON: &[(&str, f32)] = &[
    // Positive
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("better", 1.9),
    ("calm", 1.3),
    ("celebrate", 2.7),
    ("excited", 2.2),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.3),
    ("great", 3.1),
    ("happy", 2.7),
    ("hopeful", 2.3),
    ("joy", 2.9),
    ("love", 3.2),
    ("loved", 2.9),
    ("nice", 1.8),
    ("proud", 2.2),
    ("relaxed", 1.8),
    ("well", 1.1),
    ("win", 2.8),
    ("wonderful", 2.7),
    // Negative
    ("afraid", -2.2),
    ("alone", -1.0),
    ("angry", -2.3),
    ("anxious", -1.9),
    ("awful", -2.5),
    ("bad", -2.5),
    ("broken", -1.9),
    ("cry", -2.0),
    ("crying", -2.1),
    ("depressed", -2.3),
    ("empty", -1.2),
    ("exhausted", -1.7),
    ("fail", -2.1),
    ("failed", -2.1),
    ("failure", -2.4),
    ("hate", -2.7),
    ("hopeless", -2.0),
    ("horrible", -2.5),
    ("hurt", -2.1),
    ("lonely", -2.0),
    ("lost", -1.3),
    ("miserable", -2.5),
    ("numb", -1.5),
    ("overwhelmed", -1.6),
    ("pain", -2.3),
    ("panic", -2.0),
    ("pointless", -1.9),
    ("sad", -2.1),
    ("scared", -2.2),
    ("stressed", -1.8),
    ("terrible", -2.1),
    ("tired", -1.2),
    ("unhappy", -1.8),
    ("upset", -1.9),
    ("useless", -1.9),
    ("worried", -1.8),
    ("worry", -1.3),
    ("worst", -3.1),
    ("worthless", -2.3),
];

/// Intensifier words and their scalar adjustment. Applied to the valence
/// of the word that follows, scaled by the valence's sign.
pub const BOOSTERS: &[(&str, f32)] = &[
    ("absolutely", 0.293),
    ("barely", -0.293),
    ("extremely", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("slightly", -0.293),
    ("so", 0.293),
    ("somewhat", -0.293),
    ("totally", 0.293),
    ("very", 0.293),
];

/// Negation words. A negation within the three tokens before a valence
/// word flips and dampens its contribution.
pub const NEGATORS: &[&str] = &[
    "cannot", "cant", "can't", "didnt", "didn't", "dont", "don't", "isnt", "isn't", "never", "no",
    "none", "not", "nothing", "wasnt", "wasn't", "wont", "won't",
];
