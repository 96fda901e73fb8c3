// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned reply tables for fallback generation.

/// Replies for positive-sentiment messages.
pub const POSITIVE_RESPONSES: &[&str] = &[
    "That's wonderful to hear, keep that energy going! Anything you want to celebrate?",
    "Awesome! I'm glad things are going well. Want to share more?",
    "Great! Celebrating small wins is powerful. Tell me one thing that went well today.",
];

/// Replies for neutral-sentiment messages.
pub const NEUTRAL_RESPONSES: &[&str] = &[
    "I see. Tell me a bit more about what's on your mind.",
    "Okay, would you like a breathing exercise or a quick mood check?",
    "I understand. Want to try a short grounding exercise together?",
];

/// Replies for negative-sentiment messages.
pub const NEGATIVE_RESPONSES: &[&str] = &[
    "I'm sorry you're feeling this way. Would you like a simple breathing exercise or a coping tip?",
    "That sounds tough. I'm here for you. Do you want a grounding exercise or a small distraction?",
    "I'm listening. If you want, we can try a 1-minute breathing exercise together.",
];

/// Coping tips appended to negative-sentiment replies.
pub const COPING_TIPS: &[&str] = &[
    "Try the 4-4-4 breathing: inhale 4s, hold 4s, exhale 4s. Do this for 1-2 minutes.",
    "Take a short walk, even 5-10 minutes. Movement can help reset your mood.",
    "Write down 3 things you did well today. Little wins matter.",
    "Listen to a calming song you like for 5 minutes or try a guided breathing app.",
];

/// Topic tags and the substrings that signal them.
///
/// Substring matching is intentional: "depress" covers "depressed" and
/// "depressing", "sleep" covers "sleeping" and "sleepless".
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("stress", &["stress", "stressed", "overwhelmed"]),
    ("anxiety", &["anxious", "anxiety", "panic", "worry"]),
    ("depressed", &["depress", "sad", "unhappy", "hopeless", "down"]),
    ("sleep", &["insomnia", "sleep", "tired", "sleeping"]),
    ("exam", &["exam", "test", "interview", "deadline"]),
];
