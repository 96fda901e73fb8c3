// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic fallback reply generation.
//!
//! Picks a canned reply matching the message's sentiment, appending a coping
//! tip on negative messages and topic acknowledgement on neutral ones.
//! Selection hashes the normalized message with FNV-1a, so the same message
//! always gets the same reply. Retried requests stay idempotent and tests
//! stay exact, while different messages still spread across the tables.

use haven_safety::normalize;
use haven_sentiment::Sentiment;

use crate::tables::{
    COPING_TIPS, NEGATIVE_RESPONSES, NEUTRAL_RESPONSES, POSITIVE_RESPONSES, TOPIC_KEYWORDS,
};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over a label and the text. The label separates the reply pick from
/// the tip pick for the same message; the hash itself is stable across
/// processes, unlike `DefaultHasher` which is randomly seeded.
fn fnv1a(label: &str, text: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in label.bytes().chain(text.bytes()) {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Pick an entry from a table by stable hash of the message.
fn pick<'a>(table: &[&'a str], label: &str, text: &str) -> &'a str {
    let idx = (fnv1a(label, text) % table.len() as u64) as usize;
    table[idx]
}

/// Extract topic tags mentioned in a message.
///
/// Substring match over the normalized text, in table order.
pub fn extract_tags(text: &str) -> Vec<&'static str> {
    let normalized = normalize(text);
    TOPIC_KEYWORDS
        .iter()
        .filter(|(_, words)| words.iter().any(|w| normalized.contains(w)))
        .map(|(tag, _)| *tag)
        .collect()
}

/// Generator for local canned replies, used whenever no AI provider reply
/// is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackReplier;

impl FallbackReplier {
    pub fn new() -> Self {
        Self
    }

    /// Compose a reply for a message with the given sentiment label.
    ///
    /// Negative messages get a coping tip appended. Neutral messages that
    /// mention a known topic get the topics acknowledged.
    pub fn reply(&self, text: &str, sentiment: Sentiment) -> String {
        let normalized = normalize(text);

        let base = match sentiment {
            Sentiment::Positive => pick(POSITIVE_RESPONSES, "reply", &normalized),
            Sentiment::Neutral => pick(NEUTRAL_RESPONSES, "reply", &normalized),
            Sentiment::Negative => pick(NEGATIVE_RESPONSES, "reply", &normalized),
        };

        match sentiment {
            Sentiment::Negative => {
                let tip = pick(COPING_TIPS, "tip", &normalized);
                format!("{base} Tip: {tip}")
            }
            Sentiment::Neutral => {
                let tags = extract_tags(text);
                if tags.is_empty() {
                    base.to_string()
                } else {
                    format!(
                        "{base} I noticed you're talking about {}. Want tips related to that?",
                        tags.join(", ")
                    )
                }
            }
            Sentiment::Positive => base.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_message_same_reply() {
        let r = FallbackReplier::new();
        let a = r.reply("i am fine i guess", Sentiment::Neutral);
        let b = r.reply("i am fine i guess", Sentiment::Neutral);
        assert_eq!(a, b);
    }

    #[test]
    fn normalization_does_not_change_the_pick() {
        let r = FallbackReplier::new();
        let a = r.reply("Hello There", Sentiment::Neutral);
        let b = r.reply("  hello   there ", Sentiment::Neutral);
        assert_eq!(a, b);
    }

    #[test]
    fn positive_reply_comes_from_positive_table() {
        let r = FallbackReplier::new();
        let reply = r.reply("today was a great day", Sentiment::Positive);
        assert!(POSITIVE_RESPONSES.contains(&reply.as_str()));
    }

    #[test]
    fn negative_reply_carries_a_coping_tip() {
        let r = FallbackReplier::new();
        let reply = r.reply("i feel sad", Sentiment::Negative);
        assert!(reply.contains(" Tip: "), "got: {reply}");
        assert!(
            NEGATIVE_RESPONSES.iter().any(|base| reply.starts_with(base)),
            "got: {reply}"
        );
        assert!(
            COPING_TIPS.iter().any(|tip| reply.ends_with(tip)),
            "got: {reply}"
        );
    }

    #[test]
    fn neutral_reply_acknowledges_topics() {
        let r = FallbackReplier::new();
        let reply = r.reply("my exam is next week and i cannot sleep", Sentiment::Neutral);
        assert!(
            reply.contains("talking about sleep, exam"),
            "tags should be in table order, got: {reply}"
        );
        assert!(reply.contains("Want tips related to that?"));
    }

    #[test]
    fn neutral_reply_without_topics_is_bare() {
        let r = FallbackReplier::new();
        let reply = r.reply("the weather changed today", Sentiment::Neutral);
        assert!(NEUTRAL_RESPONSES.contains(&reply.as_str()), "got: {reply}");
    }

    #[test]
    fn tags_match_substrings() {
        assert_eq!(extract_tags("feeling depressing lately"), vec!["depressed"]);
        assert_eq!(extract_tags("SLEEPING badly"), vec!["sleep"]);
        assert_eq!(
            extract_tags("stressed about my interview"),
            vec!["stress", "exam"]
        );
        assert!(extract_tags("nothing in particular").is_empty());
    }

    #[test]
    fn different_messages_spread_across_the_table() {
        let r = FallbackReplier::new();
        let picks: std::collections::HashSet<String> = (0..32)
            .map(|i| r.reply(&format!("message number {i}"), Sentiment::Neutral))
            .map(|reply| {
                NEUTRAL_RESPONSES
                    .iter()
                    .find(|base| reply.starts_with(*base))
                    .map(|s| s.to_string())
                    .unwrap_or(reply)
            })
            .collect();
        assert!(picks.len() > 1, "hash should not collapse to one entry");
    }
}
