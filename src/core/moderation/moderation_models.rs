// Moderation domain models - data structures for the banned-word and
// spam-report system.
//
// These are pure domain types with no Discord dependencies.
// The Discord layer converts these into embeds and message deletions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How far back the repeated-message window reaches, in seconds.
pub const SPAM_WINDOW_SECS: i64 = 4;

/// A message counts as spam when the same text appears strictly more than
/// this many times inside the window (the current message included).
pub const SPAM_REPEAT_THRESHOLD: usize = 2;

/// One entry in a user's recent-message window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpamEntry {
    /// Normalized (lowercased) message text
    pub content: String,
    /// When the message was sent
    pub timestamp: DateTime<Utc>,
}

/// Result of observing a message in the spam window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpamVerdict {
    /// Entries in the trimmed window matching the current text,
    /// current message included
    pub count: usize,
    /// Whether the repeat threshold was exceeded
    pub is_spam: bool,
}

impl SpamVerdict {
    pub fn from_count(count: usize) -> Self {
        Self {
            count,
            is_spam: count > SPAM_REPEAT_THRESHOLD,
        }
    }
}

/// Everything the moderation engine decided about one incoming message.
#[derive(Debug, Clone)]
pub struct ModerationOutcome {
    /// Banned words found in the message, in blocklist order.
    /// Non-empty means the message should be reported and deleted.
    pub triggered_words: Vec<String>,
    /// Spam verdict for this message. Spam is report-only.
    pub spam: SpamVerdict,
}

impl ModerationOutcome {
    pub fn has_banned_words(&self) -> bool {
        !self.triggered_words.is_empty()
    }
}
