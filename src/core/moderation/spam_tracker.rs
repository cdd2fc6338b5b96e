// Repeated-message spam tracker.
//
// Keeps a trailing window of each user's recent message texts and counts
// exact repeats. The window is per-user and deliberately spans channels.
// Time is passed in by the caller so the logic is deterministic under test.

use super::moderation_models::{SpamEntry, SpamVerdict, SPAM_WINDOW_SECS};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

/// Per-user sliding window of recent messages. Growth is bounded by the
/// time-based trim, not by an entry cap.
#[derive(Default)]
pub struct SpamTracker {
    windows: DashMap<u64, Vec<SpamEntry>>,
}

impl SpamTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message and report how many times its text now appears in
    /// the user's trimmed window.
    ///
    /// Entries strictly older than the window (`now - t > 4s`) are dropped
    /// first, then the current message is appended and counted along with
    /// the survivors.
    pub fn observe(&self, user_id: u64, content_lower: &str, now: DateTime<Utc>) -> SpamVerdict {
        let horizon = Duration::seconds(SPAM_WINDOW_SECS);
        let mut window = self.windows.entry(user_id).or_default();

        window.retain(|entry| now - entry.timestamp <= horizon);
        window.push(SpamEntry {
            content: content_lower.to_string(),
            timestamp: now,
        });

        let count = window
            .iter()
            .filter(|entry| entry.content == content_lower)
            .count();

        SpamVerdict::from_count(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_third_repeat_within_window_is_spam() {
        let tracker = SpamTracker::new();

        assert!(!tracker.observe(1, "hello", at(0)).is_spam);
        assert!(!tracker.observe(1, "hello", at(1)).is_spam);

        let verdict = tracker.observe(1, "hello", at(2));
        assert!(verdict.is_spam);
        assert_eq!(verdict.count, 3);
    }

    #[test]
    fn test_old_entries_age_out_but_window_can_refill() {
        let tracker = SpamTracker::new();
        tracker.observe(1, "hello", at(0));
        tracker.observe(1, "hello", at(1));
        tracker.observe(1, "hello", at(2));

        // At t=5 the t=0 entry is gone (5 - 0 > 4) but t=1 and t=2 remain,
        // so the fourth message still lands on count 3.
        let verdict = tracker.observe(1, "hello", at(5));
        assert_eq!(verdict.count, 3);
        assert!(verdict.is_spam);
    }

    #[test]
    fn test_gap_longer_than_window_resets_the_count() {
        let tracker = SpamTracker::new();
        tracker.observe(1, "hello", at(0));
        tracker.observe(1, "hello", at(1));

        let verdict = tracker.observe(1, "hello", at(10));
        assert_eq!(verdict.count, 1);
        assert!(!verdict.is_spam);
    }

    #[test]
    fn test_entry_exactly_at_horizon_is_kept() {
        let tracker = SpamTracker::new();
        tracker.observe(1, "hello", at(0));
        tracker.observe(1, "hello", at(1));

        // 4 - 0 == 4s is not strictly older than the window.
        let verdict = tracker.observe(1, "hello", at(4));
        assert_eq!(verdict.count, 3);
        assert!(verdict.is_spam);
    }

    #[test]
    fn test_different_texts_do_not_count_together() {
        let tracker = SpamTracker::new();
        tracker.observe(1, "hello", at(0));
        tracker.observe(1, "world", at(1));

        let verdict = tracker.observe(1, "hello", at(2));
        assert_eq!(verdict.count, 2);
        assert!(!verdict.is_spam);
    }

    #[test]
    fn test_windows_are_per_user() {
        let tracker = SpamTracker::new();
        tracker.observe(1, "hello", at(0));
        tracker.observe(2, "hello", at(0));
        tracker.observe(1, "hello", at(1));
        tracker.observe(2, "hello", at(1));

        // Each user only sees their own three repeats.
        assert!(tracker.observe(1, "hello", at(2)).is_spam);
        assert!(tracker.observe(2, "hello", at(2)).is_spam);
    }
}
