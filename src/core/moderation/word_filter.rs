// Banned-word filter - case-insensitive substring matching against a
// static blocklist loaded at startup.

/// Immutable blocklist. Words are stored lowercase; a reload requires a
/// restart.
pub struct WordFilter {
    words: Vec<String>,
}

impl WordFilter {
    /// Create a filter from the loaded word list. Words are lowercased so
    /// matching stays case-insensitive even if the file slips in mixed case.
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Banned words that appear as substrings of `content_lower`, in
    /// blocklist order. The caller is responsible for lowercasing the
    /// content (it is shared with the spam tracker).
    pub fn matches(&self, content_lower: &str) -> Vec<String> {
        self.words
            .iter()
            .filter(|w| content_lower.contains(w.as_str()))
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(words: &[&str]) -> WordFilter {
        WordFilter::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let filter = filter(&["spamword"]);
        let content = "this is spamword test".to_string();
        assert_eq!(filter.matches(&content), vec!["spamword"]);
    }

    #[test]
    fn test_match_inside_longer_word() {
        let filter = filter(&["bad"]);
        assert_eq!(filter.matches("that was badly done"), vec!["bad"]);
    }

    #[test]
    fn test_results_keep_blocklist_order() {
        let filter = filter(&["zeta", "alpha"]);
        let matches = filter.matches("alpha and zeta are both here");
        assert_eq!(matches, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_empty_blocklist_matches_nothing() {
        let filter = filter(&[]);
        assert!(filter.matches("anything at all").is_empty());
        assert!(filter.is_empty());
    }

    #[test]
    fn test_mixed_case_blocklist_entries_are_normalized() {
        let filter = filter(&["SpamWord"]);
        assert_eq!(filter.matches("contains spamword here"), vec!["spamword"]);
    }

    #[test]
    fn test_clean_message_matches_nothing() {
        let filter = filter(&["spamword", "badword"]);
        assert!(filter.matches("a perfectly fine message").is_empty());
    }
}
