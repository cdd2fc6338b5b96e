// Moderation service - core business logic for banned-word and spam
// reporting.
//
// This service handles:
// - Banned-word matching against the startup blocklist
// - Repeated-message detection over the per-user window
// - Report-channel lookup and updates through the store port
//
// NO Discord dependencies here - just pure domain logic.

use super::moderation_models::ModerationOutcome;
use super::spam_tracker::SpamTracker;
use super::word_filter::WordFilter;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ModerationError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

// ============================================================================
// STORAGE TRAIT (PORT)
// ============================================================================

/// Trait for persisting the guild -> report-channel mapping.
///
/// Following the same pattern as the other stores: implementations own their
/// persistence, the service only sees the port.
#[async_trait]
pub trait ReportChannelStore: Send + Sync {
    /// Report channel configured for a guild, if any.
    async fn get_channel(&self, guild_id: u64) -> Result<Option<u64>, StoreError>;

    /// Set (or replace) the report channel for a guild and persist it.
    async fn set_channel(&self, guild_id: u64, channel_id: u64) -> Result<(), StoreError>;
}

// ============================================================================
// CORE SERVICE
// ============================================================================

/// Moderation service tying the blocklist, the spam windows and the
/// report-channel store together.
pub struct ModerationService<S: ReportChannelStore> {
    words: WordFilter,
    spam: SpamTracker,
    store: S,
}

impl<S: ReportChannelStore> ModerationService<S> {
    pub fn new(words: WordFilter, store: S) -> Self {
        Self {
            words,
            spam: SpamTracker::new(),
            store,
        }
    }

    /// Inspect one incoming message.
    ///
    /// Lowercases the content once, collects the triggered banned words and
    /// feeds the same normalized text into the spam window. Spam tracking
    /// always runs, whether or not a banned word fired.
    pub fn inspect(&self, user_id: u64, content: &str, now: DateTime<Utc>) -> ModerationOutcome {
        let content_lower = content.to_lowercase();
        let triggered_words = self.words.matches(&content_lower);
        let spam = self.spam.observe(user_id, &content_lower, now);

        ModerationOutcome {
            triggered_words,
            spam,
        }
    }

    /// Report channel configured for a guild, if any.
    pub async fn report_channel(&self, guild_id: u64) -> Result<Option<u64>, ModerationError> {
        Ok(self.store.get_channel(guild_id).await?)
    }

    /// Point a guild's reports at a channel and persist the mapping.
    pub async fn set_report_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<(), ModerationError> {
        Ok(self.store.set_channel(guild_id, channel_id).await?)
    }
}

// ============================================================================
// TESTS
// ============================================================================
