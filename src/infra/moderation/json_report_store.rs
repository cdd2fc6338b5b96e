use crate::core::moderation::{ReportChannelStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// JSON-backed report-channel store. Persists the whole mapping in a single
/// file as an object: { guild_id: channel_id } (serde_json writes the u64
/// keys as strings).
///
/// A missing file means no guild is configured yet; a file that exists but
/// fails to parse aborts startup rather than silently dropping someone's
/// configuration.
pub struct JsonReportChannelStore {
    path: PathBuf,
    cache: RwLock<HashMap<u64, u64>>,
}

impl JsonReportChannelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache: HashMap<u64, u64> = if path.exists() {
            let file = File::open(&path).expect("Failed to open report channel config");
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).expect("Failed to parse report channel config")
        } else {
            HashMap::new()
        };

        Self {
            path,
            cache: RwLock::new(cache),
        }
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let cache = self.cache.read().await;
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, &*cache)?;
        Ok(())
    }
}

#[async_trait]
impl ReportChannelStore for JsonReportChannelStore {
    async fn get_channel(&self, guild_id: u64) -> Result<Option<u64>, StoreError> {
        let cache = self.cache.read().await;
        Ok(cache.get(&guild_id).copied())
    }

    async fn set_channel(&self, guild_id: u64, channel_id: u64) -> Result<(), StoreError> {
        let mut cache = self.cache.write().await;
        cache.insert(guild_id, channel_id);
        drop(cache); // Release lock before persisting
        self.persist().await
    }
}
