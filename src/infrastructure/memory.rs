//! In-process adapters
//!
//! Used by the test suite and by `--backend memory`, which serves the same
//! HTTP surface without a Redis server or a broker.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::rabbitmq_client::DEFAULT_QUEUE_NAME;
use super::{CacheStore, MessageQueue};
use crate::error::UpstreamError;

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), UpstreamError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, UpstreamError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }
}

/// FIFO queue with the same fetch-and-remove read as the broker adapter
pub struct MemoryQueue {
    queue_name: String,
    messages: Mutex<VecDeque<String>>,
}

impl MemoryQueue {
    pub fn new() -> Self {
        Self::named(DEFAULT_QUEUE_NAME)
    }

    pub fn named(queue_name: &str) -> Self {
        Self {
            queue_name: queue_name.to_string(),
            messages: Mutex::new(VecDeque::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.messages.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.messages.lock().await.is_empty()
    }
}

impl Default for MemoryQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageQueue for MemoryQueue {
    fn queue_name(&self) -> &str {
        &self.queue_name
    }

    async fn publish(&self, message: &str) -> Result<(), UpstreamError> {
        self.messages.lock().await.push_back(message.to_string());
        Ok(())
    }

    async fn receive_one(&self) -> Result<Option<String>, UpstreamError> {
        Ok(self.messages.lock().await.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_overwrites_and_misses() {
        let store = MemoryStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.get("a").await.unwrap(), None);

        store.set("a", "1").await.unwrap();
        store.set("a", "2").await.unwrap();

        assert_eq!(store.get("a").await.unwrap(), Some("2".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_queue_is_fifo_and_drains() {
        let queue = MemoryQueue::new();
        assert_eq!(queue.queue_name(), "filaTeste");

        queue.publish("first").await.unwrap();
        queue.publish("second").await.unwrap();
        assert_eq!(queue.len().await, 2);

        assert_eq!(queue.receive_one().await.unwrap(), Some("first".to_string()));
        assert_eq!(queue.receive_one().await.unwrap(), Some("second".to_string()));
        assert_eq!(queue.receive_one().await.unwrap(), None);
    }
}
