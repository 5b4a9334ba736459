//! Application state management
//!
//! This module defines the application state shared across all handlers and
//! services: the cache adapter, the queue adapter, and a diagnostic publish
//! counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::{Backend, Config};
use crate::infrastructure::memory::{MemoryQueue, MemoryStore};
use crate::infrastructure::rabbitmq_client::RabbitQueue;
use crate::infrastructure::redis_client::RedisStore;
use crate::infrastructure::{CacheStore, MessageQueue};

/// Global application state
///
/// Cheaply cloneable; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Key-value store behind `/api/redis`
    pub cache: Arc<dyn CacheStore>,

    /// Message queue behind `/rabbitmq`
    pub queue: Arc<dyn MessageQueue>,

    /// Count of successful publishes since startup. Only logged.
    pub messages_published: Arc<AtomicU64>,
}

impl AppState {
    /// Build state from already-constructed adapters
    pub fn new(cache: Arc<dyn CacheStore>, queue: Arc<dyn MessageQueue>) -> Self {
        Self {
            cache,
            queue,
            messages_published: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Connect the adapters selected by `config`
    ///
    /// For the remote backend this opens the Redis connection manager and the
    /// AMQP channel, and declares the durable queue.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        match config.backend {
            Backend::Remote => {
                let cache = RedisStore::connect(&config.redis_url).await?;
                let queue = RabbitQueue::connect(&config.amqp_url, &config.queue_name).await?;
                Ok(Self::new(Arc::new(cache), Arc::new(queue)))
            }
            Backend::Memory => Ok(Self::in_memory()),
        }
    }

    /// State backed by in-process adapters
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(MemoryQueue::new()))
    }

    /// Increment the publish counter and return the new total
    pub fn record_publish(&self) -> u64 {
        self.messages_published.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn published_count(&self) -> u64 {
        self.messages_published.load(Ordering::Relaxed)
    }
}
