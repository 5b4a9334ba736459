//! Infrastructure layer
//!
//! Adapters over the external cache and broker. Services only see the
//! [`CacheStore`] and [`MessageQueue`] traits; the concrete clients live in
//! the submodules.

use async_trait::async_trait;

use crate::error::UpstreamError;

pub mod memory;
pub mod rabbitmq_client;
pub mod redis_client;

/// Key-value cache adapter
#[async_trait]
pub trait CacheStore: Send + Sync + 'static {
    /// Store `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), UpstreamError>;

    /// Fetch the value under `key`. `None` when the key is absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, UpstreamError>;
}

/// Single-queue message adapter
#[async_trait]
pub trait MessageQueue: Send + Sync + 'static {
    /// Name of the queue this adapter publishes to and reads from.
    fn queue_name(&self) -> &str;

    /// Push one message onto the queue.
    async fn publish(&self, message: &str) -> Result<(), UpstreamError>;

    /// Take one message off the queue without waiting. `None` when empty.
    async fn receive_one(&self) -> Result<Option<String>, UpstreamError>;
}
