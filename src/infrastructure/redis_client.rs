use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};

use super::CacheStore;
use crate::error::UpstreamError;

/// Redis-backed [`CacheStore`] using plain `SET`/`GET`
#[derive(Clone)]
pub struct RedisStore {
    conn_manager: ConnectionManager,
}

impl RedisStore {
    pub async fn connect(redis_url: &str) -> Result<Self, UpstreamError> {
        let client = redis::Client::open(redis_url)?;
        let conn_manager = ConnectionManager::new(client).await?;
        tracing::info!(url = %redis_url, "connected to redis");
        Ok(Self { conn_manager })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), UpstreamError> {
        let mut con = self.conn_manager.clone();
        let _: () = con.set(key, value).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, UpstreamError> {
        let mut con = self.conn_manager.clone();
        let value: Option<String> = con.get(key).await?;
        Ok(value)
    }
}
