use async_trait::async_trait;
use lapin::{
    BasicProperties, Channel, Connection, ConnectionProperties,
    options::{BasicGetOptions, BasicPublishOptions, QueueDeclareOptions},
    types::FieldTable,
};
use tokio::sync::Mutex;

use super::MessageQueue;
use crate::error::UpstreamError;

pub const DEFAULT_QUEUE_NAME: &str = "filaTeste";

/// Open connection plus the channel used for every call
struct Session {
    connection: Connection,
    channel: Channel,
}

/// RabbitMQ-backed [`MessageQueue`] bound to one durable queue
///
/// Publishes go through the default exchange with the queue name as routing
/// key. Reads use `basic.get` with auto-ack, so a fetched message is removed
/// from the queue immediately.
///
/// The session is reopened on the next call after the broker closes the
/// channel or the connection. A call that fails is not retried.
pub struct RabbitQueue {
    amqp_url: String,
    queue_name: String,
    session: Mutex<Option<Session>>,
}

impl RabbitQueue {
    /// Connect, open a channel and declare the durable queue
    pub async fn connect(amqp_url: &str, queue_name: &str) -> Result<Self, UpstreamError> {
        let queue = Self::lazy(amqp_url, queue_name);
        queue.channel().await?;
        Ok(queue)
    }

    /// Build the adapter without connecting; the first call opens the session
    pub fn lazy(amqp_url: &str, queue_name: &str) -> Self {
        Self {
            amqp_url: amqp_url.to_string(),
            queue_name: queue_name.to_string(),
            session: Mutex::new(None),
        }
    }

    /// Usable channel, reopening the channel or the whole connection if needed
    async fn channel(&self) -> Result<Channel, UpstreamError> {
        let mut session = self.session.lock().await;

        if let Some(current) = session.as_mut() {
            if current.channel.status().connected() {
                return Ok(current.channel.clone());
            }
            if current.connection.status().connected() {
                tracing::warn!(queue = %self.queue_name, "amqp channel closed, reopening");
                current.channel = self.open_channel(&current.connection).await?;
                return Ok(current.channel.clone());
            }
            tracing::warn!(queue = %self.queue_name, "amqp connection closed, reconnecting");
        }

        let connection =
            Connection::connect(&self.amqp_url, ConnectionProperties::default()).await?;
        let channel = self.open_channel(&connection).await?;
        *session = Some(Session {
            connection,
            channel: channel.clone(),
        });

        Ok(channel)
    }

    async fn open_channel(&self, connection: &Connection) -> Result<Channel, UpstreamError> {
        let channel = connection.create_channel().await?;

        channel
            .queue_declare(
                &self.queue_name,
                QueueDeclareOptions {
                    durable: true,
                    ..QueueDeclareOptions::default()
                },
                FieldTable::default(),
            )
            .await?;

        tracing::info!(queue = %self.queue_name, "declared durable queue");
        Ok(channel)
    }
}

#[async_trait]
impl MessageQueue for RabbitQueue {
    fn queue_name(&self) -> &str {
        &self.queue_name
    }

    async fn publish(&self, message: &str) -> Result<(), UpstreamError> {
        self.channel()
            .await?
            .basic_publish(
                "",
                &self.queue_name,
                BasicPublishOptions::default(),
                message.as_bytes(),
                BasicProperties::default().with_content_type("text/plain".into()),
            )
            .await?
            .await?;
        Ok(())
    }

    async fn receive_one(&self) -> Result<Option<String>, UpstreamError> {
        let fetched = self
            .channel()
            .await?
            .basic_get(&self.queue_name, BasicGetOptions { no_ack: true })
            .await?;

        match fetched {
            Some(message) => Ok(Some(String::from_utf8(message.delivery.data)?)),
            None => Ok(None),
        }
    }
}
