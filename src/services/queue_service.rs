//! Queue publish/consume

use crate::error::Result;
use crate::models::message_sent_message;
use crate::state::AppState;

/// Publish a raw text message to the configured queue
pub async fn publish(app_state: &AppState, message: String) -> Result<String> {
    let queue = app_state.queue.queue_name();

    app_state.queue.publish(&message).await?;
    let total = app_state.record_publish();

    tracing::info!(queue = %queue, message = %message, "message published");
    tracing::debug!(total, "messages published since startup");

    Ok(message_sent_message(&message))
}

/// Take one message off the queue, or `None` when it is empty
pub async fn read_one(app_state: &AppState) -> Result<Option<String>> {
    let queue = app_state.queue.queue_name();

    let message = app_state.queue.receive_one().await?;
    match &message {
        Some(m) => tracing::info!(queue = %queue, message = %m, "message read"),
        None => tracing::warn!(queue = %queue, "no message in queue"),
    }

    Ok(message)
}
