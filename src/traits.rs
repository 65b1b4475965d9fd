use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::telegram::DeliveryResult;

/// Trait for delivering formatted notification text to the chat backend
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Send the message text and report the provider's verdict
    async fn send(&self, text: &str) -> Result<DeliveryResult>;
}
