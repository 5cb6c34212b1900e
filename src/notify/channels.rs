// Notification Channel Trait

use crate::Result;
use async_trait::async_trait;

/// Notification channel trait - implement this for custom channels
#[async_trait]
pub trait AlertChannel: Send + Sync {
    /// Deliver a message body through this channel (single attempt, no retry)
    async fn send(&self, text: &str) -> Result<()>;

    /// Get the channel name for logging
    fn channel_name(&self) -> &str;

    /// Test the channel connectivity (optional)
    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }
}
