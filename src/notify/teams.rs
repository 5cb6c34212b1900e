// Microsoft Teams Channel - Incoming webhook integration

use crate::error::CredError;
use crate::notify::AlertChannel;
use crate::Result;
use async_trait::async_trait;
use serde_json::json;

/// Microsoft Teams incoming-webhook channel
pub struct TeamsChannel {
    webhook_url: String,
    client: reqwest::Client,
}

impl TeamsChannel {
    /// Create new Teams channel
    pub fn new(webhook_url: &str) -> Self {
        Self {
            webhook_url: webhook_url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Wrap a message body in the fixed MessageCard envelope
    fn format_card(&self, text: &str) -> serde_json::Value {
        json!({
            "@type": "MessageCard",
            "@context": "http://schema.org/extensions",
            "text": text,
        })
    }

    async fn post_card(&self, card: &serde_json::Value) -> Result<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(card)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CredError::HttpStatus {
                status: status.as_u16(),
                details: format!("Teams webhook returned {}", body),
            }
            .into());
        }

        Ok(())
    }
}

#[async_trait]
impl AlertChannel for TeamsChannel {
    async fn send(&self, text: &str) -> Result<()> {
        let card = self.format_card(text);
        self.post_card(&card).await
    }

    fn channel_name(&self) -> &str {
        "teams"
    }

    async fn test_connection(&self) -> Result<()> {
        let card = self.format_card(
            "Test message from CredWatch - webhook connection successful!",
        );
        self.post_card(&card).await
    }
}
