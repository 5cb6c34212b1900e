// TestAlertCommand - Webhook connectivity test
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

use super::Command;
use crate::config::NotifierConfig;
use crate::notify::{AlertChannel, TeamsChannel};
use crate::{Args, Result};
use async_trait::async_trait;
use tracing::info;

/// TestAlertCommand posts a fixed test card to the configured webhook
/// and reports the result, without touching the directory API.
pub struct TestAlertCommand {
    args: Args,
}

impl TestAlertCommand {
    /// Create a new TestAlertCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for TestAlertCommand {
    async fn execute(&self) -> Result<()> {
        let config = NotifierConfig::resolve(&self.args)?;
        let channel = TeamsChannel::new(config.webhook_url()?);

        info!("Testing notification channel...");

        println!("\nNotification Channel Test:");
        println!("{}", "=".repeat(60));

        match channel.test_connection().await {
            Ok(()) => println!("  ✓ {} - Success", channel.channel_name()),
            Err(e) => println!("  ✗ {} - Failed: {}", channel.channel_name(), e),
        }
        println!();

        Ok(())
    }

    fn name(&self) -> &'static str {
        "TestAlertCommand"
    }
}
