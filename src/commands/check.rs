// CheckCommand - Expiry check and notification workflow
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

use super::Command;
use crate::config::NotifierConfig;
use crate::expiry::{report, ExpiryNotifier, ExpiryWindow};
use crate::graph::{ClientCredentialsAuth, GraphClient};
use crate::notify::TeamsChannel;
use crate::{Args, Result};
use async_trait::async_trait;
use colored::Colorize;
use tracing::info;

/// CheckCommand runs the whole workflow: authenticate, enumerate
/// applications, collect expiring credentials, deliver the summary card.
///
/// With --dry-run the rendered message is printed instead of posted.
pub struct CheckCommand {
    args: Args,
}

impl CheckCommand {
    /// Create a new CheckCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for CheckCommand {
    async fn execute(&self) -> Result<()> {
        let config = NotifierConfig::resolve(&self.args)?;

        let auth = ClientCredentialsAuth::new(
            config.tenant_id()?,
            config.client_id()?,
            config.client_secret()?,
        );

        info!("Authenticating to Entra ID (client-credentials grant)");
        let directory = GraphClient::connect(&auth).await?;

        let window = ExpiryWindow::starting_now(config.window_days());
        let notifier = ExpiryNotifier::new(&directory, window);

        if self.args.notify.dry_run {
            let findings = notifier.collect_findings().await?;
            println!("{}", report::render_message(window.days(), &findings));
            println!(
                "{} Dry run: {} expiring credentials found, nothing posted",
                "✓".green(),
                findings.len()
            );
            return Ok(());
        }

        let channel = TeamsChannel::new(config.webhook_url()?);
        let outcome = notifier.run(&channel).await?;

        // Delivery failure is reported but does not fail the process
        if outcome.delivered {
            println!(
                "{} Successfully sent message to Teams ({} expiring credentials reported)",
                "✓".green(),
                outcome.findings.len()
            );
        } else {
            println!(
                "{} Failed to send message to Teams: {}",
                "✗".red(),
                outcome.delivery_error.unwrap_or_default()
            );
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "CheckCommand"
    }
}
