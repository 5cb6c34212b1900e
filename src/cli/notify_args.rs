// Notification and expiry window arguments
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// Notification delivery and expiry window options
#[derive(Args, Debug, Clone, Default)]
pub struct NotifyArgs {
    /// Teams incoming webhook URL
    #[arg(
        long = "webhook-url",
        value_name = "URL",
        env = "CREDWATCH_WEBHOOK_URL"
    )]
    pub webhook_url: Option<String>,

    /// Look-ahead window in days for expiring credentials
    #[arg(long = "window-days", value_name = "DAYS")]
    pub window_days: Option<i64>,

    /// Configuration file (TOML format)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Generate an example configuration file and exit
    #[arg(long = "config-example", value_name = "FILE")]
    pub config_example: Option<PathBuf>,

    /// Send a test card to the webhook instead of running a check
    #[arg(long = "test-alert")]
    pub test_alert: bool,

    /// Run the check but print the message instead of posting it
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}
