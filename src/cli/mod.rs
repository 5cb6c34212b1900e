// CLI module - Command line interface and argument parsing
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

use clap::Parser;

// Sub-modules for organized CLI arguments
mod auth_args;
mod notify_args;
mod output_args;

// Re-export sub-structs
pub use auth_args::AuthArgs;
pub use notify_args::NotifyArgs;
pub use output_args::OutputArgs;

/// CredWatch - Credential expiry monitor for Entra ID app registrations
///
/// The main CLI arguments struct composes domain-specific configuration
/// sub-structs using clap's #[command(flatten)] attribute:
/// - Entra ID authentication (AuthArgs)
/// - Notification and expiry window settings (NotifyArgs)
/// - Output and display settings (OutputArgs)
#[derive(Parser, Debug, Clone, Default)]
#[command(author, about, long_about = None)]
#[command(name = "credwatch")]
#[command(about = "Credential expiry monitor for Entra ID app registrations", long_about = None)]
pub struct Args {
    // ============ Entra ID Authentication ============
    #[command(flatten)]
    pub auth: AuthArgs,

    // ============ Notification and Expiry Window ============
    #[command(flatten)]
    pub notify: NotifyArgs,

    // ============ Output and Display ============
    #[command(flatten)]
    pub output: OutputArgs,

    /// Display version information and exit
    #[arg(long = "version", short = 'V')]
    pub version: bool,
}

impl Args {
    /// Validate CLI arguments for mutual exclusivity and logical consistency
    ///
    /// Returns an error if conflicting flags are used together
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.notify.test_alert && self.notify.dry_run {
            anyhow::bail!(
                "Cannot use --test-alert and --dry-run together. Choose one operational mode."
            );
        }

        if let Some(days) = self.notify.window_days {
            if days < 0 {
                anyhow::bail!("--window-days must be non-negative (got {})", days);
            }
        }

        Ok(())
    }
}
