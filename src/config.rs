// Notifier configuration
//
// Configuration layers, later wins: TOML file, then CLI flags / environment
// variables (clap reads CREDWATCH_* vars into Args).

use crate::cli::Args;
use crate::error::CredError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default look-ahead window in days
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

fn default_window_days() -> i64 {
    DEFAULT_WINDOW_DAYS
}

/// Main notifier configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NotifierConfig {
    pub notifier: NotifierSettings,
}

/// Notifier settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierSettings {
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub webhook_url: Option<String>,
    #[serde(default = "default_window_days")]
    pub window_days: i64,
}

impl Default for NotifierSettings {
    fn default() -> Self {
        Self {
            tenant_id: None,
            client_id: None,
            client_secret: None,
            webhook_url: None,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl NotifierConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            anyhow::anyhow!("Failed to read config file {:?}: {}", path.as_ref(), e)
        })?;

        let config: NotifierConfig = toml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse TOML config: {}", e))?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

        fs::write(path.as_ref(), toml_str).map_err(|e| {
            anyhow::anyhow!("Failed to write config file {:?}: {}", path.as_ref(), e)
        })?;

        Ok(())
    }

    /// Write a commented example configuration file
    pub fn create_example<P: AsRef<Path>>(path: P) -> Result<()> {
        let example = r#"# CredWatch configuration
#
# The app registration needs Application-type Graph permissions:
# Application.Read.All and Directory.Read.All.
# Any value here can be overridden by CLI flags or CREDWATCH_* env vars.

[notifier]
tenant_id = "00000000-0000-0000-0000-000000000000"
client_id = "00000000-0000-0000-0000-000000000000"
client_secret = "your-client-secret"
webhook_url = "https://outlook.office.com/webhook/..."
window_days = 30
"#;

        fs::write(path.as_ref(), example).map_err(|e| {
            anyhow::anyhow!("Failed to write config file {:?}: {}", path.as_ref(), e)
        })?;

        Ok(())
    }

    /// Overlay CLI/environment values on top of file values
    pub fn apply_args(&mut self, args: &Args) {
        if args.auth.tenant_id.is_some() {
            self.notifier.tenant_id = args.auth.tenant_id.clone();
        }
        if args.auth.client_id.is_some() {
            self.notifier.client_id = args.auth.client_id.clone();
        }
        if args.auth.client_secret.is_some() {
            self.notifier.client_secret = args.auth.client_secret.clone();
        }
        if args.notify.webhook_url.is_some() {
            self.notifier.webhook_url = args.notify.webhook_url.clone();
        }
        if let Some(days) = args.notify.window_days {
            self.notifier.window_days = days;
        }
    }

    /// Load file config (if any) and overlay CLI/environment values
    pub fn resolve(args: &Args) -> Result<Self> {
        let mut config = if let Some(path) = &args.notify.config {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        config.apply_args(args);
        Ok(config)
    }

    pub fn tenant_id(&self) -> Result<&str> {
        require(&self.notifier.tenant_id, "tenant id", "--tenant-id / CREDWATCH_TENANT_ID")
    }

    pub fn client_id(&self) -> Result<&str> {
        require(&self.notifier.client_id, "client id", "--client-id / CREDWATCH_CLIENT_ID")
    }

    pub fn client_secret(&self) -> Result<&str> {
        require(
            &self.notifier.client_secret,
            "client secret",
            "--client-secret / CREDWATCH_CLIENT_SECRET",
        )
    }

    pub fn webhook_url(&self) -> Result<&str> {
        require(
            &self.notifier.webhook_url,
            "webhook URL",
            "--webhook-url / CREDWATCH_WEBHOOK_URL",
        )
    }

    pub fn window_days(&self) -> i64 {
        self.notifier.window_days
    }
}

fn require<'a>(value: &'a Option<String>, field: &str, hint: &str) -> Result<&'a str> {
    value.as_deref().ok_or_else(|| {
        CredError::ConfigError {
            message: format!("{} is required ({})", field, hint),
        }
        .into()
    })
}
