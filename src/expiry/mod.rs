// Expiry workflow - collect expiring credentials and notify
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

pub mod report;
pub mod timestamp;

use crate::graph::types::{Application, CredentialRecord};
use crate::graph::DirectoryReader;
use crate::notify::AlertChannel;
use crate::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{error, info, warn};

/// Kind of credential owned by an application registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialKind {
    Secret,
    Certificate,
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialKind::Secret => write!(f, "secret"),
            CredentialKind::Certificate => write!(f, "certificate"),
        }
    }
}

/// One expiring credential, collected during the run and rendered at the end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub app_name: String,
    pub app_id: String,
    pub kind: CredentialKind,
    pub expires_at: DateTime<Utc>,
    pub days_left: i64,
}

/// Look-ahead window, inclusive at both ends
#[derive(Debug, Clone, Copy)]
pub struct ExpiryWindow {
    now: DateTime<Utc>,
    look_ahead: Duration,
}

impl ExpiryWindow {
    /// Window anchored at an explicit "now" (tests use this)
    pub fn new(now: DateTime<Utc>, days: i64) -> Self {
        Self {
            now,
            look_ahead: Duration::days(days),
        }
    }

    /// Window anchored at the current UTC time
    pub fn starting_now(days: i64) -> Self {
        Self::new(Utc::now(), days)
    }

    /// True iff `now <= expiry <= now + window`
    pub fn contains(&self, expiry: DateTime<Utc>) -> bool {
        self.now <= expiry && expiry <= self.now + self.look_ahead
    }

    /// Whole days until expiry, truncated toward zero
    pub fn days_left(&self, expiry: DateTime<Utc>) -> i64 {
        (expiry - self.now).num_days()
    }

    pub fn days(&self) -> i64 {
        self.look_ahead.num_days()
    }
}

/// Outcome of a full notifier run
#[derive(Debug)]
pub struct RunReport {
    pub findings: Vec<Finding>,
    pub delivered: bool,
    pub delivery_error: Option<String>,
}

/// The whole workflow: list applications, collect expiring credentials,
/// render one message, deliver it.
///
/// Takes the directory as a trait object so tests run against in-memory
/// fakes instead of the Graph API.
pub struct ExpiryNotifier<'a> {
    directory: &'a dyn DirectoryReader,
    window: ExpiryWindow,
}

impl<'a> ExpiryNotifier<'a> {
    pub fn new(directory: &'a dyn DirectoryReader, window: ExpiryWindow) -> Self {
        Self { directory, window }
    }

    /// Enumerate applications and collect expiring credentials in list order
    ///
    /// Fatal: application-list failure, unparseable expiry timestamp.
    /// Non-fatal: a single application's credential fetch failure is logged
    /// and that credential set treated as empty; the run continues.
    pub async fn collect_findings(&self) -> Result<Vec<Finding>> {
        let applications = self.directory.list_applications().await?;
        info!("Retrieved {} application registrations", applications.len());

        let mut findings = Vec::new();

        for app in &applications {
            // The two per-application fetches are independent reads
            let (passwords, keys) = tokio::join!(
                self.directory.password_credentials(&app.id),
                self.directory.key_credentials(&app.id),
            );

            let passwords = credentials_or_empty(app, CredentialKind::Secret, passwords);
            let keys = credentials_or_empty(app, CredentialKind::Certificate, keys);

            self.collect_records(app, CredentialKind::Secret, &passwords, &mut findings)?;
            self.collect_records(app, CredentialKind::Certificate, &keys, &mut findings)?;
        }

        Ok(findings)
    }

    fn collect_records(
        &self,
        app: &Application,
        kind: CredentialKind,
        records: &[CredentialRecord],
        findings: &mut Vec<Finding>,
    ) -> Result<()> {
        for record in records {
            let Some(raw) = record.end_date_time.as_deref() else {
                continue;
            };

            let expires_at = timestamp::parse_end_date_time(raw)?;

            if self.window.contains(expires_at) {
                findings.push(Finding {
                    app_name: app.name().to_string(),
                    app_id: app.id.clone(),
                    kind,
                    expires_at,
                    days_left: self.window.days_left(expires_at),
                });
            }
        }

        Ok(())
    }

    /// Run the whole workflow against the given channel
    ///
    /// Delivery failure is reported in the returned [`RunReport`], not as an
    /// error: the process completes normally either way. Any fatal failure
    /// before delivery skips the send entirely.
    pub async fn run(&self, channel: &dyn AlertChannel) -> Result<RunReport> {
        let findings = self.collect_findings().await?;
        let message = report::render_message(self.window.days(), &findings);

        match channel.send(&message).await {
            Ok(()) => {
                info!(
                    "Notification sent via {} ({} expiring credentials)",
                    channel.channel_name(),
                    findings.len()
                );
                Ok(RunReport {
                    findings,
                    delivered: true,
                    delivery_error: None,
                })
            }
            Err(e) => {
                error!(
                    "Failed to send notification via {}: {}",
                    channel.channel_name(),
                    e
                );
                Ok(RunReport {
                    findings,
                    delivered: false,
                    delivery_error: Some(e.to_string()),
                })
            }
        }
    }
}

fn credentials_or_empty(
    app: &Application,
    kind: CredentialKind,
    result: Result<Vec<CredentialRecord>>,
) -> Vec<CredentialRecord> {
    match result {
        Ok(records) => records,
        Err(e) => {
            warn!(
                "Error retrieving {} credentials for {} ({}): {}",
                kind,
                app.name(),
                app.id,
                e
            );
            Vec::new()
        }
    }
}
