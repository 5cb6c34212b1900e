// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

//! Expiry Workflow Integration Tests
//!
//! Runs the whole collect-and-notify workflow against in-memory directory
//! and channel fakes (the trait seams exist for exactly this). Covers the
//! window boundaries, failure isolation, and the no-partial-send guarantee.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use credwatch::expiry::{report, ExpiryNotifier, ExpiryWindow};
use credwatch::graph::{Application, CredentialRecord, DirectoryReader};
use credwatch::notify::AlertChannel;
use credwatch::{CredError, Result};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

// ============================================================================
// Fakes
// ============================================================================

#[derive(Default)]
struct FakeDirectory {
    apps: Vec<Application>,
    passwords: HashMap<String, Vec<CredentialRecord>>,
    keys: HashMap<String, Vec<CredentialRecord>>,
    fail_list: bool,
    fail_passwords: HashSet<String>,
    fail_keys: HashSet<String>,
}

impl FakeDirectory {
    fn add_app(&mut self, id: &str, name: Option<&str>) {
        self.apps.push(Application {
            id: id.to_string(),
            display_name: name.map(|s| s.to_string()),
        });
    }

    fn add_secret(&mut self, app_id: &str, end_date_time: &str) {
        self.passwords
            .entry(app_id.to_string())
            .or_default()
            .push(record(end_date_time));
    }

    fn add_certificate(&mut self, app_id: &str, end_date_time: &str) {
        self.keys
            .entry(app_id.to_string())
            .or_default()
            .push(record(end_date_time));
    }
}

fn record(end_date_time: &str) -> CredentialRecord {
    CredentialRecord {
        end_date_time: Some(end_date_time.to_string()),
    }
}

fn fetch_failure(what: &str) -> anyhow::Error {
    CredError::HttpStatus {
        status: 503,
        details: format!("{} unavailable", what),
    }
    .into()
}

#[async_trait]
impl DirectoryReader for FakeDirectory {
    async fn list_applications(&self) -> Result<Vec<Application>> {
        if self.fail_list {
            return Err(fetch_failure("applications"));
        }
        Ok(self.apps.clone())
    }

    async fn password_credentials(&self, app_id: &str) -> Result<Vec<CredentialRecord>> {
        if self.fail_passwords.contains(app_id) {
            return Err(fetch_failure("passwordCredentials"));
        }
        Ok(self.passwords.get(app_id).cloned().unwrap_or_default())
    }

    async fn key_credentials(&self, app_id: &str) -> Result<Vec<CredentialRecord>> {
        if self.fail_keys.contains(app_id) {
            return Err(fetch_failure("keyCredentials"));
        }
        Ok(self.keys.get(app_id).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
struct RecordingChannel {
    sent: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingChannel {
    fn sent_messages(&self) -> Vec<String> {
        self.sent.lock().expect("channel lock").clone()
    }
}

#[async_trait]
impl AlertChannel for RecordingChannel {
    async fn send(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(fetch_failure("webhook"));
        }
        self.sent.lock().expect("channel lock").push(text.to_string());
        Ok(())
    }

    fn channel_name(&self) -> &str {
        "recording"
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

fn window() -> ExpiryWindow {
    ExpiryWindow::new(now(), 30)
}

fn stamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

// ============================================================================
// Collection Tests
// ============================================================================

#[tokio::test]
async fn test_two_apps_one_finding() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", Some("Payroll API"));
    directory.add_app("app-2", Some("Dormant App"));
    directory.add_secret("app-1", &stamp(now() + Duration::days(10)));

    let notifier = ExpiryNotifier::new(&directory, window());
    let findings = notifier.collect_findings().await.unwrap();

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].app_name, "Payroll API");
    assert_eq!(findings[0].app_id, "app-1");
    assert_eq!(findings[0].days_left, 10);

    // The app with no credentials contributes nothing to the message
    let message = report::render_message(30, &findings);
    assert_eq!(message.matches("- **App**:").count(), 1);
    assert!(!message.contains("Dormant App"));
}

#[tokio::test]
async fn test_boundary_at_now_included() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", Some("Edge"));
    directory.add_secret("app-1", &stamp(now()));

    let notifier = ExpiryNotifier::new(&directory, window());
    let findings = notifier.collect_findings().await.unwrap();

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].days_left, 0);
}

#[tokio::test]
async fn test_boundary_at_window_end_included() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", Some("Edge"));
    directory.add_secret("app-1", &stamp(now() + Duration::days(30)));

    let notifier = ExpiryNotifier::new(&directory, window());
    let findings = notifier.collect_findings().await.unwrap();

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].days_left, 30);
}

#[tokio::test]
async fn test_one_second_past_window_excluded() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", Some("Edge"));
    directory.add_secret(
        "app-1",
        &stamp(now() + Duration::days(30) + Duration::seconds(1)),
    );

    let notifier = ExpiryNotifier::new(&directory, window());
    assert!(notifier.collect_findings().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_already_expired_excluded() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", Some("Stale"));
    directory.add_secret("app-1", &stamp(now() - Duration::seconds(1)));

    let notifier = ExpiryNotifier::new(&directory, window());
    assert!(notifier.collect_findings().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_days_left_always_within_window() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", Some("Spread"));
    for offset in [0, 1, 7, 15, 29, 30] {
        directory.add_secret("app-1", &stamp(now() + Duration::days(offset)));
    }

    let notifier = ExpiryNotifier::new(&directory, window());
    let findings = notifier.collect_findings().await.unwrap();

    assert_eq!(findings.len(), 6);
    for finding in &findings {
        assert!((0..=30).contains(&finding.days_left));
    }
}

#[tokio::test]
async fn test_both_credential_kinds_collected() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", Some("Mixed"));
    directory.add_secret("app-1", &stamp(now() + Duration::days(5)));
    directory.add_certificate("app-1", &stamp(now() + Duration::days(6)));

    let notifier = ExpiryNotifier::new(&directory, window());
    let findings = notifier.collect_findings().await.unwrap();
    let message = report::render_message(30, &findings);

    assert_eq!(findings.len(), 2);
    assert!(message.contains("has a secret that expires in **5 days**."));
    assert!(message.contains("has a certificate that expires in **6 days**."));
}

#[tokio::test]
async fn test_credential_without_end_date_skipped() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", Some("NoDate"));
    directory
        .passwords
        .entry("app-1".to_string())
        .or_default()
        .push(CredentialRecord {
            end_date_time: None,
        });

    let notifier = ExpiryNotifier::new(&directory, window());
    assert!(notifier.collect_findings().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unnamed_app_gets_placeholder() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", None);
    directory.add_secret("app-1", &stamp(now() + Duration::days(3)));

    let notifier = ExpiryNotifier::new(&directory, window());
    let findings = notifier.collect_findings().await.unwrap();

    assert_eq!(findings[0].app_name, "No name provided");
}

// ============================================================================
// Failure Handling Tests
// ============================================================================

#[tokio::test]
async fn test_per_app_fetch_failure_is_isolated() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", Some("Broken"));
    directory.add_app("app-2", Some("Healthy"));
    directory.fail_passwords.insert("app-1".to_string());
    directory.fail_keys.insert("app-1".to_string());
    directory.add_secret("app-2", &stamp(now() + Duration::days(10)));

    let notifier = ExpiryNotifier::new(&directory, window());
    let findings = notifier.collect_findings().await.unwrap();

    // The later application's findings survive the earlier failure
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].app_name, "Healthy");
}

#[tokio::test]
async fn test_list_failure_sends_nothing() {
    let directory = FakeDirectory {
        fail_list: true,
        ..FakeDirectory::default()
    };
    let channel = RecordingChannel::default();

    let notifier = ExpiryNotifier::new(&directory, window());
    let result = notifier.run(&channel).await;

    assert!(result.is_err());
    assert!(channel.sent_messages().is_empty());
}

#[tokio::test]
async fn test_malformed_timestamp_aborts_run() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", Some("BadClock"));
    directory.add_secret("app-1", "never-expires");

    let channel = RecordingChannel::default();
    let notifier = ExpiryNotifier::new(&directory, window());
    let result = notifier.run(&channel).await;

    let err = result.expect_err("malformed timestamp must abort");
    assert!(err.to_string().contains("never-expires"));
    assert!(channel.sent_messages().is_empty());
}

#[tokio::test]
async fn test_delivery_failure_is_reported_not_fatal() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", Some("Payroll API"));
    directory.add_secret("app-1", &stamp(now() + Duration::days(10)));

    let channel = RecordingChannel {
        fail: true,
        ..RecordingChannel::default()
    };

    let notifier = ExpiryNotifier::new(&directory, window());
    let outcome = notifier.run(&channel).await.unwrap();

    assert!(!outcome.delivered);
    assert!(outcome.delivery_error.is_some());
    assert_eq!(outcome.findings.len(), 1);
}

// ============================================================================
// Delivery Tests
// ============================================================================

#[tokio::test]
async fn test_successful_run_posts_one_message() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", Some("Payroll API"));
    directory.add_secret("app-1", &stamp(now() + Duration::days(10)));

    let channel = RecordingChannel::default();
    let notifier = ExpiryNotifier::new(&directory, window());
    let outcome = notifier.run(&channel).await.unwrap();

    assert!(outcome.delivered);
    let messages = channel.sent_messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Payroll API (app-1)"));
    assert!(messages[0].contains("**10 days**"));
}

#[tokio::test]
async fn test_empty_run_still_posts_header_card() {
    let mut directory = FakeDirectory::default();
    directory.add_app("app-1", Some("Quiet App"));

    let channel = RecordingChannel::default();
    let notifier = ExpiryNotifier::new(&directory, window());
    let outcome = notifier.run(&channel).await.unwrap();

    assert!(outcome.delivered);
    assert!(outcome.findings.is_empty());

    let messages = channel.sent_messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Applications with expiring secrets or certificates"));
    assert!(!messages[0].contains("- **App**:"));
}
