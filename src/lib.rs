// CredWatch - Credential expiry monitor for Entra ID app registrations
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

//! CredWatch checks Microsoft Entra ID application registrations for secrets
//! and certificates nearing expiration and posts a summary card to a Microsoft
//! Teams incoming webhook. It authenticates with the OAuth2 client-credentials
//! grant and reads the Graph directory API; one run, one notification.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod expiry;
pub mod graph;
pub mod notify;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::config::NotifierConfig;
pub use crate::error::CredError;

/// Result type for CredWatch operations
pub type Result<T> = anyhow::Result<T>;

/// Error type for CredWatch operations
pub use anyhow::Error;
