// Microsoft Graph directory client
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

pub mod auth;
pub mod client;
pub mod types;

pub use auth::{ClientCredentialsAuth, TokenProvider};
pub use client::{DirectoryReader, GraphClient};
pub use types::{Application, CollectionResponse, CredentialRecord};
