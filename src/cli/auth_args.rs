// Entra ID authentication arguments
// Copyright (C) 2026 CredWatch Team
// Licensed under GPL-3.0

use clap::Args;

/// Entra ID (Azure AD) client-credentials authentication options
///
/// The app registration behind these credentials needs Application-type
/// (not Delegated) Graph permissions: Application.Read.All and
/// Directory.Read.All. No redirect URI is needed; the client-credentials
/// grant is server-to-server with no user interaction.
#[derive(Args, Debug, Clone, Default)]
pub struct AuthArgs {
    /// Entra ID tenant identifier
    #[arg(long = "tenant-id", value_name = "ID", env = "CREDWATCH_TENANT_ID")]
    pub tenant_id: Option<String>,

    /// App registration client identifier
    #[arg(long = "client-id", value_name = "ID", env = "CREDWATCH_CLIENT_ID")]
    pub client_id: Option<String>,

    /// App registration client secret
    #[arg(
        long = "client-secret",
        value_name = "SECRET",
        env = "CREDWATCH_CLIENT_SECRET",
        hide_env_values = true
    )]
    pub client_secret: Option<String>,
}
