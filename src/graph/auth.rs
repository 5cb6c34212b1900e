// Entra ID client-credentials authentication

use crate::error::CredError;
use crate::Result;
use async_trait::async_trait;
use tracing::info;

/// Scope requesting the app registration's default Graph permissions
pub const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

const AUTHORITY_BASE: &str = "https://login.microsoftonline.com";

/// Token acquisition seam - production code uses [`ClientCredentialsAuth`],
/// tests substitute a fake
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Acquire a bearer token for the directory API
    async fn access_token(&self) -> Result<String>;
}

/// Acquires tokens via the OAuth2 client-credentials grant (no user
/// interaction, no redirect flow)
pub struct ClientCredentialsAuth {
    tenant_id: String,
    client_id: String,
    client_secret: String,
    client: reqwest::Client,
}

impl ClientCredentialsAuth {
    /// Create a new authenticator for the given tenant and app registration
    pub fn new(tenant_id: &str, client_id: &str, client_secret: &str) -> Self {
        Self {
            tenant_id: tenant_id.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn token_url(&self) -> String {
        format!("{}/{}/oauth2/v2.0/token", AUTHORITY_BASE, self.tenant_id)
    }
}

#[async_trait]
impl TokenProvider for ClientCredentialsAuth {
    async fn access_token(&self) -> Result<String> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", GRAPH_SCOPE),
        ];

        let response = self.client.post(self.token_url()).form(&form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CredError::AuthenticationFailed {
                details: format!("token endpoint returned {}: {}", status, body),
            }
            .into());
        }

        let token_response: serde_json::Value = response.json().await?;

        let access_token = token_response
            .get("access_token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| CredError::AuthenticationFailed {
                details: format!("token response missing access_token: {}", token_response),
            })?
            .to_string();

        info!("Authentication to Entra ID was successful");
        Ok(access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_url_embeds_tenant() {
        let auth = ClientCredentialsAuth::new("my-tenant", "client", "secret");
        assert_eq!(
            auth.token_url(),
            "https://login.microsoftonline.com/my-tenant/oauth2/v2.0/token"
        );
    }

    #[test]
    fn test_graph_scope_is_default_scope() {
        assert!(GRAPH_SCOPE.ends_with("/.default"));
    }
}
