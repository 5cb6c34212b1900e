// Graph directory API client

use crate::error::CredError;
use crate::graph::auth::TokenProvider;
use crate::graph::types::{Application, CollectionResponse, CredentialRecord};
use crate::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Graph v1.0 base URL
pub const GRAPH_API_ENDPOINT: &str = "https://graph.microsoft.com/v1.0";

/// Read-only view of the directory's application registrations
///
/// This is the seam between the expiry workflow and the Graph API;
/// tests implement it with in-memory fakes.
#[async_trait]
pub trait DirectoryReader: Send + Sync {
    /// List all application registrations (id + displayName)
    async fn list_applications(&self) -> Result<Vec<Application>>;

    /// List an application's password credentials (secrets)
    async fn password_credentials(&self, app_id: &str) -> Result<Vec<CredentialRecord>>;

    /// List an application's key credentials (certificates)
    async fn key_credentials(&self, app_id: &str) -> Result<Vec<CredentialRecord>>;
}

/// Graph API client carrying a bearer token for the whole run
pub struct GraphClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl GraphClient {
    /// Create a client from an already-acquired token
    pub fn new(token: String) -> Self {
        Self {
            base_url: GRAPH_API_ENDPOINT.to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    /// Acquire a token from the provider and build a client
    ///
    /// Authentication failure is fatal: no directory call is attempted.
    pub async fn connect(auth: &dyn TokenProvider) -> Result<Self> {
        let token = auth.access_token().await?;
        Ok(Self::new(token))
    }

    async fn get_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CredError::HttpStatus {
                status: status.as_u16(),
                details: format!("GET {} failed: {}", path, body),
            }
            .into());
        }

        let collection: CollectionResponse<T> = response.json().await?;
        Ok(collection.value)
    }
}

#[async_trait]
impl DirectoryReader for GraphClient {
    async fn list_applications(&self) -> Result<Vec<Application>> {
        self.get_collection("/applications").await
    }

    async fn password_credentials(&self, app_id: &str) -> Result<Vec<CredentialRecord>> {
        self.get_collection(&format!("/applications/{}/passwordCredentials", app_id))
            .await
    }

    async fn key_credentials(&self, app_id: &str) -> Result<Vec<CredentialRecord>> {
        self.get_collection(&format!("/applications/{}/keyCredentials", app_id))
            .await
    }
}
