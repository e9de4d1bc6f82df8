//! HTTP client handle for the Graph API.

use reqwest::{Client as ReqwestClient, Response};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::errors::GraphApiError;
use crate::domain::ports::AccessToken;

/// Default base URL for Graph API requests.
pub const GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// A provisioned Graph API client bound to one identity's bearer token.
///
/// Handles are handed out by the cache for the duration of a single action;
/// the underlying `reqwest::Client` is shared across all handles for
/// connection reuse, while the token is per-identity.
pub struct GraphClient {
    http_client: ReqwestClient,
    base_url: String,
    token: AccessToken,
}

impl GraphClient {
    pub(crate) fn new(http_client: ReqwestClient, base_url: String, token: AccessToken) -> Self {
        Self {
            http_client,
            base_url,
            token,
        }
    }

    /// Base URL this client issues requests against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a resource path (e.g. `me` or `users/{id}/messages`) and parse
    /// the JSON response body.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get_json(&self, path: &str) -> Result<Value, GraphApiError> {
        let url = join_url(&self.base_url, path);

        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.token.secret)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Check status and convert the response to a typed result.
    async fn handle_response(&self, response: Response) -> Result<Value, GraphApiError> {
        let status = response.status();

        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            warn!("Graph API error ({}): {}", status, body);
            return Err(GraphApiError::from_status(status, body));
        }

        let value: Value = response.json().await?;
        Ok(value)
    }
}

/// Join a base URL and a resource path with exactly one separating slash,
/// whatever combination of trailing/leading slashes the caller supplies.
fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
