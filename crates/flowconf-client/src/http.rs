//! HTTP transport with envelope normalization and error triage
//!
//! Every backend response is a `{code, message, data}` envelope. This
//! module unwraps it: callers receive the typed `data` payload or a
//! [`ClientError`], never the raw envelope. Failures with no response
//! are triaged into timeout / unreachable / passthrough.

use std::{sync::Arc, time::Duration};

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use flowconf_api::model::ApiResponse;

use crate::{
    config::HttpClientConfig,
    error::{ClientError, Result},
    session::SessionTokens,
};

/// HTTP client for the console API
pub struct ConsoleHttpClient {
    client: Client,
    config: HttpClientConfig,
    session: Arc<SessionTokens>,
}

impl ConsoleHttpClient {
    /// Create a new HTTP client bound to a session token store.
    pub fn new(config: HttpClientConfig, session: Arc<SessionTokens>) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            config,
            session,
        })
    }

    pub fn session(&self) -> &Arc<SessionTokens> {
        &self.session
    }

    /// Build full URL with context path
    fn build_url(&self, path: &str) -> String {
        let context_path = &self.config.context_path;
        if context_path.is_empty() {
            format!("{}{}", self.config.server_addr, path)
        } else {
            format!(
                "{}/{}{}",
                self.config.server_addr,
                context_path.trim_start_matches('/'),
                path
            )
        }
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.build_url(path);
        debug!("GET {}", url);
        let response = self
            .apply_auth(self.client.get(&url))
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Option<T>> {
        let url = self.build_url(path);
        debug!("GET {}", url);
        let response = self
            .apply_auth(self.client.get(&url).query(query))
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a JSON body
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>> {
        let url = self.build_url(path);
        debug!("POST {}", url);
        let response = self
            .apply_auth(self.client.post(&url).json(body))
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        Self::handle_response(response).await
    }

    /// Unwrap the response envelope into its data payload.
    ///
    /// Non-2xx statuses are passthrough transport errors so callers can
    /// still branch on the status code; 2xx envelopes with a non-zero
    /// code become application errors.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<Option<T>> {
        let response = response.error_for_status().map_err(ClientError::Http)?;
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(ClientError::from_transport)?;
        if envelope.code != 0 {
            return Err(ClientError::from_envelope(envelope.code, envelope.message));
        }
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(config: HttpClientConfig) -> ConsoleHttpClient {
        ConsoleHttpClient::new(config, Arc::new(SessionTokens::new())).unwrap()
    }

    #[test]
    fn test_build_url_default_context() {
        let client = client_with(HttpClientConfig::new("http://localhost:8090"));
        assert_eq!(
            client.build_url("/config/global"),
            "http://localhost:8090/api/v1/config/global"
        );
    }

    #[test]
    fn test_build_url_no_context() {
        let client = client_with(
            HttpClientConfig::new("http://localhost:8090").with_context_path(""),
        );
        assert_eq!(
            client.build_url("/status"),
            "http://localhost:8090/status"
        );
    }
}
