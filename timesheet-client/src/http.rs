//! HTTP transport for the scheduling service

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde::de::DeserializeOwned;

/// HTTP client for making requests to the scheduling service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace the authentication token in place
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Full URL for a path relative to the base URL
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    ///
    /// The service expects the raw token in `Authorization`, no scheme prefix.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        let mut request = self.client.get(&url);

        if let Some(token) = self.token() {
            request = request.header(AUTHORIZATION, token);
        }

        tracing::debug!(url = %url, "GET");
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// POST a JSON body and return the `Authorization` response header
    pub async fn post_for_token<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<String> {
        let url = self.url(path);
        let response = self.client.post(&url).json(body).send().await?;
        let response = Self::check_status(response).await?;

        response
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                ClientError::InvalidResponse("could not find auth key in headers".to_string())
            })
    }

    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
            _ => Err(ClientError::Internal(format!("{}: {}", status, text))),
        }
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}
