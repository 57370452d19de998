//! Spreadsheet rows (Google Sheets values API)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use shared::error::{AppError, AppResult, ErrorKind};

/// Source of untyped spreadsheet rows
#[async_trait]
pub trait SheetRowsSource: Send + Sync {
    async fn fetch_rows(&self, sheet_id: &str, sheet_name: &str, range: &str) -> AppResult<Vec<Vec<String>>>;
}

/// `GET {api}/spreadsheets/{id}/values/{name}!{range}` response
#[derive(Debug, Default, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl ValueRange {
    fn into_rows(self) -> Vec<Vec<String>> {
        self.values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect()
    }
}

fn cell_text(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Sheets API client using a bearer token
#[derive(Debug, Clone)]
pub struct GoogleSheetsClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GoogleSheetsClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::network(format!("failed to build sheets client: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            token: token.into(),
        })
    }

    /// Values URL; the `name!range` part is a single escaped path segment
    pub fn values_url(&self, sheet_id: &str, sheet_name: &str, range: &str) -> AppResult<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| AppError::config(format!("invalid sheets API url {:?}: {}", self.api_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::config(format!("sheets API url {:?} cannot be a base", self.api_url)))?
            .pop_if_empty()
            .extend(["spreadsheets", sheet_id, "values", &format!("{}!{}", sheet_name, range)]);
        Ok(url)
    }
}

#[async_trait]
impl SheetRowsSource for GoogleSheetsClient {
    async fn fetch_rows(&self, sheet_id: &str, sheet_name: &str, range: &str) -> AppResult<Vec<Vec<String>>> {
        let url = self.values_url(sheet_id, sheet_name, range)?;
        tracing::debug!(url = %url, "GET sheet values");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::network(format!("sheets API returned {}: {}", status, body))
                .with_detail("status", status.as_u16()));
        }

        let values: ValueRange = response
            .json()
            .await
            .map_err(|e| AppError::decode(format!("invalid sheets response: {}", e)))?;
        let rows = values.into_rows();
        tracing::info!(count = rows.len(), sheet = %sheet_name, "Fetched sheet rows");
        Ok(rows)
    }
}

fn request_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::with_message(ErrorKind::TimeoutError, format!("sheets request timed out: {}", e))
    } else {
        AppError::network(format!("sheets request failed: {}", e))
    }
}
