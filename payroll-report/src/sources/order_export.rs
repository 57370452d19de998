//! Daily order exports

use std::io::ErrorKind as IoErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorKind};

use crate::utils::dates::export_folder;

/// Export file name inside each date folder
pub const ORDER_DETAILS_FILE: &str = "OrderDetails.csv";

/// Remote path of one date's export, `/{export_id}/{yyyymmdd}/OrderDetails.csv`
pub fn export_path(export_id: &str, date: NaiveDate) -> String {
    format!("/{}/{}/{}", export_id, export_folder(date), ORDER_DETAILS_FILE)
}

/// Source of raw order export files
#[async_trait]
pub trait OrderExportSource: Send + Sync {
    async fn download(&self, remote_path: &str) -> AppResult<Vec<u8>>;
}

/// Export tree mounted on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalExportDir {
    root: PathBuf,
    timeout: Duration,
}

impl LocalExportDir {
    pub fn new(root: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            root: root.into(),
            timeout,
        }
    }

    fn resolve(&self, remote_path: &str) -> PathBuf {
        self.root.join(remote_path.trim_start_matches('/'))
    }
}

#[async_trait]
impl OrderExportSource for LocalExportDir {
    async fn download(&self, remote_path: &str) -> AppResult<Vec<u8>> {
        let path = self.resolve(remote_path);
        tracing::debug!(path = %path.display(), "Reading order export");

        match tokio::time::timeout(self.timeout, tokio::fs::read(&path)).await {
            Ok(Ok(bytes)) => Ok(bytes),
            Ok(Err(e)) if e.kind() == IoErrorKind::NotFound => Err(AppError::with_message(
                ErrorKind::OrderExportNotFound,
                format!("order export not found: {}", remote_path),
            )
            .with_detail("path", remote_path)),
            Ok(Err(e)) => Err(AppError::io(format!("failed to read {}: {}", path.display(), e))),
            Err(_) => Err(AppError::with_message(
                ErrorKind::TimeoutError,
                format!("timed out after {:?} reading {}", self.timeout, remote_path),
            )),
        }
    }
}
