use crate::models::media_items::{MediaItem, MediaMetadata};
use crate::models::search_filters::SearchFilters;
use mime::Mime;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status}: {reason}")]
    UnexpectedStatus { status: StatusCode, reason: String },
}

impl ApiClientError {
    /// Message fit for direct display. Rejections keep whatever reason the
    /// endpoint supplied; transport failures and reason-less rejections
    /// collapse into `generic`.
    #[must_use]
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            Self::Request(_) => generic.to_string(),
            Self::UnexpectedStatus { reason, .. } if reason.trim().is_empty() => {
                generic.to_string()
            }
            Self::UnexpectedStatus { reason, .. } => reason.clone(),
        }
    }
}

/// Failure body shape the gallery endpoint uses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Success body of the upload endpoint. Only logged; the refreshed
/// collection is the authoritative view of what got stored.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    filename: Option<String>,
}

/// File payload for a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Mime,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Wrap in-memory bytes, guessing the MIME type from the file name.
    #[must_use]
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read `path` from disk, deriving the part file name from its final
    /// component.
    ///
    /// # Errors
    /// If the file can't be read.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload.bin".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self::from_bytes(file_name, bytes))
    }
}

pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create an api client rooted at `base_url`.
    ///
    /// No request or connect timeout is configured: a slow media upload runs
    /// until the server side gives up on it.
    ///
    /// # Panics
    /// If it can't create the client.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::builder()
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the media collection, optionally constrained by `filters`.
    /// Only constrained fields appear among the query parameters.
    ///
    /// # Errors
    /// * If the GET request can't be made to the url.
    /// * If the json body can't be parsed.
    /// * If an unexpected status code is received.
    pub async fn list_media(
        &self,
        filters: Option<&SearchFilters>,
    ) -> Result<Vec<MediaItem>, ApiClientError> {
        let url = format!("{}/api/images", self.base_url);
        let mut request = self.http_client.get(&url);
        if let Some(filters) = filters {
            request = request.query(filters);
        }
        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            status => {
                let reason = failure_reason(response).await?;
                warn!("Fetching images rejected with status {}: {}", status, reason);
                Err(ApiClientError::UnexpectedStatus { status, reason })
            }
        }
    }

    /// Upload one file plus its metadata as a multipart form. Every
    /// metadata field travels as its own text part, booleans in string form.
    ///
    /// # Errors
    /// * If the POST request can't be made to the url.
    /// * If the body can't be read.
    /// * If an unexpected status code is received.
    pub async fn upload_media(
        &self,
        file: UploadFile,
        metadata: &MediaMetadata,
    ) -> Result<(), ApiClientError> {
        let url = format!("{}/api/upload", self.base_url);
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(file.content_type.as_ref())?;
        let form = Form::new()
            .part("file", part)
            .text("source", metadata.source.clone())
            .text("copyright", metadata.copyright.clone())
            .text("datasetRelease", metadata.dataset_release.clone())
            .text("description", metadata.description.clone())
            .text("dataProcessingStages", metadata.data_processing_stages.clone())
            .text("coordinates", metadata.coordinates.clone())
            .text("isPublic", metadata.is_public.to_string());
        let response = self.http_client.post(&url).multipart(form).send().await?;

        match response.status() {
            status if status.is_success() => {
                if let Ok(UploadResponse {
                    filename: Some(filename),
                }) = response.json().await
                {
                    debug!("Upload stored as {}", filename);
                }
                Ok(())
            }
            status => {
                let reason = failure_reason(response).await?;
                warn!("Upload rejected with status {}: {}", status, reason);
                Err(ApiClientError::UnexpectedStatus { status, reason })
            }
        }
    }
}

/// Pull a human-readable reason out of a failure response: the `detail`
/// field when the body is the endpoint's JSON error shape, the raw body
/// text otherwise.
async fn failure_reason(response: reqwest::Response) -> Result<String, reqwest::Error> {
    let text = response.text().await?;
    let detail = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.detail);
    Ok(detail.unwrap_or(text))
}
