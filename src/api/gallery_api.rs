use crate::common::api_client::{ApiClient, ApiClientError, UploadFile};
use crate::models::media_items::{MediaItem, MediaMetadata};
use crate::models::search_filters::SearchFilters;
use async_trait::async_trait;

/// Port onto the remote media collection.
///
/// The repository only talks to the server through this trait, so tests can
/// substitute an in-memory fake for the reqwest-backed client.
#[async_trait]
pub trait GalleryApi: Send + Sync {
    /// Read the collection, optionally constrained by `filters`.
    async fn list_media(
        &self,
        filters: Option<&SearchFilters>,
    ) -> Result<Vec<MediaItem>, ApiClientError>;

    /// Store one file plus its metadata.
    async fn upload_media(
        &self,
        file: UploadFile,
        metadata: &MediaMetadata,
    ) -> Result<(), ApiClientError>;
}

#[async_trait]
impl GalleryApi for ApiClient {
    async fn list_media(
        &self,
        filters: Option<&SearchFilters>,
    ) -> Result<Vec<MediaItem>, ApiClientError> {
        Self::list_media(self, filters).await
    }

    async fn upload_media(
        &self,
        file: UploadFile,
        metadata: &MediaMetadata,
    ) -> Result<(), ApiClientError> {
        Self::upload_media(self, file, metadata).await
    }
}
