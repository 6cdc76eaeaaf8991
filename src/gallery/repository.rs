//! Local view of the remote media collection.
//!
//! State lives behind short `RwLock` critical sections that never span an
//! await. Lock poisoning only occurs when another thread panicked while
//! holding the lock, which is an unrecoverable state.

use crate::api::gallery_api::GalleryApi;
use crate::common::api_client::UploadFile;
use crate::models::media_items::{MediaItem, MediaMetadata};
use crate::models::search_filters::SearchFilters;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

const FETCH_FAILED: &str = "Failed to fetch images";
const UPLOAD_FAILED: &str = "Upload failed";

/// Locally held snapshot of the remote collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionState {
    /// Items in server order, replaced wholesale on each successful fetch.
    pub items: Vec<MediaItem>,
    /// True for the whole span between issuing a request and its settlement.
    pub is_loading: bool,
    /// Set on terminal failure, cleared at the start of every new request.
    pub error: Option<String>,
}

/// What an upload attempt came to. Callers branch on `success` and never
/// need a catch path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl UploadOutcome {
    #[must_use]
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(reason.into()),
        }
    }
}

/// Single source of truth for the local media collection; every read and
/// write against the remote goes through here.
///
/// Overlapping requests are neither queued nor cancelled: whichever
/// response settles last writes the state. Superseded responses landing
/// late is accepted behavior, covered by the ordering tests.
pub struct MediaRepository {
    api: Arc<dyn GalleryApi>,
    state: RwLock<CollectionState>,
    active_filters: RwLock<Option<SearchFilters>>,
}

impl MediaRepository {
    #[must_use]
    pub fn new(api: Arc<dyn GalleryApi>) -> Self {
        Self {
            api,
            state: RwLock::new(CollectionState::default()),
            active_filters: RwLock::new(None),
        }
    }

    /// Snapshot of the current collection state.
    #[must_use]
    pub fn state(&self) -> CollectionState {
        self.state.read().expect("state lock poisoned").clone()
    }

    /// Filter used by the most recent fetch, re-applied after uploads.
    #[must_use]
    pub fn active_filters(&self) -> Option<SearchFilters> {
        self.active_filters
            .read()
            .expect("filter lock poisoned")
            .clone()
    }

    /// Replace the collection with a fresh read of the remote one.
    ///
    /// `filters` becomes the active filter for later post-upload refreshes;
    /// `None` means the unfiltered view. The previous `items` stay visible
    /// while the request is in flight and survive a failed request.
    pub async fn fetch_all(&self, filters: Option<SearchFilters>) -> CollectionState {
        *self
            .active_filters
            .write()
            .expect("filter lock poisoned") = filters.clone();
        self.run_fetch(filters.as_ref()).await
    }

    /// Re-read the collection under the currently active filter.
    pub async fn refresh(&self) -> CollectionState {
        let filters = self.active_filters();
        self.run_fetch(filters.as_ref()).await
    }

    /// Upload one file with its metadata, then refresh the collection under
    /// the active filter so the new item is visible before this returns.
    ///
    /// Failures never propagate: they come back as a failed outcome and are
    /// mirrored into the shared `error` state. A failed refresh after an
    /// accepted upload keeps the successful outcome.
    pub async fn upload(&self, file: UploadFile, metadata: MediaMetadata) -> UploadOutcome {
        self.begin_request();
        match self.api.upload_media(file, &metadata).await {
            Ok(()) => {
                info!("Upload accepted, refreshing collection");
                self.refresh().await;
                UploadOutcome::succeeded()
            }
            Err(e) => {
                warn!("Upload failed: {}", e);
                let reason = e.user_message(UPLOAD_FAILED);
                let mut state = self.state.write().expect("state lock poisoned");
                state.error = Some(reason.clone());
                state.is_loading = false;
                UploadOutcome::failed(reason)
            }
        }
    }

    async fn run_fetch(&self, filters: Option<&SearchFilters>) -> CollectionState {
        self.begin_request();
        let result = self.api.list_media(filters).await;

        let mut state = self.state.write().expect("state lock poisoned");
        match result {
            Ok(items) => {
                info!("Fetched {} media items", items.len());
                state.items = items;
            }
            Err(e) => {
                warn!("Fetching media failed: {}", e);
                state.error = Some(e.user_message(FETCH_FAILED));
            }
        }
        state.is_loading = false;
        state.clone()
    }

    fn begin_request(&self) {
        let mut state = self.state.write().expect("state lock poisoned");
        state.is_loading = true;
        state.error = None;
    }
}
