//! Client-side synchronization layer for a remote media gallery.
//!
//! Keeps a local [`CollectionState`] consistent across initial load,
//! metadata-tagged uploads, and multi-field search, and surfaces transient
//! notifications for upload outcomes.

pub mod api;
pub mod common;
pub mod gallery;
pub mod models;

pub use api::gallery_api::GalleryApi;
pub use common::api_client::{ApiClient, ApiClientError, UploadFile};
pub use common::settings::{Settings, SettingsError};
pub use gallery::controller::GalleryController;
pub use gallery::notifications::{Notification, NotificationQueue, Severity};
pub use gallery::repository::{CollectionState, MediaRepository, UploadOutcome};
pub use models::media_items::{MediaItem, MediaMetadata};
pub use models::search_filters::{SearchFilters, SearchFormValues, VisibilityChoice};
