use crate::common::api_client::UploadFile;
use crate::gallery::notifications::{Notification, NotificationQueue};
use crate::gallery::repository::{CollectionState, MediaRepository, UploadOutcome};
use crate::models::media_items::{MediaItem, MediaMetadata};
use crate::models::search_filters::SearchFormValues;
use derive_more::Constructor;
use std::sync::Arc;

const UPLOAD_SUCCESS_MESSAGE: &str = "Image uploaded successfully!";
const NO_FILE_MESSAGE: &str = "Please select a file before uploading.";
const UPLOAD_FAILED_MESSAGE: &str = "Upload failed";

/// Composition root the view layer talks to: repository for collection
/// state, queue for toasts, filter building on the way into a search.
#[derive(Constructor)]
pub struct GalleryController {
    repository: Arc<MediaRepository>,
    notifications: NotificationQueue,
}

impl GalleryController {
    /// Current items, in server order.
    #[must_use]
    pub fn items(&self) -> Vec<MediaItem> {
        self.repository.state().items
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.repository.state().is_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.repository.state().error
    }

    /// Manual unfiltered re-fetch; also what initial load runs.
    pub async fn refresh_images(&self) -> CollectionState {
        self.repository.fetch_all(None).await
    }

    /// Upload with client-side validation and result toasts.
    ///
    /// A missing file never reaches the network: it produces an immediate
    /// error toast and a failed outcome, leaving loading state untouched.
    pub async fn upload_image(
        &self,
        file: Option<UploadFile>,
        metadata: MediaMetadata,
    ) -> UploadOutcome {
        let Some(file) = file else {
            self.notifications.push_error(NO_FILE_MESSAGE);
            return UploadOutcome::failed(NO_FILE_MESSAGE);
        };

        let outcome = self.repository.upload(file, metadata).await;
        if outcome.success {
            self.notifications.push_success(UPLOAD_SUCCESS_MESSAGE);
        } else {
            let reason = outcome.error.as_deref().unwrap_or(UPLOAD_FAILED_MESSAGE);
            self.notifications.push_error(reason);
        }
        outcome
    }

    /// Normalize the raw form and fetch under the resulting filter.
    pub async fn search_images(&self, form: SearchFormValues) -> CollectionState {
        self.repository.fetch_all(Some(form.into_filters())).await
    }

    /// Back to the unfiltered view.
    pub async fn reset_search(&self) -> CollectionState {
        self.repository.fetch_all(None).await
    }

    /// Active toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Notification> {
        self.notifications.notifications()
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.notifications.dismiss(id);
    }
}
