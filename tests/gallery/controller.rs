use crate::helpers::{media_item, rejected, FakeGalleryApi};
use gallery_client::{
    GalleryController, MediaMetadata, MediaRepository, NotificationQueue, SearchFormValues,
    Severity, UploadFile, VisibilityChoice,
};
use std::sync::Arc;
use std::time::Duration;

fn controller_with(fake: Arc<FakeGalleryApi>) -> GalleryController {
    let repository = Arc::new(MediaRepository::new(fake));
    GalleryController::new(repository, NotificationQueue::new(Duration::from_secs(60)))
}

#[tokio::test]
async fn starts_empty_and_refresh_loads_the_collection() {
    let fake = FakeGalleryApi::with_items(vec![media_item("m31.png", "M31", "© ESO")]);
    let controller = controller_with(Arc::clone(&fake));

    assert!(controller.items().is_empty());
    assert!(!controller.is_loading());

    let state = controller.refresh_images().await;

    assert_eq!(state.items.len(), 1);
    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.error(), None);
}

#[tokio::test]
async fn uploading_makes_the_new_item_visible_with_a_success_toast() {
    let fake = FakeGalleryApi::new();
    let controller = controller_with(Arc::clone(&fake));
    controller.refresh_images().await;
    assert!(controller.items().is_empty());

    let metadata = MediaMetadata {
        source: "Gaia".to_string(),
        copyright: "© ESA 2026".to_string(),
        is_public: true,
        ..MediaMetadata::default()
    };
    let outcome = controller
        .upload_image(
            Some(UploadFile::from_bytes("gaia.png", vec![1, 2, 3])),
            metadata,
        )
        .await;

    assert!(outcome.success);
    let items = controller.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].source, "Gaia");
    assert_eq!(items[0].copyright, "© ESA 2026");

    let toasts = controller.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity, Severity::Success);
    assert_eq!(toasts[0].message, "Image uploaded successfully!");
}

#[tokio::test]
async fn uploading_without_a_file_never_touches_the_network() {
    let fake = FakeGalleryApi::new();
    let controller = controller_with(Arc::clone(&fake));

    let outcome = controller
        .upload_image(None, MediaMetadata::default())
        .await;

    assert!(!outcome.success);
    assert!(!controller.is_loading());
    assert!(fake.uploads.lock().unwrap().is_empty());
    assert!(fake.seen_filters.lock().unwrap().is_empty());

    let toasts = controller.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity, Severity::Error);
    assert_eq!(toasts[0].message, "Please select a file before uploading.");
}

#[tokio::test]
async fn rejected_upload_pushes_the_server_supplied_reason() {
    let fake = FakeGalleryApi::new();
    let controller = controller_with(Arc::clone(&fake));

    fake.fail_next_upload(rejected(400, "Unsupported media type"));
    let outcome = controller
        .upload_image(
            Some(UploadFile::from_bytes("notes.txt", vec![0])),
            MediaMetadata::default(),
        )
        .await;

    assert!(!outcome.success);
    let toasts = controller.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity, Severity::Error);
    assert_eq!(toasts[0].message, "Unsupported media type");
}

#[tokio::test]
async fn search_normalizes_the_form_before_fetching() {
    let fake = FakeGalleryApi::with_items(vec![
        media_item("m31.png", "M31", "© ESO"),
        media_item("moon.png", "Luna", "© NASA"),
    ]);
    let controller = controller_with(Arc::clone(&fake));

    let form = SearchFormValues {
        source: "M31".to_string(),
        ..SearchFormValues::default()
    };
    let state = controller.search_images(form).await;

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].source, "M31");

    let seen = fake.seen_filters.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    let filters = seen[0].clone().unwrap();
    assert_eq!(filters.source.as_deref(), Some("M31"));
    assert_eq!(filters.copyright, None);
    assert_eq!(filters.is_public, None);
}

#[tokio::test]
async fn visibility_radio_reaches_the_endpoint_as_a_tri_state() {
    let fake = FakeGalleryApi::new();
    let controller = controller_with(Arc::clone(&fake));

    let form = SearchFormValues {
        visibility: VisibilityChoice::Private,
        ..SearchFormValues::default()
    };
    controller.search_images(form).await;

    let seen = fake.seen_filters.lock().unwrap().clone();
    assert_eq!(seen[0].clone().unwrap().is_public, Some(false));
}

#[tokio::test]
async fn reset_search_goes_back_to_the_unfiltered_view() {
    let fake = FakeGalleryApi::with_items(vec![
        media_item("m31.png", "M31", "© ESO"),
        media_item("moon.png", "Luna", "© NASA"),
    ]);
    let controller = controller_with(Arc::clone(&fake));

    let form = SearchFormValues {
        source: "M31".to_string(),
        ..SearchFormValues::default()
    };
    controller.search_images(form).await;
    assert_eq!(controller.items().len(), 1);

    let state = controller.reset_search().await;

    assert_eq!(state.items.len(), 2);
    let seen = fake.seen_filters.lock().unwrap().clone();
    assert_eq!(seen.last().unwrap(), &None);
}

#[tokio::test]
async fn dismissing_a_toast_removes_it_from_the_surface() {
    let fake = FakeGalleryApi::new();
    let controller = controller_with(Arc::clone(&fake));

    controller
        .upload_image(
            Some(UploadFile::from_bytes("gaia.png", vec![1])),
            MediaMetadata::default(),
        )
        .await;
    let toasts = controller.toasts();
    assert_eq!(toasts.len(), 1);

    controller.dismiss_toast(toasts[0].id);

    assert!(controller.toasts().is_empty());
}
