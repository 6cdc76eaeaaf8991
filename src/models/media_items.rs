use serde::{Deserialize, Serialize};

/// One stored asset as the gallery endpoint reports it.
///
/// `filename` is unique within a collection snapshot and doubles as the
/// stable render key. Items are never edited in place: every successful
/// fetch replaces the whole local collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaItem {
    pub filename: String,
    pub source: String,
    pub copyright: String,
    pub dataset_release: String,
    pub description: String,
    pub data_processing_stages: String,
    pub coordinates: String,
    pub is_public: bool,
    /// Server-assigned timestamp, kept as received.
    pub registration_date: String,
}

/// Descriptive fields attached to an upload. The server assigns `filename`
/// and `registrationDate` itself, so neither appears here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaMetadata {
    pub source: String,
    pub copyright: String,
    pub dataset_release: String,
    pub description: String,
    pub data_processing_stages: String,
    pub coordinates: String,
    pub is_public: bool,
}
