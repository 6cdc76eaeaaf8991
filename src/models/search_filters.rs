use serde::{Deserialize, Serialize};

/// Optional-field query descriptor for the images endpoint.
///
/// A field is present only when the user supplied a non-empty value, which
/// keeps "no filter" distinct from "filter on empty string" on the wire:
/// absent fields are skipped entirely when serializing to query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_processing_stages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    /// Tri-state visibility constraint: `None` means unconstrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// The visibility radio selection on the search form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisibilityChoice {
    #[default]
    All,
    Public,
    Private,
}

/// Raw snapshot of the search form: six free-text fields plus the
/// visibility radio. Malformed input is impossible by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFormValues {
    pub source: String,
    pub copyright: String,
    pub dataset_release: String,
    pub description: String,
    pub data_processing_stages: String,
    pub coordinates: String,
    pub visibility: VisibilityChoice,
}

impl SearchFormValues {
    /// Normalize the form into a [`SearchFilters`]: blank fields are dropped
    /// and the visibility radio folds into the tri-state `is_public`.
    #[must_use]
    pub fn into_filters(self) -> SearchFilters {
        SearchFilters {
            source: non_empty(self.source),
            copyright: non_empty(self.copyright),
            dataset_release: non_empty(self.dataset_release),
            description: non_empty(self.description),
            data_processing_stages: non_empty(self.data_processing_stages),
            coordinates: non_empty(self.coordinates),
            is_public: match self.visibility {
                VisibilityChoice::All => None,
                VisibilityChoice::Public => Some(true),
                VisibilityChoice::Private => Some(false),
            },
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
