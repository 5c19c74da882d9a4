//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::StationRecord;
use crate::suggest::{JourneySearch, Quota, TravelClass};

/// Autocomplete request.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Raw text typed so far
    #[serde(default)]
    pub q: String,

    /// Maximum number of suggestions (server default if absent)
    pub limit: Option<usize>,
}

/// A station in autocomplete results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationSuggestion {
    /// Station code (e.g., "NDLS")
    pub code: String,

    /// Short name
    pub name: String,

    /// Full label shown in the dropdown
    pub label: String,
}

/// Response for autocomplete.
#[derive(Debug, Serialize, Deserialize)]
pub struct StationSearchResponse {
    /// Matching stations, in reference order
    pub suggestions: Vec<StationSuggestion>,
}

/// A submitted search form.
#[derive(Debug, Deserialize)]
pub struct JourneySearchRequest {
    /// Origin: display label or station code
    pub from: String,

    /// Destination: display label or station code
    pub to: String,

    /// Travel date (defaults to tomorrow)
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub class: TravelClass,

    #[serde(default)]
    pub quota: Quota,

    /// Number of passengers (defaults to 1)
    pub passengers: Option<u8>,
}

/// A validated journey search.
#[derive(Debug, Serialize, Deserialize)]
pub struct JourneySearchResponse {
    pub from: StationSuggestion,
    pub to: StationSuggestion,
    pub date: NaiveDate,
    pub class: TravelClass,
    pub quota: Quota,
    pub passengers: u8,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<&StationRecord> for StationSuggestion {
    fn from(record: &StationRecord) -> Self {
        Self {
            code: record.code().to_string(),
            name: record.name().to_string(),
            label: record.display_label().to_string(),
        }
    }
}

impl JourneySearchResponse {
    /// Build from a validated search, with both ends resolved to records.
    pub fn from_search(search: &JourneySearch, from: &StationRecord, to: &StationRecord) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            date: search.date,
            class: search.class,
            quota: search.quota,
            passengers: search.passengers.get(),
        }
    }
}
