//! Search form validation errors.

use chrono::NaiveDate;

use crate::domain::StationCode;

/// Reasons a journey search cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Origin or destination left blank
    #[error("please select both origin and destination stations")]
    MissingStations,

    /// No travel date chosen
    #[error("please select a travel date")]
    MissingDate,

    /// Station text does not name a known station
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// Origin and destination are the same station
    #[error("origin and destination are both {0}")]
    SameStation(StationCode),

    /// Travel date already passed
    #[error("travel date {0} is in the past")]
    DateInPast(NaiveDate),

    /// Passenger count outside the bookable range
    #[error("passenger count must be between 1 and 6, got {0}")]
    InvalidPassengers(u8),
}
