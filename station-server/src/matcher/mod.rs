//! Station-name autocomplete matching.
//!
//! A pure, order-preserving substring filter over the station reference
//! set. Results depend only on the query, the records and the config.

mod config;
mod station_match;

pub use config::{DEFAULT_LIMIT, DEFAULT_MIN_QUERY_LEN, MatchConfig};
pub use station_match::{match_records, match_stations};
