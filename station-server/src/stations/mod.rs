//! Station reference set.
//!
//! Provides the immutable catalog of stations the search inputs match
//! against, loaded once at startup from the embedded data or a JSON file.

mod catalog;
mod error;

pub use catalog::StationCatalog;
pub use error::StationError;
