//! Domain types for the station finder.
//!
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod station;

pub use station::{InvalidStationCode, StationCode, StationRecord};
