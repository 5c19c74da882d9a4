//! Station finder server.
//!
//! Backs a train search form: station-name autocomplete over a fixed
//! reference set, and validation of the submitted search.

pub mod cache;
pub mod config;
pub mod domain;
pub mod matcher;
pub mod stations;
pub mod suggest;
pub mod web;
