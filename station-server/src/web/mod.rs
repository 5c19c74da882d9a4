//! Web layer for the station finder.
//!
//! Provides HTTP endpoints for station autocomplete and search-form
//! validation, plus the page that uses them.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, MAX_SUGGESTION_LIMIT, create_router};
pub use state::AppState;
pub use templates::*;
