//! Search-input state: what the user has typed, what is suggested, and
//! what gets submitted.

mod error;
mod form;
mod query_state;

pub use error::FormError;
pub use form::{Field, JourneySearch, Passengers, Quota, SearchForm, TravelClass};
pub use query_state::QueryState;
