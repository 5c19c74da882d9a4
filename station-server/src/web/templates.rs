//! Askama templates for the web frontend.

use askama::Template;

use crate::suggest::{Passengers, Quota, TravelClass};

use super::dto::StationSuggestion;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub classes: Vec<SelectOption>,
    pub quotas: Vec<SelectOption>,
    /// Default travel date, `YYYY-MM-DD`.
    pub default_date: String,
    pub min_passengers: u8,
    pub max_passengers: u8,
    /// Characters needed before the dropdown opens.
    pub min_query_len: usize,
}

impl IndexTemplate {
    pub fn new(default_date: String, min_query_len: usize) -> Self {
        Self {
            classes: TravelClass::ALL
                .iter()
                .map(|c| SelectOption::new(c.as_str(), c.label()))
                .collect(),
            quotas: Quota::ALL
                .iter()
                .map(|q| SelectOption::new(q.as_str(), q.label()))
                .collect(),
            default_date,
            min_passengers: Passengers::MIN,
            max_passengers: Passengers::MAX,
            min_query_len,
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Suggestion dropdown fragment.
#[derive(Template)]
#[template(path = "suggestions.html")]
pub struct SuggestionListTemplate {
    pub suggestions: Vec<StationSuggestion>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One `<option>` of a select box.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}
