//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path as UrlPath, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::services::ServeDir;
use tracing::{debug, error, info, warn};

use crate::domain::StationCode;
use crate::suggest::{Field, FormError, Passengers, SearchForm};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Upper bound on `limit` accepted from clients.
pub const MAX_SUGGESTION_LIMIT: usize = 50;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations))
        .route("/api/stations/:code", get(get_station))
        .route("/api/journeys/search", post(search_journeys))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let default_date = SearchForm::for_today()
        .date()
        .map(|d| d.to_string())
        .unwrap_or_default();
    let min_query_len = state.matcher.config().effective_min_len();

    let html = IndexTemplate::new(default_date, min_query_len)
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

    Ok(Html(html))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Autocomplete: stations whose label or code contains `q`.
async fn search_stations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<StationSearchRequest>,
) -> Result<Response, AppError> {
    if req.limit == Some(0) {
        return Err(AppError::BadRequest {
            message: "limit must be at least 1".to_string(),
        });
    }

    let limit = req
        .limit
        .unwrap_or(state.matcher.config().limit)
        .min(MAX_SUGGESTION_LIMIT);

    let matches = state.matcher.suggest(&req.q, limit).await;
    let suggestions: Vec<StationSuggestion> =
        matches.iter().map(StationSuggestion::from).collect();

    debug!(query = %req.q, limit, count = suggestions.len(), "station search");

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let html = SuggestionListTemplate { suggestions }
            .render()
            .map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(StationSearchResponse { suggestions }).into_response())
    }
}

/// Look up one station by code.
async fn get_station(
    State(state): State<AppState>,
    UrlPath(code): UrlPath<String>,
) -> Result<Json<StationSuggestion>, AppError> {
    let code = StationCode::parse_normalized(&code).map_err(|e| AppError::BadRequest {
        message: format!("{}: {}", e, code),
    })?;

    let record = state
        .catalog()
        .get(&code)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown station: {}", code),
        })?;

    Ok(Json(record.into()))
}

/// Validate a submitted search form.
async fn search_journeys(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<JourneySearchResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: JourneySearchRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid search body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let today = Local::now().date_naive();
    let catalog = state.catalog();

    let mut form = SearchForm::new(today);
    form.set_text(Field::From, req.from);
    form.set_text(Field::To, req.to);
    if let Some(date) = req.date {
        form.set_date(Some(date));
    }
    form.set_class(req.class);
    form.set_quota(req.quota);
    if let Some(count) = req.passengers {
        form.set_passengers(Passengers::new(count)?);
    }

    let search = form.submit(catalog, today)?;

    // submit() only returns codes it resolved from this catalog
    let (Some(from), Some(to)) = (catalog.get(&search.from), catalog.get(&search.to)) else {
        return Err(AppError::Internal {
            message: format!("resolved stations {} / {} missing", search.from, search.to),
        });
    };

    info!(from = %search.from, to = %search.to, date = %search.date, "journey search");

    Ok(Json(JourneySearchResponse::from_search(&search, from, to)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<FormError> for AppError {
    fn from(e: FormError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
