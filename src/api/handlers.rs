//! API Handlers
//!
//! HTTP request handlers for each weather service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::client::WeatherClient;
use crate::config::Config;
use crate::error::{Result, WeatherError};
use crate::models::{ClearResponse, HealthResponse, StatsResponse, WeatherQuery, WeatherResponse};

/// Application state shared across all handlers.
///
/// The icon cache lives inside the client and carries its own lock.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<WeatherClient>,
}

impl AppState {
    /// Creates a new AppState around an existing client.
    pub fn new(client: WeatherClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        WeatherClient::new(config).map(Self::new)
    }
}

/// Handler for GET /weather?lat=..&lon=..
///
/// Returns current conditions and warms the icon cache for the condition's
/// icon. An icon failure is logged and does not fail the request.
pub async fn weather_handler(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(WeatherError::InvalidRequest(error_msg));
    }

    let report = state.client.current_weather(query.lat, query.lon).await?;

    if let Err(err) = state.client.icon_for(&report.weather).await {
        warn!(error = %err, "Could not prefetch weather icon");
    }

    Ok(Json(WeatherResponse::from_report(
        &report,
        state.client.units(),
    )))
}

/// Handler for GET /icons/:icon
///
/// Returns the icon image bytes with the upstream content type.
pub async fn icon_handler(
    State(state): State<AppState>,
    Path(icon): Path<String>,
) -> Result<Response> {
    let icon = state.client.fetch_icon(&icon).await?;

    Ok((
        [
            (header::CONTENT_TYPE, icon.content_type.clone()),
            (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
        ],
        icon.data.to_vec(),
    )
        .into_response())
}

/// Handler for DELETE /icons
///
/// Drops every cached icon. Capacity and counters are kept.
pub async fn clear_icons_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cache = state.client.icon_cache();
    let cleared = cache.len().await;
    cache.clear().await;

    Json(ClearResponse::new(cleared))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.client.icon_cache().stats().await;
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
