//! API Routes
//!
//! Configures the Axum router with all weather service endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_icons_handler, health_handler, icon_handler, stats_handler, weather_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /weather?lat=..&lon=..` - Current conditions
/// - `GET /icons/:icon` - Icon image, cached in memory
/// - `DELETE /icons` - Clear the icon cache
/// - `GET /stats` - Icon cache statistics
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/weather", get(weather_handler))
        .route("/icons", delete(clear_icons_handler))
        .route("/icons/:icon", get(icon_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
