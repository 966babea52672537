//! API Module
//!
//! HTTP handlers and routing for the weather service.
//!
//! # Endpoints
//! - `GET /weather?lat=..&lon=..` - Current conditions
//! - `GET /icons/:icon` - Icon image, cached in memory
//! - `DELETE /icons` - Clear the icon cache
//! - `GET /stats` - Icon cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
