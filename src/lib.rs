//! Weather Icons - current conditions with cached weather icons
//!
//! Fetches current weather from OpenWeatherMap and serves the matching
//! icon images through a bounded in-memory recency cache.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{RecencyCache, SharedCache};
pub use client::{IconFetcher, WeatherClient};
pub use config::Config;
pub use error::WeatherError;
