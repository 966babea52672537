//! Models for the weather service
//!
//! The upstream weather report, the cached icon payload, and the DTOs used
//! for HTTP request and response bodies.

pub mod icon;
pub mod requests;
pub mod responses;
pub mod weather;

// Re-export commonly used types
pub use icon::{is_valid_icon_id, Icon};
pub use requests::WeatherQuery;
pub use responses::{ClearResponse, HealthResponse, StatsResponse, WeatherResponse};
pub use weather::{icon_url, CurrentWeather, Main, Weather, Wind};
