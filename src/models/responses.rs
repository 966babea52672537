//! Response DTOs for the weather service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::CurrentWeather;

/// Response body for GET /weather
#[derive(Debug, Clone, Serialize)]
pub struct WeatherResponse {
    pub location: Option<String>,
    /// Condition group, e.g. `Clouds`
    pub condition: Option<String>,
    pub description: Option<String>,
    pub temperature: Option<f64>,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_degrees: Option<f64>,
    /// Unit system the numbers are in
    pub units: String,
    pub icon: Option<String>,
    /// Path on this service serving the icon image
    pub icon_path: Option<String>,
    /// RFC 3339 observation time
    pub observed_at: Option<String>,
}

impl WeatherResponse {
    /// Flattens a weather report for display
    pub fn from_report(report: &CurrentWeather, units: impl Into<String>) -> Self {
        Self {
            location: report.name.clone(),
            condition: report.weather.main.clone(),
            description: report.weather.description.clone(),
            temperature: report.main.temp,
            temperature_min: report.main.temp_min,
            temperature_max: report.main.temp_max,
            humidity: report.main.humidity,
            wind_speed: report.wind.speed,
            wind_degrees: report.wind.degrees,
            units: units.into(),
            icon: report.weather.icon.clone(),
            icon_path: report.weather.icon.as_ref().map(|icon| format!("/icons/{}", icon)),
            observed_at: report.observed_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Response body for GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
    pub capacity: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            entries: stats.entries,
            capacity: stats.capacity,
        }
    }
}

/// Response body for DELETE /icons
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Number of icons dropped
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} cached icons", cleared),
            cleared,
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
