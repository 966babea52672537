//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

const DEFAULT_WEATHER_API_URL: &str = "http://api.openweathermap.org/data/2.5";
const DEFAULT_ICON_BASE_URL: &str = "http://openweathermap.org/img/w";
const DEFAULT_ICON_CACHE_CAPACITY: usize = 10;
const DEFAULT_UNITS: &str = "imperial";
const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeatherMap API key; requests cannot be made without one
    pub api_key: Option<String>,
    /// Base URL of the current-weather API
    pub weather_api_url: String,
    /// Base URL icons are fetched from, as `{base}/{icon}.png`
    pub icon_base_url: String,
    /// Maximum number of icons held in memory, at least 1
    pub icon_cache_capacity: usize,
    /// Unit system passed to the weather API
    pub units: String,
    /// HTTP server port
    pub server_port: u16,
    /// Timeout for each upstream request in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `OPENWEATHERMAP_API_KEY` - API key (default: unset)
    /// - `WEATHER_API_URL` - Weather API base URL
    /// - `ICON_BASE_URL` - Icon base URL
    /// - `ICON_CACHE_CAPACITY` - Icon cache size; values below 1 become 1 (default: 10)
    /// - `WEATHER_UNITS` - `standard`, `metric` or `imperial` (default: imperial)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `REQUEST_TIMEOUT_SECS` - Upstream request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENWEATHERMAP_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            weather_api_url: string_var("WEATHER_API_URL", DEFAULT_WEATHER_API_URL),
            icon_base_url: string_var("ICON_BASE_URL", DEFAULT_ICON_BASE_URL),
            icon_cache_capacity: env::var("ICON_CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .map(clamp_capacity)
                .unwrap_or(DEFAULT_ICON_CACHE_CAPACITY),
            units: string_var("WEATHER_UNITS", DEFAULT_UNITS),
            server_port: parsed_var("SERVER_PORT", DEFAULT_SERVER_PORT),
            request_timeout_secs: parsed_var("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            weather_api_url: DEFAULT_WEATHER_API_URL.to_string(),
            icon_base_url: DEFAULT_ICON_BASE_URL.to_string(),
            icon_cache_capacity: DEFAULT_ICON_CACHE_CAPACITY,
            units: DEFAULT_UNITS.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Non-positive capacities are clamped to 1.
fn clamp_capacity(raw: i64) -> usize {
    usize::try_from(raw.max(1)).unwrap_or(usize::MAX)
}

fn string_var(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|v| v.trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
