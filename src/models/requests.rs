//! Request DTOs for the weather service API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query for the current-weather endpoint (GET /weather?lat=..&lon=..)
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherQuery {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl WeatherQuery {
    /// Validates the coordinates
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Some(format!("Latitude {} is outside [-90, 90]", self.lat));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Some(format!("Longitude {} is outside [-180, 180]", self.lon));
        }
        None
    }
}
