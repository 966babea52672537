//! Weather Client
//!
//! Requests current conditions from OpenWeatherMap and hands icon lookups
//! to the [`IconFetcher`].

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::cache::SharedCache;
use crate::client::IconFetcher;
use crate::config::Config;
use crate::error::{Result, WeatherError};
use crate::models::{CurrentWeather, Icon, Weather};

/// Client for the current-weather API and its icons.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
    api_url: String,
    units: String,
    icons: IconFetcher,
}

impl WeatherClient {
    /// Builds a client from configuration.
    ///
    /// Fails with [`WeatherError::MissingApiKey`] when no key is configured.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(WeatherError::MissingApiKey)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let icons = IconFetcher::new(
            http.clone(),
            config.icon_base_url.clone(),
            SharedCache::new(config.icon_cache_capacity),
        );

        Ok(Self {
            http,
            api_key,
            api_url: config.weather_api_url.clone(),
            units: config.units.clone(),
            icons,
        })
    }

    /// Fetches current conditions for a coordinate.
    pub async fn current_weather(&self, lat: f64, lon: f64) -> Result<CurrentWeather> {
        let url = format!("{}/weather", self.api_url.trim_end_matches('/'));
        debug!(lat, lon, "Requesting current weather");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("APPID", self.api_key.clone()),
                ("units", self.units.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        let report: CurrentWeather = serde_json::from_slice(&body)?;
        info!(
            location = report.name.as_deref().unwrap_or("unknown"),
            icon = report.weather.icon.as_deref().unwrap_or("none"),
            "Received current weather"
        );

        Ok(report)
    }

    /// Returns the icon for a weather condition.
    ///
    /// `Ok(None)` means the report did not name an icon.
    pub async fn icon_for(&self, weather: &Weather) -> Result<Option<Icon>> {
        match weather.icon.as_deref() {
            Some(id) => self.icons.fetch(id).await.map(Some),
            None => Ok(None),
        }
    }

    /// Returns an icon by id, from the cache when possible.
    pub async fn fetch_icon(&self, id: &str) -> Result<Icon> {
        self.icons.fetch(id).await
    }

    pub fn icon_cache(&self) -> &SharedCache<Icon> {
        self.icons.cache()
    }

    pub fn units(&self) -> &str {
        &self.units
    }
}
