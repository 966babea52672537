//! Icon Fetcher
//!
//! Serves weather icons from the recency cache, fetching on a miss.

use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use tracing::{debug, info};

use crate::cache::SharedCache;
use crate::error::{Result, WeatherError};
use crate::models::{icon_url, is_valid_icon_id, Icon};

const FALLBACK_CONTENT_TYPE: &str = "image/png";

/// Fetches icon images, checking the cache before going to the network.
#[derive(Debug, Clone)]
pub struct IconFetcher {
    http: Client,
    base_url: String,
    cache: SharedCache<Icon>,
}

impl IconFetcher {
    pub fn new(http: Client, base_url: impl Into<String>, cache: SharedCache<Icon>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            cache,
        }
    }

    /// Returns the icon for `id`, from the cache when possible.
    ///
    /// The cache lock is only held for the lookup and the final store, never
    /// across the network request. Failed fetches leave the cache untouched.
    pub async fn fetch(&self, id: &str) -> Result<Icon> {
        if !is_valid_icon_id(id) {
            return Err(WeatherError::InvalidRequest(format!(
                "Invalid icon id '{}'",
                id
            )));
        }

        if let Some(icon) = self.cache.get(id).await {
            debug!(icon = %id, "Icon cache hit");
            return Ok(icon);
        }

        let url = icon_url(&self.base_url, id);
        debug!(icon = %id, url = %url, "Icon cache miss, fetching");

        let response = self.http.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => return Err(WeatherError::NotFound(format!("icon {}", id))),
            status if !status.is_success() => {
                return Err(WeatherError::Upstream {
                    status: status.as_u16(),
                    url,
                })
            }
            _ => {}
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        let body = response.bytes().await?;

        let icon = Icon::new(id, content_type, &body);
        self.cache.set(id, icon.clone()).await;
        info!(icon = %id, bytes = icon.len(), "Fetched and cached icon");

        Ok(icon)
    }

    pub fn cache(&self) -> &SharedCache<Icon> {
        &self.cache
    }
}
