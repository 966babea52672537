//! Upstream Clients
//!
//! HTTP access to the weather API and the cached icon fetcher.

mod icons;
mod weather;

pub use icons::IconFetcher;
pub use weather::WeatherClient;
