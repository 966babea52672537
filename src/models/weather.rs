//! Weather report model
//!
//! Typed view of the OpenWeatherMap current-weather response. Only the
//! fields the service shows are kept; unknown fields are ignored.
//!
//! Example body:
//! ```json
//! {"weather":[{"id":804,"main":"Clouds","description":"overcast clouds","icon":"04n"}],
//!  "main":{"temp":289.5,"humidity":89,"pressure":1013,"temp_min":287.04,"temp_max":292.04},
//!  "wind":{"speed":7.31,"deg":187.002},
//!  "dt":1369824698,"name":"Shuzenji"}
//! ```

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Current conditions at one location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawCurrentWeather")]
pub struct CurrentWeather {
    /// Primary weather condition
    pub weather: Weather,
    pub main: Main,
    pub wind: Wind,
    /// Location name reported by the API
    pub name: Option<String>,
    /// Time the data was calculated
    pub observed_at: Option<DateTime<Utc>>,
}

/// Weather condition. Unset fields were not reported for this location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Weather {
    /// Condition id
    pub id: Option<i64>,
    /// Group of parameters (Rain, Snow, Clouds, ...)
    pub main: Option<String>,
    /// Condition within the group
    pub description: Option<String>,
    /// Icon id, e.g. `04n`
    pub icon: Option<String>,
}

impl Weather {
    /// URL the icon image can be fetched from, if the report names one.
    pub fn icon_url(&self, base: &str) -> Option<String> {
        self.icon
            .as_deref()
            .map(|icon| icon_url(base, icon))
    }
}

/// Builds `{base}/{icon}.png`.
pub fn icon_url(base: &str, icon: &str) -> String {
    format!("{}/{}.png", base.trim_end_matches('/'), icon)
}

/// Temperature, pressure and humidity. Temperatures use the requested units.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Main {
    pub temp: Option<f64>,
    /// Sea-level pressure, hPa
    pub pressure: Option<f64>,
    /// Humidity, percent
    pub humidity: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Wind {
    /// Wind speed; m/s for metric/standard, mph for imperial
    pub speed: Option<f64>,
    /// Direction, meteorological degrees
    #[serde(rename = "deg")]
    pub degrees: Option<f64>,
}

/// Wire shape before the first `weather` element is picked out.
#[derive(Debug, Deserialize)]
struct RawCurrentWeather {
    weather: Vec<Weather>,
    main: Main,
    wind: Wind,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    dt: Option<DateTime<Utc>>,
}

impl TryFrom<RawCurrentWeather> for CurrentWeather {
    type Error = String;

    fn try_from(raw: RawCurrentWeather) -> Result<Self, Self::Error> {
        let weather = raw
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| "weather array is empty".to_string())?;

        Ok(Self {
            weather,
            main: raw.main,
            wind: raw.wind,
            name: raw.name.filter(|name| !name.is_empty()),
            observed_at: raw.dt,
        })
    }
}
