//! Weather Service
//!
//! Typed wrapper over the OpenWeather current-weather API. Lookups for the
//! same location are served from the client cache within the TTL.

use anyhow::{bail, Result};
use url::form_urlencoded;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{OpenWeatherResponse, Weather};

/// Default base address for the weather API.
pub const WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Environment variable holding the OpenWeather API key.
pub const WEATHER_API_KEY_VAR: &str = "WEATHER_API_KEY";

// == Weather Service ==
/// Client for current-weather lookups.
#[derive(Debug)]
pub struct WeatherService {
    api: ApiClient,
    api_key: String,
}

impl WeatherService {
    // == Constructor ==
    /// Creates a service against the public OpenWeather API, reading the key
    /// from `WEATHER_API_KEY`. A missing key is reported at call time, not
    /// here, so the service can be constructed unconditionally.
    pub fn new() -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(WEATHER_BASE_URL)?,
            api_key: std::env::var(WEATHER_API_KEY_VAR).unwrap_or_default(),
        })
    }

    /// Creates a service over an existing client and explicit key, e.g.
    /// against a test server.
    pub fn with_client(api: ApiClient, api_key: impl Into<String>) -> Self {
        Self {
            api,
            api_key: api_key.into(),
        }
    }

    // == Current Weather ==
    /// Looks up the current weather for a city by name.
    pub async fn current_weather(&self, city: &str) -> Result<Weather> {
        self.ensure_key()?;
        let city = city.trim();
        if city.is_empty() {
            bail!("City name is required");
        }

        let endpoint = self.weather_endpoint(&[("q", city)]);
        match self.api.get::<OpenWeatherResponse>(&endpoint).await {
            Ok(response) => Ok(Weather::from(response)),
            Err(ApiError::NotFound) => {
                bail!("City \"{city}\" not found. Please check the spelling.")
            }
            Err(api_error) => Err(api_error.into()),
        }
    }

    /// Looks up the current weather by coordinates.
    pub async fn weather_by_coordinates(&self, lat: f64, lon: f64) -> Result<Weather> {
        self.ensure_key()?;

        let endpoint =
            self.weather_endpoint(&[("lat", &lat.to_string()), ("lon", &lon.to_string())]);
        let response: OpenWeatherResponse = self.api.get(&endpoint).await?;
        Ok(Weather::from(response))
    }

    // == Cache Management ==
    /// Clears all cached weather responses.
    pub async fn clear_cache(&self) {
        self.api.clear_cache().await;
    }

    /// Builds a `/weather` endpoint with percent-encoded query values, so
    /// reserved characters in user input cannot truncate the query or
    /// inject extra parameters.
    fn weather_endpoint(&self, params: &[(&str, &str)]) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .append_pair("appid", &self.api_key)
            .append_pair("units", "metric")
            .finish();
        format!("/weather?{query}")
    }

    fn ensure_key(&self) -> Result<()> {
        if self.api_key.is_empty() {
            bail!(
                "OpenWeather API key is not configured. Please set {WEATHER_API_KEY_VAR} in the environment."
            );
        }
        Ok(())
    }
}
