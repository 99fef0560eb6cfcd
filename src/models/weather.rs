//! Weather models
//!
//! The raw OpenWeather response shape and the simplified report derived
//! from it.

use serde::{Deserialize, Serialize};

/// Raw current-weather response from the OpenWeather API, reduced to the
/// fields the service consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenWeatherResponse {
    pub main: WeatherMain,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    pub humidity: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

/// Simplified weather report handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    /// Temperature in whole degrees Celsius
    pub temp: i64,
    pub description: String,
    pub humidity: u64,
    pub city: String,
}

impl From<OpenWeatherResponse> for Weather {
    fn from(response: OpenWeatherResponse) -> Self {
        Self {
            temp: response.main.temp.round() as i64,
            description: response
                .weather
                .first()
                .map(|condition| condition.description.clone())
                .unwrap_or_else(|| "No description".to_string()),
            humidity: response.main.humidity,
            city: response.name,
        }
    }
}
