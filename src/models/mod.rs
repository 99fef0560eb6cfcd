//! Domain models for the demonstration services
//!
//! Wire-format types for the public APIs the services talk to, and the
//! simplified shapes handed to callers.

mod post;
mod weather;

// Re-export commonly used types
pub use post::{Post, PostDraft};
pub use weather::{OpenWeatherResponse, Weather, WeatherCondition, WeatherMain};
