//! Demonstration Services
//!
//! Typed wrappers over two public APIs, showing the caching client in use.

mod posts;
mod weather;

pub use posts::{PostsService, POSTS_BASE_URL};
pub use weather::{WeatherService, WEATHER_API_KEY_VAR, WEATHER_BASE_URL};
