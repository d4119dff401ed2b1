//! Weather Model
//!
//! Forecast annotation attached to meal listings by the
//! weather-enrichment collaborator. Has no bearing on reservation
//! correctness.

use serde::{Deserialize, Serialize};

/// Daily weather forecast for a meal date
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub description: String,
    pub min_temperature: f64,
    pub max_temperature: f64,
    /// Probability in percent, as reported by the upstream source
    pub precipitation_probability: String,
}

/// Hit/miss counters for the weather forecast cache
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeatherCacheStats {
    pub hits: u64,
    pub misses: u64,
}
