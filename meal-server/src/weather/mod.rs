//! Weather-enrichment cache
//!
//! Collaborator service that decorates meal listings with a daily
//! forecast. Forecasts come from the IPMA open-data API for Aveiro and
//! are cached per date with a TTL; the hit/miss counters feed the
//! `/api/metrics/weather-cache` endpoint the load tester watches.
//!
//! Weather has no bearing on reservation correctness: an upstream
//! failure logs a warning and the meals go out un-annotated.

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use serde::Deserialize;
use shared::error::{AppError, AppResult};
use shared::models::{WeatherCacheStats, WeatherForecast};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Source of daily forecasts
///
/// Seam for tests; production uses [`IpmaForecastSource`].
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// All daily forecasts the upstream currently publishes
    async fn daily_forecasts(&self) -> AppResult<Vec<(NaiveDate, WeatherForecast)>>;
}

/// IPMA daily city forecast (api.ipma.pt)
pub struct IpmaForecastSource {
    client: reqwest::Client,
    api_url: String,
    city_code: String,
}

#[derive(Debug, Deserialize)]
struct IpmaResponse {
    data: Vec<IpmaDay>,
}

#[derive(Debug, Deserialize)]
struct IpmaDay {
    #[serde(rename = "forecastDate")]
    forecast_date: NaiveDate,
    #[serde(rename = "tMin")]
    t_min: String,
    #[serde(rename = "tMax")]
    t_max: String,
    #[serde(rename = "precipitaProb")]
    precipita_prob: String,
    #[serde(rename = "idWeatherType")]
    id_weather_type: i32,
}

/// Short English label for the IPMA weather type id
fn describe_weather_type(id: i32) -> &'static str {
    match id {
        1 => "Clear sky",
        2 | 3 => "Partly cloudy",
        4 | 5 | 24 | 25 | 27 => "Cloudy",
        6 | 9 | 10 => "Showers",
        7 | 8 | 11 | 12 | 13 | 14 | 15 => "Rain",
        16 | 17 | 26 => "Fog",
        18 => "Snow",
        19 | 20 | 21 | 23 => "Thunderstorms",
        22 => "Hail",
        28 => "Snow showers",
        29 | 30 => "Rain and thunder",
        _ => "Unknown",
    }
}

impl IpmaForecastSource {
    pub fn new(api_url: impl Into<String>, city_code: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            city_code: city_code.into(),
        }
    }
}

#[async_trait]
impl ForecastSource for IpmaForecastSource {
    async fn daily_forecasts(&self) -> AppResult<Vec<(NaiveDate, WeatherForecast)>> {
        let url = format!("{}/{}.json", self.api_url, self.city_code);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::network(format!("IPMA request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| AppError::network(format!("IPMA returned an error: {}", e)))?;

        let body: IpmaResponse = response
            .json()
            .await
            .map_err(|e| AppError::network(format!("IPMA response unparsable: {}", e)))?;

        Ok(body
            .data
            .into_iter()
            .map(|day| {
                let forecast = WeatherForecast {
                    description: describe_weather_type(day.id_weather_type).to_string(),
                    min_temperature: day.t_min.parse().unwrap_or(f64::NAN),
                    max_temperature: day.t_max.parse().unwrap_or(f64::NAN),
                    precipitation_probability: day.precipita_prob,
                };
                (day.forecast_date, forecast)
            })
            .collect())
    }
}

struct CacheEntry {
    forecast: WeatherForecast,
    fetched_at: Instant,
}

/// Per-date forecast cache with hit/miss accounting
pub struct WeatherService {
    source: Arc<dyn ForecastSource>,
    cache: DashMap<NaiveDate, CacheEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
    ttl: Duration,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("cached_dates", &self.cache.len())
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl WeatherService {
    pub fn new(source: Arc<dyn ForecastSource>, ttl: Duration) -> Self {
        Self {
            source,
            cache: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            ttl,
        }
    }

    /// Forecast for a date, from cache when fresh
    ///
    /// A miss refreshes the cache for every date the upstream
    /// publishes, so one fetch serves a whole week of meal listings.
    /// Returns `None` for dates the upstream does not cover or when
    /// the fetch fails.
    pub async fn forecast_for(&self, date: NaiveDate) -> Option<WeatherForecast> {
        if let Some(entry) = self.cache.get(&date) {
            if entry.fetched_at.elapsed() <= self.ttl {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.forecast.clone());
            }
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        match self.source.daily_forecasts().await {
            Ok(days) => {
                let fetched_at = Instant::now();
                let mut wanted = None;
                for (day, forecast) in days {
                    if day == date {
                        wanted = Some(forecast.clone());
                    }
                    self.cache.insert(day, CacheEntry {
                        forecast,
                        fetched_at,
                    });
                }
                wanted
            }
            Err(err) => {
                tracing::warn!(%err, %date, "Weather fetch failed, listing goes un-annotated");
                None
            }
        }
    }

    /// Cache hit/miss counters for the metrics endpoint
    pub fn cache_stats(&self) -> WeatherCacheStats {
        WeatherCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
