//! 指标路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/metrics/weather-cache | GET | 天气缓存命中统计 |

use axum::{Json, Router, extract::State, routing::get};

use shared::models::WeatherCacheStats;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/metrics/weather-cache", get(weather_cache))
}

/// GET /api/metrics/weather-cache - {hits, misses}
async fn weather_cache(State(state): State<ServerState>) -> Json<WeatherCacheStats> {
    Json(state.weather.cache_stats())
}
