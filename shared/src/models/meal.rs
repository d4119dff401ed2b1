//! Meal Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::weather::WeatherForecast;

/// Meal entity
///
/// `capacity` is fixed at creation and owned by the catalog. The
/// reserved-seat count lives in the availability ledger, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub capacity: u32,
}

/// Meal as returned by the API, joined with its restaurant and
/// annotated with remaining seats and an optional weather forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub capacity: u32,
    pub remaining: u32,
    pub restaurant_id: i64,
    pub restaurant_name: String,
    pub restaurant_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherForecast>,
}
