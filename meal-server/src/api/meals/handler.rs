//! Meal API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use shared::error::AppResult;
use shared::models::MealView;

use crate::api::convert;
use crate::core::ServerState;

const DEFAULT_DAYS: u32 = 7;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealsQuery {
    restaurant_id: i64,
    days: Option<u32>,
}

/// GET /api/meals?restaurantId=&days= - 按餐厅过滤的餐品列表
///
/// Filter semantics: an unknown restaurant yields an empty list, the
/// resource-style `/api/restaurants/{id}/meals` route is the one that
/// 404s.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MealsQuery>,
) -> AppResult<Json<Vec<MealView>>> {
    let days = query.days.unwrap_or(DEFAULT_DAYS);
    let views = convert::meal_views_for(&state, query.restaurant_id, days).await?;
    Ok(Json(views))
}
