//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MealView, Restaurant, ReservationView};

use crate::api::convert;
use crate::core::ServerState;

/// Days of meals the booking UI shows by default
const DEFAULT_DAYS: u32 = 7;

#[derive(Debug, Deserialize)]
pub struct DaysQuery {
    days: Option<u32>,
}

fn restaurant_or_404(state: &ServerState, id: i64) -> AppResult<Restaurant> {
    state.catalog.get_restaurant(id).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::RestaurantNotFound,
            format!("Restaurant {} not found", id),
        )
    })
}

/// GET /api/restaurants - 获取所有餐厅
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Restaurant>>> {
    Ok(Json(state.catalog.list_restaurants()))
}

/// GET /api/restaurants/:id - 获取单个餐厅
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Restaurant>> {
    Ok(Json(restaurant_or_404(&state, id)?))
}

/// GET /api/restaurants/:id/meals - 餐厅未来数天的餐品
pub async fn meals(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<DaysQuery>,
) -> AppResult<Json<Vec<MealView>>> {
    restaurant_or_404(&state, id)?;
    let days = query.days.unwrap_or(DEFAULT_DAYS);
    Ok(Json(convert::meal_views_for(&state, id, days).await?))
}

/// GET /api/restaurants/:id/reservations/active - 员工端的有效预约列表
pub async fn active_reservations(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<ReservationView>>> {
    restaurant_or_404(&state, id)?;

    let mut active = state.reservations.active_for_restaurant(id);
    active.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    let views = active
        .iter()
        .map(|r| convert::reservation_view(&state, r))
        .collect::<AppResult<Vec<_>>>()?;
    Ok(Json(views))
}
