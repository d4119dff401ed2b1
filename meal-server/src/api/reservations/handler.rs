//! Reservation API Handlers
//!
//! Thin wrappers over the lifecycle engine: extract, delegate, convert
//! to the view shape. The code-addressed routes behave exactly like
//! the token-addressed ones - the engine normalizes either way, the
//! separate paths only exist for the staff UI.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::error::AppResult;
use shared::models::ReservationView;

use crate::api::convert;
use crate::core::ServerState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationQuery {
    meal_id: i64,
    /// Seats to claim; defaults to 1 for the single-diner booking flow
    party_size: Option<u32>,
}

/// POST /api/reservations?mealId=&partySize= - 创建预约
pub async fn create(
    State(state): State<ServerState>,
    Query(query): Query<CreateReservationQuery>,
) -> AppResult<Json<ReservationView>> {
    let reservation = state
        .reservations
        .create(query.meal_id, query.party_size.unwrap_or(1))?;
    Ok(Json(convert::reservation_view(&state, &reservation)?))
}

/// GET /api/reservations/:token - 按令牌查询预约
pub async fn get_by_token(
    State(state): State<ServerState>,
    Path(token): Path<String>,
) -> AppResult<Json<ReservationView>> {
    let reservation = state.reservations.get(&token)?;
    Ok(Json(convert::reservation_view(&state, &reservation)?))
}

/// PUT /api/reservations/:token/use - 核销预约 (check-in)
pub async fn use_by_token(
    State(state): State<ServerState>,
    Path(token): Path<String>,
) -> AppResult<Json<ReservationView>> {
    let reservation = state.reservations.mark_used(&token)?;
    Ok(Json(convert::reservation_view(&state, &reservation)?))
}

/// DELETE /api/reservations/:token - 取消预约，座位返还
pub async fn cancel(
    State(state): State<ServerState>,
    Path(token): Path<String>,
) -> AppResult<Json<ReservationView>> {
    let reservation = state.reservations.cancel(&token)?;
    Ok(Json(convert::reservation_view(&state, &reservation)?))
}

/// GET /api/reservations/code/:code - 员工端按代码查找
pub async fn find_by_code(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<ReservationView>> {
    let reservation = state.reservations.get(&code)?;
    Ok(Json(convert::reservation_view(&state, &reservation)?))
}

/// PUT /api/reservations/code/:code/use - 员工端按代码核销
pub async fn use_by_code(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<ReservationView>> {
    let reservation = state.reservations.mark_used(&code)?;
    Ok(Json(convert::reservation_view(&state, &reservation)?))
}
