//! DTO conversion helpers
//!
//! Every endpoint returns the same typed view shapes, assembled here
//! by joining records with the catalog. A reservation whose meal or
//! restaurant is missing from the catalog is an internal inconsistency,
//! not a client error.

use shared::error::{AppError, AppResult};
use shared::models::{Meal, MealView, Reservation, ReservationStatus, ReservationView};

use crate::core::ServerState;

pub fn reservation_view(
    state: &ServerState,
    reservation: &Reservation,
) -> AppResult<ReservationView> {
    let meal = state.catalog.get_meal(reservation.meal_id).ok_or_else(|| {
        AppError::internal(format!(
            "meal {} missing for reservation {}",
            reservation.meal_id, reservation.code
        ))
    })?;
    let restaurant = state
        .catalog
        .get_restaurant(meal.restaurant_id)
        .ok_or_else(|| {
            AppError::internal(format!(
                "restaurant {} missing for meal {}",
                meal.restaurant_id, meal.id
            ))
        })?;

    Ok(ReservationView {
        token: reservation.code.clone(),
        created_at: reservation.created_at,
        status: reservation.status,
        used: reservation.status == ReservationStatus::Used,
        party_size: reservation.party_size,
        meal_id: meal.id,
        meal_name: meal.name,
        meal_date: meal.date,
        restaurant_id: restaurant.id,
        restaurant_name: restaurant.name,
    })
}

pub async fn meal_view(state: &ServerState, meal: Meal) -> AppResult<MealView> {
    let restaurant = state
        .catalog
        .get_restaurant(meal.restaurant_id)
        .ok_or_else(|| {
            AppError::internal(format!(
                "restaurant {} missing for meal {}",
                meal.restaurant_id, meal.id
            ))
        })?;
    let remaining = state.reservations.remaining_capacity(meal.id)?;
    let weather = state.weather.forecast_for(meal.date).await;

    Ok(MealView {
        id: meal.id,
        name: meal.name,
        description: meal.description,
        date: meal.date,
        capacity: meal.capacity,
        remaining,
        restaurant_id: restaurant.id,
        restaurant_name: restaurant.name,
        restaurant_description: restaurant.description,
        weather,
    })
}

/// Meal views for one restaurant over the coming `days` days
///
/// Unknown restaurants yield an empty list here; routes that name the
/// restaurant as a resource 404 before calling in.
pub async fn meal_views_for(
    state: &ServerState,
    restaurant_id: i64,
    days: u32,
) -> AppResult<Vec<MealView>> {
    let meals = state.catalog.meals_for_restaurant(restaurant_id, days);
    let mut views = Vec::with_capacity(meals.len());
    for meal in meals {
        views.push(meal_view(state, meal).await?);
    }
    Ok(views)
}
