//! Restaurant and meal catalog
//!
//! Read-mostly collaborator owned outside the reservation core: the
//! engine reads meal capacity from here, never writes. Kept behind a
//! pair of RwLock'd maps; mutation happens only at seed time and in
//! tests, every query works on a snapshot taken under the read guard.

mod seed;

pub use seed::seed_demo_data;

use chrono::{Duration, Utc};
use parking_lot::RwLock;
use shared::models::{Meal, Restaurant};
use std::collections::HashMap;

/// In-memory restaurant/meal catalog
#[derive(Debug, Default)]
pub struct Catalog {
    restaurants: RwLock<HashMap<i64, Restaurant>>,
    meals: RwLock<HashMap<i64, Meal>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            restaurants: RwLock::new(HashMap::new()),
            meals: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert_restaurant(&self, restaurant: Restaurant) {
        self.restaurants
            .write()
            .insert(restaurant.id, restaurant);
    }

    pub fn insert_meal(&self, meal: Meal) {
        self.meals.write().insert(meal.id, meal);
    }

    pub fn get_restaurant(&self, id: i64) -> Option<Restaurant> {
        self.restaurants.read().get(&id).cloned()
    }

    pub fn get_meal(&self, id: i64) -> Option<Meal> {
        self.meals.read().get(&id).cloned()
    }

    /// All restaurants, sorted by name for stable listings
    pub fn list_restaurants(&self) -> Vec<Restaurant> {
        let mut all: Vec<_> = self.restaurants.read().values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Meals offered by a restaurant within the next `days` days
    ///
    /// The window is `[today, today + days - 1]`, matching what the
    /// booking UI shows. `days = 0` yields an empty list.
    pub fn meals_for_restaurant(&self, restaurant_id: i64, days: u32) -> Vec<Meal> {
        if days == 0 {
            return Vec::new();
        }
        let today = Utc::now().date_naive();
        let end = today + Duration::days(i64::from(days) - 1);

        let mut meals: Vec<_> = self
            .meals
            .read()
            .values()
            .filter(|m| m.restaurant_id == restaurant_id)
            .filter(|m| m.date >= today && m.date <= end)
            .cloned()
            .collect();
        meals.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        meals
    }

    pub fn restaurant_count(&self) -> usize {
        self.restaurants.read().len()
    }

    pub fn meal_count(&self) -> usize {
        self.meals.read().len()
    }
}
