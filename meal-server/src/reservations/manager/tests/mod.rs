use super::*;
use crate::catalog::Catalog;
use chrono::{Duration, Utc};
use shared::models::{Meal, Restaurant, ReservationStatus};

mod test_codes;
mod test_concurrency;
mod test_lifecycle;

// Fixture ids, readable in assertions
pub const TASCA: i64 = 1;
pub const MARISQUEIRA: i64 = 2;

pub const MEAL_FRANCESINHA: i64 = 10; // Tasca, capacity 5
pub const MEAL_BACALHAU: i64 = 11; // Tasca, capacity 1
pub const MEAL_CATAPLANA: i64 = 20; // Marisqueira, capacity 3

fn test_catalog() -> Arc<Catalog> {
    let catalog = Catalog::new();
    catalog.insert_restaurant(Restaurant {
        id: TASCA,
        name: "Tasca do Manel".into(),
        description: "Aveiro, Portugal".into(),
    });
    catalog.insert_restaurant(Restaurant {
        id: MARISQUEIRA,
        name: "Marisqueira Atlântico".into(),
        description: "Costa Nova, Portugal".into(),
    });

    let today = Utc::now().date_naive();
    for (id, restaurant_id, name, capacity) in [
        (MEAL_FRANCESINHA, TASCA, "Francesinha", 5u32),
        (MEAL_BACALHAU, TASCA, "Bacalhau à Brás", 1),
        (MEAL_CATAPLANA, MARISQUEIRA, "Cataplana de Marisco", 3),
    ] {
        catalog.insert_meal(Meal {
            id,
            restaurant_id,
            name: name.into(),
            description: String::new(),
            date: today + Duration::days(1),
            capacity,
        });
    }
    Arc::new(catalog)
}

fn create_test_manager() -> ReservationsManager {
    ReservationsManager::new(test_catalog())
}
