//! Demo catalog data
//!
//! Seeds the same three Aveiro restaurants the frontend was built
//! against, each with two dishes per day for the coming week.

use chrono::{Duration, Utc};
use shared::models::{Meal, Restaurant};
use shared::util::snowflake_id;

use super::Catalog;

/// Days of meals to seed per restaurant
const SEED_DAYS: i64 = 7;

/// Draw an id not yet present in the catalog
///
/// The snowflake scheme has 12 random bits per millisecond; a tight
/// seed loop can draw the whole batch inside one millisecond, so
/// re-draw on the rare collision.
fn fresh_meal_id(catalog: &Catalog) -> i64 {
    loop {
        let id = snowflake_id();
        if catalog.get_meal(id).is_none() {
            return id;
        }
    }
}

/// Populate the catalog with demo restaurants and meals
pub fn seed_demo_data(catalog: &Catalog) {
    let restaurants = [
        (
            "Tasca do Manel",
            "Aveiro, Portugal",
            &[
                (
                    "Francesinha",
                    "Traditional Porto sandwich with meat, cheese and spicy sauce",
                    40u32,
                ),
                (
                    "Bacalhau à Brás",
                    "Codfish with fried potatoes, onions, eggs and olives",
                    30,
                ),
            ][..],
        ),
        (
            "Marisqueira Atlântico",
            "Costa Nova, Portugal",
            &[
                (
                    "Cataplana de Marisco",
                    "Seafood stew with clams, prawns and fish",
                    20,
                ),
                (
                    "Arroz de Tamboril",
                    "Monkfish rice with prawns and peppers",
                    25,
                ),
            ][..],
        ),
        (
            "Pizzaria Bella Italia",
            "Aveiro, Portugal",
            &[
                (
                    "Pizza Margherita",
                    "Classic pizza with tomato sauce, mozzarella and basil",
                    35,
                ),
                (
                    "Pizza Pepperoni",
                    "Pizza with tomato sauce, mozzarella and pepperoni",
                    35,
                ),
            ][..],
        ),
    ];

    let today = Utc::now().date_naive();

    for (name, description, dishes) in restaurants {
        let restaurant = Restaurant {
            id: snowflake_id(),
            name: name.to_string(),
            description: description.to_string(),
        };
        let restaurant_id = restaurant.id;
        catalog.insert_restaurant(restaurant);

        for day in 0..SEED_DAYS {
            let date = today + Duration::days(day);
            for (dish, dish_description, capacity) in dishes {
                catalog.insert_meal(Meal {
                    id: fresh_meal_id(catalog),
                    restaurant_id,
                    name: dish.to_string(),
                    description: dish_description.to_string(),
                    date,
                    capacity: *capacity,
                });
            }
        }
    }

    tracing::info!(
        restaurants = catalog.restaurant_count(),
        meals = catalog.meal_count(),
        "Seeded demo catalog"
    );
}
