//! Shared test utilities for `FoodieBot`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test products with sensible defaults.

use crate::{
    core::catalog,
    entities::{TagList, product},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a product model with sensible defaults.
///
/// # Arguments
/// * `product_id` - Unique identifier (e.g., "FF001")
/// * `name` - Display name
///
/// # Defaults
/// * `category`: "Burgers"
/// * `price`: 9.99
/// * `mood_tags`: `["comfort"]`
/// * `allergens`: `["gluten"]`
///
/// Tests that need other values mutate the returned model before inserting.
#[must_use]
pub fn sample_product(product_id: &str, name: &str) -> product::Model {
    product::Model {
        product_id: product_id.to_string(),
        name: name.to_string(),
        category: "Burgers".to_string(),
        description: "Delicious burgers with unique flavors and fresh ingredients.".to_string(),
        ingredients: TagList::from_slice(&["beef patty", "brioche bun", "lettuce"]),
        price: 9.99,
        calories: 550,
        prep_time: "5-10 mins".to_string(),
        dietary_tags: TagList::from_slice(&["contains_gluten"]),
        mood_tags: TagList::from_slice(&["comfort"]),
        allergens: TagList::from_slice(&["gluten"]),
        popularity_score: 75,
        chef_special: false,
        limited_time: false,
        spice_level: 3,
        image_prompt: "image of a burger".to_string(),
    }
}

/// Inserts a product built from [`sample_product`].
pub async fn create_test_product(
    db: &DatabaseConnection,
    product_id: &str,
    name: &str,
) -> Result<product::Model> {
    catalog::insert_product(db, sample_product(product_id, name)).await
}
