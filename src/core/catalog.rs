//! Catalog store operations.
//!
//! This module provides insert and filtered-lookup operations over the
//! products table, plus the startup seeding flow. Products are write-once:
//! nothing here updates or deletes a row. Query results come back in whatever
//! order the store produces; callers must not rely on any particular ordering.

use crate::config::settings::CatalogConfig;
use crate::core::generate;
use crate::entities::{Product, product};
use crate::errors::{Error, Result};
use sea_orm::{Condition, PaginatorTrait, QueryOrder, Set, prelude::*};
use std::path::Path;
use tracing::{info, warn};

/// The fixed menu category enumeration, in detection-scan order.
pub const CATEGORIES: [&str; 10] = [
    "Burgers",
    "Pizza",
    "Fried Chicken",
    "Tacos & Wraps",
    "Sides & Appetizers",
    "Beverages",
    "Desserts",
    "Salads & Healthy Options",
    "Breakfast Items",
    "Limited Time Specials",
];

/// Optional predicates for a catalog query. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Exact category match
    pub category: Option<String>,
    /// Inclusive price ceiling
    pub max_price: Option<f64>,
    /// Mood tag that must appear in the product's mood-tag list
    pub mood: Option<String>,
    /// Allergen that must be absent from the product's allergen list
    pub without_allergen: Option<String>,
}

/// Inserts one product, failing if the identifier is already taken.
///
/// # Errors
/// Returns [`Error::DuplicateProduct`] if a product with the same identifier
/// exists, or a database error if the insert fails.
pub async fn insert_product(
    db: &DatabaseConnection,
    model: product::Model,
) -> Result<product::Model> {
    if Product::find_by_id(model.product_id.clone())
        .one(db)
        .await?
        .is_some()
    {
        return Err(Error::DuplicateProduct {
            product_id: model.product_id,
        });
    }

    let active = product::ActiveModel {
        product_id: Set(model.product_id),
        name: Set(model.name),
        category: Set(model.category),
        description: Set(model.description),
        ingredients: Set(model.ingredients),
        price: Set(model.price),
        calories: Set(model.calories),
        prep_time: Set(model.prep_time),
        dietary_tags: Set(model.dietary_tags),
        mood_tags: Set(model.mood_tags),
        allergens: Set(model.allergens),
        popularity_score: Set(model.popularity_score),
        chef_special: Set(model.chef_special),
        limited_time: Set(model.limited_time),
        spice_level: Set(model.spice_level),
        image_prompt: Set(model.image_prompt),
    };
    active.insert(db).await.map_err(Into::into)
}

/// Retrieves every product, ordered alphabetically by name.
///
/// Used by autocomplete suggestions, not by the recommendation flow.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific product by its (exact) display name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Counts all products in the catalog.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn count_products(db: &DatabaseConnection) -> Result<u64> {
    Product::find().count(db).await.map_err(Into::into)
}

/// Returns all products matching the filter.
///
/// The tag columns are JSON text, so containment checks run against the
/// serialized form: a mood must appear quoted (i.e., as a whole list
/// element), while an excluded allergen must be absent as a bare substring.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn query_products(
    db: &DatabaseConnection,
    filter: &CatalogFilter,
) -> Result<Vec<product::Model>> {
    let mut condition = Condition::all();

    if let Some(category) = &filter.category {
        condition = condition.add(product::Column::Category.eq(category.as_str()));
    }
    if let Some(max_price) = filter.max_price {
        condition = condition.add(product::Column::Price.lte(max_price));
    }
    if let Some(mood) = &filter.mood {
        let quoted = format!("\"{mood}\"");
        condition = condition.add(product::Column::MoodTags.contains(quoted.as_str()));
    }
    if let Some(allergen) = &filter.without_allergen {
        let pattern = format!("%{allergen}%");
        condition = condition.add(product::Column::Allergens.not_like(pattern.as_str()));
    }

    Product::find()
        .filter(condition)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Seeds an empty catalog on startup.
///
/// A configured JSON seed file wins when present; otherwise `seed_count`
/// products are generated. Duplicate identifiers are skipped with a warning
/// rather than aborting the seed. A non-empty catalog is left untouched.
///
/// # Errors
/// Returns an error if the seed file cannot be read or parsed, or if a
/// database operation fails.
pub async fn seed_catalog(db: &DatabaseConnection, config: &CatalogConfig) -> Result<()> {
    let existing = count_products(db).await?;
    if existing > 0 {
        info!("Catalog already holds {existing} products, skipping seed");
        return Ok(());
    }

    let models = match &config.seed_file {
        Some(path) if Path::new(path).exists() => {
            info!("Seeding catalog from '{path}'");
            load_seed_file(path)?
        }
        _ => {
            info!("Generating {} products for the catalog", config.seed_count);
            let mut rng = rand::thread_rng();
            generate::generate_products(&mut rng, config.seed_count)
        }
    };

    let total = models.len();
    let mut inserted = 0usize;
    for model in models {
        match insert_product(db, model).await {
            Ok(_) => inserted += 1,
            Err(Error::DuplicateProduct { product_id }) => {
                warn!("Skipping duplicate product id '{product_id}' during seeding");
            }
            Err(e) => return Err(e),
        }
    }

    info!("Seeded catalog with {inserted} of {total} products");
    Ok(())
}

/// Reads products from a JSON seed file (an array of full product records).
fn load_seed_file(path: &str) -> Result<Vec<product::Model>> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(Into::into)
}
