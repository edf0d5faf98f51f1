//! Product entity - Represents one item in the fast-food catalog.
//!
//! Products are created once, by the generator or a seed-file import, and are
//! read-only afterwards. The list-valued attributes (ingredients, dietary
//! tags, mood tags, allergens) are native string vectors on the Rust side and
//! JSON text columns in `SQLite`, so catalog filters can run containment
//! checks against the serialized form.

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An ordered list of short string tags, stored as a JSON text column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TagList(pub Vec<String>);

impl TagList {
    /// Builds a list from string slices; mostly a seeding and test convenience.
    #[must_use]
    pub fn from_slice(items: &[&str]) -> Self {
        Self(items.iter().map(|s| (*s).to_string()).collect())
    }
}

impl std::ops::Deref for TagList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for TagList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product (e.g., "FF001")
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: String,
    /// Display name of the product (e.g., "Spicy Fusion Burger")
    pub name: String,
    /// Menu category, one of the fixed enumeration in `core::catalog::CATEGORIES`
    pub category: String,
    /// Short marketing description
    pub description: String,
    /// Ingredient names
    pub ingredients: TagList,
    /// Price in dollars, non-negative
    pub price: f64,
    /// Calorie count
    pub calories: i32,
    /// Preparation time range (e.g., "10-15 mins")
    pub prep_time: String,
    /// Dietary tags (e.g., "vegetarian", "gluten_free")
    pub dietary_tags: TagList,
    /// Mood tags (e.g., "comfort", "indulgent")
    pub mood_tags: TagList,
    /// Allergens present in the product
    pub allergens: TagList,
    /// Popularity score used for display only
    pub popularity_score: i32,
    /// Whether this is a chef special
    pub chef_special: bool,
    /// Whether this is a limited-time offering
    pub limited_time: bool,
    /// Spice level from 1 (mild) to 10 (extreme)
    pub spice_level: i32,
    /// Prompt string for generating a product image
    pub image_prompt: String,
}

/// Products have no relationships to other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_tag_list_serializes_as_json_array() {
        let tags = TagList::from_slice(&["comfort", "indulgent"]);
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"["comfort","indulgent"]"#);

        let back: TagList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }

    #[test]
    fn test_tag_list_derefs_to_slice() {
        let tags = TagList::from_slice(&["gluten", "soy"]);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.join(", "), "gluten, soy");
        assert!(TagList::default().is_empty());
    }
}
