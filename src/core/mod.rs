//! Core business logic for `FoodieBot`.
//!
//! Everything in here is framework-agnostic: the Discord layer calls these
//! functions, and the tests exercise them directly against in-memory `SQLite`.

/// Catalog store operations - insert, filtered query, and startup seeding
pub mod catalog;
/// Random product generator for seeding a demo catalog
pub mod generate;
/// Recommendation filter - derives a catalog query from free text
pub mod recommend;
/// Interest scoring engine - maps free text to a score in [0,100]
pub mod score;
