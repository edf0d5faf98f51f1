//! Autocomplete handlers for Discord slash command parameters.
//!
//! This module provides autocomplete functionality for command parameters like
//! product names, menu categories, and mood tags, improving the user experience
//! by suggesting valid options as the user types.

use crate::{
    bot::BotData,
    core::{catalog, recommend},
    errors::Error,
};

/// Provides autocomplete suggestions for product names.
///
/// This function queries the database for products that match the user's
/// partial input and returns up to 25 matching product names.
///
/// # Arguments
/// * `ctx` - The poise context containing the database connection
/// * `partial` - The partial string the user has typed so far
///
/// # Returns
/// A vector of product names that match the partial input
pub async fn autocomplete_product_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let db = &ctx.data().database;

    // Get all products; names come back alphabetically already
    let Ok(products) = catalog::get_all_products(db).await else {
        return Vec::new();
    };

    let partial_lower = partial.to_lowercase();

    products
        .into_iter()
        .filter(|prod| prod.name.to_lowercase().contains(&partial_lower))
        .map(|prod| prod.name)
        .take(25) // Discord autocomplete limit
        .collect()
}

/// Provides autocomplete suggestions for menu categories.
///
/// Categories come from the fixed catalog enumeration, so no database
/// access is needed.
///
/// # Arguments
/// * `_ctx` - The poise context (unused, but required by poise signature)
/// * `partial` - The partial string the user has typed so far
///
/// # Returns
/// A vector of category names that match the partial input
pub async fn autocomplete_category(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    catalog::CATEGORIES
        .iter()
        .filter(|cat| cat.to_lowercase().contains(&partial_lower))
        .map(|&cat| cat.to_string())
        .collect()
}

/// Provides autocomplete suggestions for mood tags.
///
/// Moods come from the fixed list the recommendation filter recognizes.
///
/// # Arguments
/// * `_ctx` - The poise context (unused, but required by poise signature)
/// * `partial` - The partial string the user has typed so far
///
/// # Returns
/// A vector of mood names that match the partial input
pub async fn autocomplete_mood(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    recommend::MOODS
        .iter()
        .filter(|mood| mood.contains(&partial_lower))
        .map(|&mood| mood.to_string())
        .collect()
}
