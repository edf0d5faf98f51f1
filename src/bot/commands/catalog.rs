//! Catalog browsing Discord commands - `menu` and `product_info`.
//!
//! These commands query the catalog store directly, bypassing the
//! text-derivation step. `/menu` is the one surface that exposes the
//! dietary-exclusion filter.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::catalog::{self, CatalogFilter},
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Browses the catalog with optional filters.
    ///
    /// All filters combine: category is an exact match, the price ceiling is
    /// inclusive, mood matches against the product's mood tags, and
    /// `without_allergen` hides any product whose allergen list mentions the
    /// given allergen.
    #[poise::command(slash_command, prefix_command)]
    pub async fn menu(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Menu category to browse"]
        #[autocomplete = "autocomplete::autocomplete_category"]
        category: Option<String>,
        #[description = "Maximum price in dollars"] max_price: Option<f64>,
        #[description = "Mood tag to match"]
        #[autocomplete = "autocomplete::autocomplete_mood"]
        mood: Option<String>,
        #[description = "Exclude products containing this allergen"] without_allergen: Option<
            String,
        >,
    ) -> Result<()> {
        const MENU_PAGE_SIZE: usize = 10;

        // Validate price parameter
        if let Some(price) = max_price {
            if price.is_nan() || price.is_infinite() || price < 0.0 {
                ctx.say("❌ Invalid price: must be a non-negative number")
                    .await?;
                return Ok(());
            }
        }

        let db = &ctx.data().database;
        let filter = CatalogFilter {
            category,
            max_price,
            mood,
            without_allergen,
        };
        let mut products = catalog::query_products(db, &filter).await?;

        if products.is_empty() {
            ctx.say("📋 No products match those filters.").await?;
            return Ok(());
        }

        let total = products.len();
        products.truncate(MENU_PAGE_SIZE);

        let mut reply = format!("**FoodieBot Menu** ({total} match(es))\n");
        for product in &products {
            writeln!(
                reply,
                "• `{}` {} - ${:.2} ({})",
                product.product_id, product.name, product.price, product.category
            )?;
        }
        if total > MENU_PAGE_SIZE {
            writeln!(reply, "...and {} more. Narrow the filters to see them.", total - MENU_PAGE_SIZE)?;
        }

        ctx.say(reply).await?;
        Ok(())
    }

    /// Shows the full detail card for one product, looked up by name.
    #[poise::command(slash_command, prefix_command)]
    pub async fn product_info(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Product name"]
        #[autocomplete = "autocomplete::autocomplete_product_name"]
        name: String,
    ) -> Result<()> {
        let db = &ctx.data().database;

        let Some(product) = catalog::get_product_by_name(db, &name).await? else {
            ctx.say(format!(
                "❌ Product '{name}' not found. Try `/menu` to browse the catalog."
            ))
            .await?;
            return Ok(());
        };

        let mut card = format!("**{}** (`{}`)\n", product.name, product.product_id);
        writeln!(card, "{}", product.description)?;
        writeln!(
            card,
            "Category: {} | Price: ${:.2} | Calories: {}",
            product.category, product.price, product.calories
        )?;
        writeln!(
            card,
            "Prep time: {} | Spice level: {}/10 | Popularity: {}",
            product.prep_time, product.spice_level, product.popularity_score
        )?;
        writeln!(card, "Ingredients: {}", product.ingredients.join(", "))?;
        if !product.dietary_tags.is_empty() {
            writeln!(card, "Dietary: {}", product.dietary_tags.join(", "))?;
        }
        if !product.mood_tags.is_empty() {
            writeln!(card, "Mood: {}", product.mood_tags.join(", "))?;
        }
        if !product.allergens.is_empty() {
            writeln!(card, "Allergens: {}", product.allergens.join(", "))?;
        }
        if product.chef_special {
            writeln!(card, "⭐ Chef special")?;
        }
        if product.limited_time {
            writeln!(card, "⏳ Limited time")?;
        }

        ctx.say(card).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
