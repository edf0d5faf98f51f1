//! Recommendation filter.
//!
//! Derives a coarse catalog query (category, mood, price ceiling) from the
//! same free text the scoring engine sees, runs it against the catalog store,
//! and returns up to [`MAX_RECOMMENDATIONS`] products alongside the score.
//! Relevance is implicit in the filter; individual products are never ranked.

use crate::core::catalog::{self, CATEGORIES, CatalogFilter};
use crate::core::score;
use crate::entities::product;
use crate::errors::Result;
use regex::Regex;
use sea_orm::DatabaseConnection;
use std::sync::LazyLock;

/// Moods recognized in free text, scanned in order; first substring match wins.
pub const MOODS: [&str; 5] = ["spicy", "adventurous", "comfort", "indulgent", "healthy"];

/// Upper bound on the number of products returned by [`recommend`].
pub const MAX_RECOMMENDATIONS: usize = 5;

// First contiguous digit run, optionally preceded by a currency symbol.
#[allow(clippy::expect_used)] // literal pattern, exercised by every test below
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?(\d+)").expect("price pattern is valid"));

/// Coarse catalog query derived from one utterance.
///
/// All fields are derived from text, never supplied directly by the
/// conversational caller. Unset fields leave the corresponding catalog
/// predicate off.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendationQuery {
    /// Detected menu category, if any
    pub category: Option<String>,
    /// Detected mood, if any
    pub mood: Option<String>,
    /// Detected price ceiling, if any
    pub max_price: Option<f64>,
}

/// The result of the conversational flow: score plus a bounded product list.
#[derive(Debug)]
pub struct Recommendation {
    /// Interest score for the utterance, in `[0,100]`
    pub interest_score: i32,
    /// Up to [`MAX_RECOMMENDATIONS`] products, in store order
    pub products: Vec<product::Model>,
}

/// Derives (category, mood, max price) from free text.
///
/// Category and mood detection is a raw first-match substring scan over the
/// fixed enumerations, intentionally order-sensitive and fragile (a category
/// name appearing inside a longer word still matches). Behavior parity with
/// the deployed rule set matters more than robustness here, so the scan is
/// reproduced faithfully rather than "fixed".
///
/// The price filter takes the first contiguous digit run, with integer
/// precision only; a run too large to parse silently means no price filter.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn derive_query(user_text: &str) -> RecommendationQuery {
    let text = user_text.to_lowercase();

    let category = CATEGORIES
        .iter()
        .find(|cat| text.contains(&cat.to_lowercase()))
        .map(|cat| (*cat).to_string());

    let mood = MOODS
        .iter()
        .find(|m| text.contains(*m))
        .map(|m| (*m).to_string());

    let max_price = PRICE_RE
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<i64>().ok())
        .map(|n| n as f64);

    RecommendationQuery {
        category,
        mood,
        max_price,
    }
}

/// Runs the full conversational flow for one utterance.
///
/// Scores the text, derives a query, and returns the first
/// [`MAX_RECOMMENDATIONS`] matching products in store order. An empty result
/// list is a normal outcome, not an error; the score is returned either way.
/// Dietary exclusion is never applied in this derived flow.
///
/// # Errors
/// Returns an error if the catalog query fails; there is no retry or
/// partial result.
pub async fn recommend(db: &DatabaseConnection, user_text: &str) -> Result<Recommendation> {
    let interest_score = score::interest_score(user_text);
    let query = derive_query(user_text);

    let filter = CatalogFilter {
        category: query.category,
        max_price: query.max_price,
        mood: query.mood,
        without_allergen: None,
    };
    let mut products = catalog::query_products(db, &filter).await?;
    products.truncate(MAX_RECOMMENDATIONS);

    Ok(Recommendation {
        interest_score,
        products,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::TagList;
    use crate::test_utils::{sample_product, setup_test_db};

    #[test]
    fn test_derive_query_sample_utterance() {
        // "burgers" (the category name) is not a substring, "burger" alone
        // does not match it; mood "spicy" and the digit run "10" do
        let query =
            derive_query("I'll take it, this is amazing, how much for the spicy burger under $10");
        assert_eq!(query.category, None);
        assert_eq!(query.mood.as_deref(), Some("spicy"));
        assert_eq!(query.max_price, Some(10.0));
    }

    #[test]
    fn test_derive_query_category_and_mood() {
        let query = derive_query("pizza for a comfort evening under 15");
        assert_eq!(query.category.as_deref(), Some("Pizza"));
        assert_eq!(query.mood.as_deref(), Some("comfort"));
        assert_eq!(query.max_price, Some(15.0));
    }

    #[test]
    fn test_derive_query_first_category_in_scan_order_wins() {
        // Both "burgers" and "pizza" appear; "Burgers" is scanned first
        let query = derive_query("burgers or pizza, surprise me");
        assert_eq!(query.category.as_deref(), Some("Burgers"));
    }

    #[test]
    fn test_derive_query_first_mood_in_scan_order_wins() {
        let query = derive_query("something spicy but also comfort food");
        assert_eq!(query.mood.as_deref(), Some("spicy"));
    }

    #[test]
    fn test_derive_query_multi_word_category() {
        let query = derive_query("show me the salads & healthy options please");
        assert_eq!(query.category.as_deref(), Some("Salads & Healthy Options"));
        // "healthy" inside the category name also trips the mood scan
        assert_eq!(query.mood.as_deref(), Some("healthy"));
    }

    #[test]
    fn test_derive_query_price_takes_first_digit_run() {
        let query = derive_query("2 pizzas under $12 or maybe 20");
        assert_eq!(query.max_price, Some(2.0));

        let query = derive_query("under $12 or maybe 20");
        assert_eq!(query.max_price, Some(12.0));
    }

    #[test]
    fn test_derive_query_fractional_prices_keep_integer_part() {
        // Integer precision only: the digit run stops at the decimal point
        let query = derive_query("under $10.50");
        assert_eq!(query.max_price, Some(10.0));
    }

    #[test]
    fn test_derive_query_no_signals() {
        let query = derive_query("surprise me");
        assert_eq!(query, RecommendationQuery::default());
    }

    #[test]
    fn test_derive_query_unparseable_digit_run_means_no_filter() {
        // A digit run beyond i64 range parses to nothing, silently
        let query = derive_query("send 99999999999999999999999999 tacos");
        assert_eq!(query.max_price, None);
    }

    #[tokio::test]
    async fn test_recommend_truncates_to_five() -> Result<()> {
        let db = setup_test_db().await?;

        for i in 1..=7 {
            let mut model = sample_product(&format!("FF{i:03}"), &format!("Burger {i}"));
            model.category = "Burgers".to_string();
            model.price = 8.0;
            catalog::insert_product(&db, model).await?;
        }

        let rec = recommend(&db, "i want a burger").await?;
        assert_eq!(rec.products.len(), MAX_RECOMMENDATIONS);
        // "burger" is a specific preference
        assert_eq!(rec.interest_score, 15);
        Ok(())
    }

    #[tokio::test]
    async fn test_recommend_applies_derived_filters() -> Result<()> {
        let db = setup_test_db().await?;

        let mut cheap_comfort = sample_product("FF001", "Cozy Pizza");
        cheap_comfort.category = "Pizza".to_string();
        cheap_comfort.price = 9.0;
        cheap_comfort.mood_tags = TagList::from_slice(&["comfort"]);
        catalog::insert_product(&db, cheap_comfort).await?;

        let mut pricey = sample_product("FF002", "Truffle Pizza");
        pricey.category = "Pizza".to_string();
        pricey.price = 18.0;
        pricey.mood_tags = TagList::from_slice(&["comfort"]);
        catalog::insert_product(&db, pricey).await?;

        let mut wrong_mood = sample_product("FF003", "Daredevil Pizza");
        wrong_mood.category = "Pizza".to_string();
        wrong_mood.price = 9.0;
        wrong_mood.mood_tags = TagList::from_slice(&["adventurous"]);
        catalog::insert_product(&db, wrong_mood).await?;

        let rec = recommend(&db, "pizza for a comfort evening under 15").await?;
        assert_eq!(rec.products.len(), 1);
        assert_eq!(rec.products[0].product_id, "FF001");
        Ok(())
    }

    #[tokio::test]
    async fn test_recommend_empty_result_is_normal() -> Result<()> {
        let db = setup_test_db().await?;

        let rec = recommend(&db, "i'll take it, something amazing").await?;
        assert!(rec.products.is_empty());
        // order intent (30) + enthusiasm (8)
        assert_eq!(rec.interest_score, 38);
        Ok(())
    }
}
