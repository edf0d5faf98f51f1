//! Random product generator for seeding a demo catalog.
//!
//! Produces randomized but plausible fast-food products drawn from fixed
//! word, ingredient, and tag pools. The generator takes any [`Rng`] so tests
//! can seed it deterministically.

use crate::core::catalog::CATEGORIES;
use crate::entities::{TagList, product};
use rand::Rng;
use rand::seq::SliceRandom;

const NAME_WORDS: [&str; 11] = [
    "Spicy", "Classic", "Fusion", "Dragon", "Burger", "Taco", "Pizza", "Fresh", "Crispy",
    "Sweet", "Savory",
];

const DIETARY_TAG_POOL: [&str; 7] = [
    "spicy",
    "vegetarian",
    "vegan",
    "gluten_free",
    "contains_gluten",
    "dairy_free",
    "nuts_free",
];

const MOOD_TAG_POOL: [&str; 5] = ["adventurous", "comfort", "indulgent", "healthy", "classic"];

const ALLERGEN_POOL: [&str; 6] = ["gluten", "soy", "dairy", "nuts", "shellfish", "eggs"];

const INGREDIENT_POOL: [&str; 19] = [
    "beef patty",
    "chicken breast",
    "lettuce",
    "tomato",
    "cheese",
    "brioche bun",
    "kimchi",
    "gochujang sauce",
    "jalapenos",
    "onion rings",
    "potato fries",
    "black beans",
    "tortilla",
    "ice cream",
    "chocolate chips",
    "caramel sauce",
    "vanilla",
    "coffee",
    "almond milk",
];

/// Samples between `min` and `max` distinct entries from a tag pool.
fn sample_tags<R: Rng + ?Sized>(rng: &mut R, pool: &[&str], min: usize, max: usize) -> TagList {
    let count = rng.gen_range(min..=max);
    TagList(
        pool.choose_multiple(rng, count)
            .map(|s| (*s).to_string())
            .collect(),
    )
}

/// Generates one random product; `index` becomes the "FFnnn" identifier.
pub fn generate_product<R: Rng + ?Sized>(rng: &mut R, index: usize) -> product::Model {
    let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
    let name = NAME_WORDS
        .choose_multiple(rng, 3)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let image_prompt = format!("image of a {}", name.to_lowercase());
    let price = (rng.gen_range(5.0..20.0) * 100.0_f64).round() / 100.0;

    product::Model {
        product_id: format!("FF{index:03}"),
        name,
        category: category.to_string(),
        description: format!(
            "Delicious {} with unique flavors and fresh ingredients.",
            category.to_lowercase()
        ),
        ingredients: sample_tags(rng, &INGREDIENT_POOL, 3, 6),
        price,
        calories: rng.gen_range(200..=900),
        prep_time: format!("{}-{} mins", rng.gen_range(5..=15), rng.gen_range(15..=30)),
        dietary_tags: sample_tags(rng, &DIETARY_TAG_POOL, 1, 2),
        mood_tags: sample_tags(rng, &MOOD_TAG_POOL, 1, 2),
        allergens: sample_tags(rng, &ALLERGEN_POOL, 0, 2),
        popularity_score: rng.gen_range(50..=100),
        chef_special: rng.gen_bool(0.5),
        limited_time: rng.gen_bool(0.5),
        spice_level: rng.gen_range(1..=10),
        image_prompt,
    }
}

/// Generates `count` products with sequential identifiers starting at "FF001".
pub fn generate_products<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<product::Model> {
    (1..=count).map(|index| generate_product(rng, index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_identifiers_are_sequential_and_zero_padded() {
        let mut rng = StdRng::seed_from_u64(42);
        let products = generate_products(&mut rng, 12);

        assert_eq!(products.len(), 12);
        assert_eq!(products[0].product_id, "FF001");
        assert_eq!(products[9].product_id, "FF010");
        assert_eq!(products[11].product_id, "FF012");
    }

    #[test]
    fn test_generated_fields_stay_in_their_ranges() {
        let mut rng = StdRng::seed_from_u64(7);

        for product in generate_products(&mut rng, 50) {
            assert!(CATEGORIES.contains(&product.category.as_str()));
            assert!(product.price >= 5.0 && product.price < 20.0);
            assert!((200..=900).contains(&product.calories));
            assert!((50..=100).contains(&product.popularity_score));
            assert!((1..=10).contains(&product.spice_level));
            assert!((3..=6).contains(&product.ingredients.len()));
            assert!((1..=2).contains(&product.dietary_tags.len()));
            assert!((1..=2).contains(&product.mood_tags.len()));
            assert!(product.allergens.len() <= 2);
            assert_eq!(product.name.split(' ').count(), 3);
            assert!(product.description.starts_with("Delicious "));
        }
    }

    #[test]
    fn test_price_is_rounded_to_cents() {
        let mut rng = StdRng::seed_from_u64(3);

        for product in generate_products(&mut rng, 20) {
            let cents = product.price * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_image_prompt_derives_from_name() {
        let mut rng = StdRng::seed_from_u64(1);
        let product = generate_product(&mut rng, 1);

        assert_eq!(
            product.image_prompt,
            format!("image of a {}", product.name.to_lowercase())
        );
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        assert_eq!(
            generate_products(&mut rng_a, 5),
            generate_products(&mut rng_b, 5)
        );
    }
}
