//! Interest scoring engine.
//!
//! Maps one free-text utterance to an integer "interest score" in `[0,100]`
//! by summing fixed weights for keyword-triggered conversational signals,
//! positive and negative, then clamping the total. The weight tables are
//! immutable configuration so tuning them never touches the matching logic.

/// Weights added when a positive conversational signal is detected.
#[derive(Debug, Clone, Copy)]
pub struct EngagementFactors {
    /// A specific food preference was mentioned (e.g., "spicy", "burger")
    pub specific_preferences: i32,
    /// A dietary restriction was mentioned (e.g., "vegan", "allergy")
    pub dietary_restrictions: i32,
    /// A budget constraint was mentioned (e.g., "under", "cheap")
    pub budget_mention: i32,
    /// A mood was indicated (e.g., "comfort", "adventurous")
    pub mood_indication: i32,
    /// The user asked a question
    pub question_asking: i32,
    /// The user expressed enthusiasm
    pub enthusiasm_words: i32,
    /// The user asked about price
    pub price_inquiry: i32,
    /// The user expressed intent to order
    pub order_intent: i32,
}

/// Weights added when a negative conversational signal is detected.
///
/// `dietary_conflict` and `delay_response` carry weights but have no trigger
/// phrases wired into [`interest_score`]; they are reserved until a product
/// requirement defines their triggers. Do not invent detection heuristics
/// for them.
#[derive(Debug, Clone, Copy)]
pub struct NegativeFactors {
    /// The user hesitated ("maybe", "not sure")
    pub hesitation: i32,
    /// The user raised a price objection ("too expensive", "pricey")
    pub budget_concern: i32,
    /// Reserved - no trigger phrases defined
    pub dietary_conflict: i32,
    /// The user rejected a suggestion ("don't like", "hate")
    pub rejection: i32,
    /// Reserved - no trigger phrases defined
    pub delay_response: i32,
}

/// Fixed weights for positive signals.
pub const ENGAGEMENT_FACTORS: EngagementFactors = EngagementFactors {
    specific_preferences: 15,
    dietary_restrictions: 10,
    budget_mention: 5,
    mood_indication: 20,
    question_asking: 10,
    enthusiasm_words: 8,
    price_inquiry: 25,
    order_intent: 30,
};

/// Fixed weights for negative signals.
pub const NEGATIVE_FACTORS: NegativeFactors = NegativeFactors {
    hesitation: -10,
    budget_concern: -15,
    dietary_conflict: -20,
    rejection: -25,
    delay_response: -5,
};

// Keyword sets are stored case-folded so they match the folded input text.
const SPECIFIC_PREFERENCE_KEYWORDS: [&str; 6] =
    ["spicy", "korean", "burger", "vegetarian", "tacos", "pizza"];
const DIETARY_RESTRICTION_KEYWORDS: [&str; 6] =
    ["vegetarian", "vegan", "gluten", "allergy", "dairy", "soy"];
const BUDGET_KEYWORDS: [&str; 4] = ["under", "below", "less than", "cheap"];
const MOOD_KEYWORDS: [&str; 4] = ["adventurous", "comfort", "indulgent", "healthy"];
const QUESTION_KEYWORDS: [&str; 5] = ["how", "what", "when", "where", "is"];
const ENTHUSIASM_KEYWORDS: [&str; 5] = ["amazing", "perfect", "love", "delicious", "great"];
const PRICE_INQUIRY_KEYWORDS: [&str; 4] = ["how much", "price", "cost", "$"];
const ORDER_INTENT_KEYWORDS: [&str; 4] = ["i'll take it", "add to cart", "order", "buy"];

/// Computes the interest score for one utterance.
///
/// The first four categories iterate their keyword set and stop at the first
/// match; the last four use an any-match test. Each category contributes its
/// weight at most once either way, but the two styles are part of the rule
/// set and must not be unified. Negative signals are literal phrase checks,
/// independent of the keyword-set machinery. Only the final sum is clamped
/// to `[0,100]`, never an individual category.
#[must_use]
pub fn interest_score(user_text: &str) -> i32 {
    let text = user_text.to_lowercase();
    let mut score = 0;

    for kw in SPECIFIC_PREFERENCE_KEYWORDS {
        if text.contains(kw) {
            score += ENGAGEMENT_FACTORS.specific_preferences;
            break;
        }
    }

    for kw in DIETARY_RESTRICTION_KEYWORDS {
        if text.contains(kw) {
            score += ENGAGEMENT_FACTORS.dietary_restrictions;
            break;
        }
    }

    for kw in BUDGET_KEYWORDS {
        if text.contains(kw) {
            score += ENGAGEMENT_FACTORS.budget_mention;
            break;
        }
    }

    for kw in MOOD_KEYWORDS {
        if text.contains(kw) {
            score += ENGAGEMENT_FACTORS.mood_indication;
            break;
        }
    }

    if QUESTION_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        score += ENGAGEMENT_FACTORS.question_asking;
    }

    if ENTHUSIASM_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        score += ENGAGEMENT_FACTORS.enthusiasm_words;
    }

    if PRICE_INQUIRY_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        score += ENGAGEMENT_FACTORS.price_inquiry;
    }

    if ORDER_INTENT_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        score += ENGAGEMENT_FACTORS.order_intent;
    }

    if text.contains("maybe") || text.contains("not sure") {
        score += NEGATIVE_FACTORS.hesitation;
    }
    if text.contains("too expensive") || text.contains("pricey") {
        score += NEGATIVE_FACTORS.budget_concern;
    }
    if text.contains("don't like") || text.contains("hate") {
        score += NEGATIVE_FACTORS.rejection;
    }

    score.clamp(0, 100)
}
