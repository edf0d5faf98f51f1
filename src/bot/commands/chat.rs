//! Conversational Discord commands - `chat` and `score`.
//!
//! These commands run the conversational flow: free text in, an interest
//! score (and for `/chat`, up to five recommended products) out.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::{recommend, score::interest_score},
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Chats with FoodieBot: scores your message and suggests matching products.
    ///
    /// The category, mood, and price filters are derived from the message
    /// itself; an empty product list is a normal outcome and the score is
    /// reported either way.
    #[poise::command(slash_command, prefix_command)]
    pub async fn chat(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "What are you in the mood for?"] message: String,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let recommendation = recommend::recommend(db, &message).await?;

        let mut reply = format!("Interest Score: {}%", recommendation.interest_score);
        if recommendation.products.is_empty() {
            reply.push_str("\nSorry, no products found with your preferences.");
        } else {
            for product in &recommendation.products {
                write!(
                    reply,
                    "\nTry: {} - ${:.2} - {}",
                    product.name, product.price, product.description
                )?;
            }
        }

        ctx.say(reply).await?;
        Ok(())
    }

    /// Scores a message for purchase intent without touching the catalog.
    #[poise::command(slash_command, prefix_command)]
    pub async fn score(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Message to score"] message: String,
    ) -> Result<()> {
        let value = interest_score(&message);
        ctx.say(format!("Interest Score: {value}%")).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
