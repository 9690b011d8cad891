//! Assistant Module
//!
//! Chat flow for the dive planning assistant. Each call is stateless:
//! the recommender builds an optional card from keywords, the text
//! generator writes the prose, and a canned apology covers upstream
//! failures so chat never returns an error to the client.

pub mod generate;
pub mod recommend;

pub use generate::{GenerateError, HttpTextGenerator, TextGenerator};
pub use recommend::{RecommendationService, ScriptedRecommender};

use shared::assistant::{ChatReply, DiveRecommendation};

/// Chips shown when the conversation starts or a reply has no card
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Check today's dive conditions",
    "Recommend dives for beginners",
    "Plan a night dive",
    "Check weather forecast",
];

/// Chips shown alongside a recommendation card
pub const REPLY_SUGGESTIONS: &[&str] = &[
    "Schedule this dive",
    "Check equipment availability",
    "Find similar dives",
    "Get safety briefing",
];

const APOLOGY: &str =
    "Sorry, I couldn't process that right now. Please try again in a moment.";

fn chips(set: &[&str]) -> Vec<String> {
    set.iter().map(|s| s.to_string()).collect()
}

pub struct AssistantService {
    generator: Box<dyn TextGenerator>,
    recommender: Box<dyn RecommendationService>,
    max_tokens: u32,
}

impl AssistantService {
    pub fn new(
        generator: Box<dyn TextGenerator>,
        recommender: Box<dyn RecommendationService>,
        max_tokens: u32,
    ) -> Self {
        Self {
            generator,
            recommender,
            max_tokens,
        }
    }

    /// Answer one chat message
    pub async fn chat(&self, message: &str) -> ChatReply {
        let recommendation = self.recommender.recommend(message);
        let prompt = Self::build_prompt(message, recommendation.as_ref());

        match self.generator.generate(&prompt, self.max_tokens).await {
            Ok(content) => {
                let suggestions = if recommendation.is_some() {
                    REPLY_SUGGESTIONS
                } else {
                    DEFAULT_SUGGESTIONS
                };
                ChatReply {
                    content,
                    recommendation,
                    suggestions: chips(suggestions),
                }
            }
            Err(e) => {
                tracing::warn!("Text generation failed: {}", e);
                // A card without its prose reads half-broken, drop it
                ChatReply {
                    content: APOLOGY.to_string(),
                    recommendation: None,
                    suggestions: chips(DEFAULT_SUGGESTIONS),
                }
            }
        }
    }

    fn build_prompt(message: &str, card: Option<&DiveRecommendation>) -> String {
        let mut prompt = String::from(
            "You are a friendly dive shop assistant. Answer briefly and \
             practically, in plain text.\n",
        );
        if let Some(card) = card {
            prompt.push_str(&format!(
                "We are recommending this dive: {} at {}, {} ({}). \
                 Conditions: {}C water, wind {} km/h, waves {} m, visibility {} m.\n",
                card.title,
                card.location,
                card.time,
                card.difficulty,
                card.conditions.temperature_c,
                card.conditions.wind_speed_kmh,
                card.conditions.wave_height_m,
                card.conditions.visibility_m,
            ));
            prompt.push_str("Introduce the recommendation and mention any safety notes.\n");
        }
        prompt.push_str(&format!("Customer: {}\nAssistant:", message));
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str, _max_tokens: u32) -> Result<String, GenerateError> {
            Ok(format!("echo: {}", prompt.len()))
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _max_tokens: u32) -> Result<String, GenerateError> {
            Err(GenerateError::Status(503))
        }
    }

    fn service(generator: Box<dyn TextGenerator>) -> AssistantService {
        AssistantService::new(generator, Box::new(ScriptedRecommender::new()), 200)
    }

    #[tokio::test]
    async fn test_chat_attaches_card_and_reply_chips() {
        let reply = service(Box::new(EchoGenerator))
            .chat("recommend a dive for tomorrow")
            .await;
        assert!(reply.recommendation.is_some());
        assert_eq!(
            reply.suggestions,
            REPLY_SUGGESTIONS
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_chat_without_card_uses_default_chips() {
        let reply = service(Box::new(EchoGenerator))
            .chat("what are your opening hours?")
            .await;
        assert!(reply.recommendation.is_none());
        assert_eq!(
            reply.suggestions,
            DEFAULT_SUGGESTIONS
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_chat_degrades_to_apology_on_upstream_failure() {
        let reply = service(Box::new(FailingGenerator))
            .chat("recommend a dive")
            .await;
        assert_eq!(reply.content, APOLOGY);
        // Degraded replies carry no card and fall back to the default chips
        assert!(reply.recommendation.is_none());
        assert_eq!(
            reply.suggestions,
            DEFAULT_SUGGESTIONS
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
        );
    }
}
