//! Scripted Dive Recommendations
//!
//! Keyword-driven recommendation cards. The card is built locally from
//! the shop's known sites and time slots, the text generator only
//! writes the prose around it.

use rand::Rng;
use shared::assistant::{DiveConditions, DiveRecommendation, Suitability};

/// Builds a recommendation card from the user's message, or nothing
/// when the message is not asking for one.
pub trait RecommendationService: Send + Sync {
    fn recommend(&self, message: &str) -> Option<DiveRecommendation>;
}

/// Keywords that make a message a recommendation request
const TRIGGERS: &[&str] = &["recommend", "suggest", "dive", "weather", "conditions"];

const LOCATIONS: &[&str] = &[
    "Rainbow Reef",
    "Banana Reef",
    "SS Maldivian Victory",
    "Protected Bay",
    "Coral Garden",
];

const TIMES: &[&str] = &["09:00 AM", "10:00 AM", "02:00 PM", "07:30 PM"];

const NIGHT_TIME: &str = "07:30 PM";
const WRECK_SITE: &str = "SS Maldivian Victory";
const SHELTERED_SITES: &[&str] = &["Protected Bay", "Coral Garden"];

pub struct ScriptedRecommender;

impl ScriptedRecommender {
    pub fn new() -> Self {
        Self
    }

    fn roll_conditions() -> DiveConditions {
        let mut rng = rand::thread_rng();
        DiveConditions {
            temperature_c: rng.gen_range(26..=30),
            wind_speed_kmh: rng.gen_range(5..=20),
            visibility_m: rng.gen_range(15..=35),
            wave_height_m: (rng.gen_range(2..=12) as f64) / 10.0,
        }
    }

    fn rate(conditions: &DiveConditions) -> Suitability {
        if conditions.wind_speed_kmh > 25 || conditions.wave_height_m > 1.5 {
            Suitability::Poor
        } else if conditions.wind_speed_kmh <= 12 && conditions.wave_height_m <= 0.6 {
            Suitability::Excellent
        } else if conditions.wind_speed_kmh <= 18 && conditions.wave_height_m <= 1.0 {
            Suitability::Good
        } else {
            Suitability::Fair
        }
    }

    fn pick<'a>(options: &[&'a str]) -> &'a str {
        let mut rng = rand::thread_rng();
        options[rng.gen_range(0..options.len())]
    }
}

impl Default for ScriptedRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationService for ScriptedRecommender {
    fn recommend(&self, message: &str) -> Option<DiveRecommendation> {
        let lower = message.to_lowercase();
        if !TRIGGERS.iter().any(|t| lower.contains(t)) {
            return None;
        }

        let conditions = Self::roll_conditions();
        let suitability = Self::rate(&conditions);

        let (title, location, time, difficulty, warnings) = if lower.contains("night") {
            let location = Self::pick(LOCATIONS);
            (
                format!("Night Dive at {location}"),
                location.to_string(),
                NIGHT_TIME.to_string(),
                "advanced".to_string(),
                vec![
                    "Night dive: torch and backup light required".to_string(),
                    "Advanced Open Water certification required".to_string(),
                ],
            )
        } else if lower.contains("wreck") {
            (
                format!("Wreck Dive at {WRECK_SITE}"),
                WRECK_SITE.to_string(),
                Self::pick(TIMES).to_string(),
                "advanced".to_string(),
                vec!["Penetration only with wreck specialty".to_string()],
            )
        } else if lower.contains("beginner") {
            let location = Self::pick(SHELTERED_SITES);
            (
                format!("Easy Reef Dive at {location}"),
                location.to_string(),
                Self::pick(TIMES).to_string(),
                "beginner".to_string(),
                Vec::new(),
            )
        } else if lower.contains("advanced") {
            let location = Self::pick(LOCATIONS);
            (
                format!("Advanced Dive at {location}"),
                location.to_string(),
                Self::pick(TIMES).to_string(),
                "advanced".to_string(),
                Vec::new(),
            )
        } else {
            let location = Self::pick(LOCATIONS);
            (
                format!("Reef Dive at {location}"),
                location.to_string(),
                Self::pick(TIMES).to_string(),
                "intermediate".to_string(),
                Vec::new(),
            )
        };

        Some(DiveRecommendation {
            title,
            location,
            time,
            difficulty,
            conditions,
            suitability,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrelated_message_yields_no_card() {
        let recommender = ScriptedRecommender::new();
        assert!(recommender.recommend("how do I pay an invoice?").is_none());
    }

    #[test]
    fn test_night_request_is_evening_with_warnings() {
        let recommender = ScriptedRecommender::new();
        let card = recommender
            .recommend("Can you recommend a night dive?")
            .unwrap();
        assert_eq!(card.time, "07:30 PM");
        assert_eq!(card.difficulty, "advanced");
        assert!(!card.warnings.is_empty());
        assert!(card.title.starts_with("Night Dive"));
    }

    #[test]
    fn test_beginner_request_stays_sheltered() {
        let recommender = ScriptedRecommender::new();
        let card = recommender
            .recommend("suggest something for a beginner please")
            .unwrap();
        assert_eq!(card.difficulty, "beginner");
        assert!(SHELTERED_SITES.contains(&card.location.as_str()));
        assert!(card.warnings.is_empty());
    }

    #[test]
    fn test_wreck_request_targets_the_wreck() {
        let recommender = ScriptedRecommender::new();
        let card = recommender.recommend("any wreck dive this week?").unwrap();
        assert_eq!(card.location, WRECK_SITE);
        assert_eq!(card.difficulty, "advanced");
    }

    #[test]
    fn test_calm_conditions_rate_excellent() {
        let conditions = DiveConditions {
            temperature_c: 28,
            wind_speed_kmh: 10,
            visibility_m: 30,
            wave_height_m: 0.5,
        };
        assert_eq!(ScriptedRecommender::rate(&conditions), Suitability::Excellent);
    }

    #[test]
    fn test_rough_conditions_rate_poor() {
        let conditions = DiveConditions {
            temperature_c: 24,
            wind_speed_kmh: 30,
            visibility_m: 10,
            wave_height_m: 2.0,
        };
        assert_eq!(ScriptedRecommender::rate(&conditions), Suitability::Poor);
    }
}
