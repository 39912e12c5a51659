mod config;
pub(crate) mod filter;
pub(crate) mod generator;
pub(crate) mod reasons;
pub(crate) mod rules;

pub use config::RecommendationConfig;

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use super::domain::{
    Garment, Outfit, OutfitId, RecommendationContext, RecommendationOutcome, RecommendationResult,
};
use reasons::REASON_SEPARATOR;

/// Stateless engine turning a wardrobe and context into ranked outfits.
///
/// One pass per request: filter, generate, score, rank. No shared mutable
/// state beyond the identifier sequence, so concurrent calls need no
/// coordination.
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

static OUTFIT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_outfit_id() -> OutfitId {
    let id = OUTFIT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    OutfitId(format!("outfit-{id:06}"))
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Generates ranked outfit recommendations for one request.
    ///
    /// `generated_at` only stamps the materialized outfits; it never feeds
    /// scoring or ordering, so repeated calls with a pinned timestamp return
    /// identical scores, explanations, and order.
    pub fn recommend(
        &self,
        garments: &[Garment],
        context: &RecommendationContext,
        generated_at: DateTime<Utc>,
    ) -> RecommendationResult {
        if garments.is_empty() {
            return RecommendationResult::empty(
                RecommendationOutcome::EmptyWardrobe,
                "This wardrobe has no garments yet; add a few pieces to get recommendations.",
            );
        }

        let eligible = filter::eligible_garments(garments, context);
        if eligible.is_empty() {
            return RecommendationResult::empty(
                RecommendationOutcome::NoEligibleGarments,
                "No garments suit the current weather and temperature.",
            );
        }

        let mut candidates = generator::generate_candidates(&eligible, context.mood);
        if candidates.is_empty() {
            return RecommendationResult::empty(
                RecommendationOutcome::NoEligibleGarments,
                "No suitable outfits could be assembled; an eligible top and bottom are required.",
            );
        }

        let total_generated = candidates.len();
        // Stable sort keeps generation order for equal scores.
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        let limit = context
            .result_limit
            .unwrap_or(self.config.default_result_limit)
            .clamp(1, self.config.max_result_limit);
        let survivors: Vec<_> = candidates
            .into_iter()
            .filter(|candidate| candidate.score >= self.config.score_threshold)
            .take(limit)
            .collect();
        if survivors.is_empty() {
            return RecommendationResult::empty(
                RecommendationOutcome::NoQualifyingOutfits,
                "No combinations scored high enough to recommend today.",
            );
        }

        let outfits = survivors
            .into_iter()
            .map(|candidate| Outfit {
                id: next_outfit_id(),
                owner_id: context.owner_id.clone(),
                garment_ids: candidate.garment_ids,
                score: candidate.score,
                explanation: candidate.reasons.join(REASON_SEPARATOR),
                mood: context.mood,
                weather: context.weather,
                created_at: generated_at,
            })
            .collect();

        RecommendationResult {
            outcome: RecommendationOutcome::Recommended,
            outfits,
            explanation: context_summary(context),
            total_generated,
        }
    }
}

/// Context-level sentence mentioning weather, mood, then temperature.
fn context_summary(context: &RecommendationContext) -> String {
    let mut parts = Vec::new();
    if let Some(weather) = context.weather {
        parts.push(format!("{} weather", weather.label()));
    }
    if let Some(mood) = context.mood {
        parts.push(format!("a {} mood", mood.label()));
    }
    if let Some(temperature) = context.temperature {
        parts.push(format!("{temperature:.0}°C"));
    }

    match parts.as_slice() {
        [] => "Outfits picked from across your wardrobe.".to_string(),
        [only] => format!("Outfits picked for {only}."),
        [first, second] => format!("Outfits picked for {first} and {second}."),
        [first, second, third, ..] => {
            format!("Outfits picked for {first} and {second} at {third}.")
        }
    }
}
