use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use wardrobe_ai::workflows::outfits::{
    Garment, Mood, OwnerId, RecommendationConfig, RepositoryError, WardrobeRepository, Weather,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryWardrobeRepository {
    wardrobes: Arc<Mutex<HashMap<OwnerId, Vec<Garment>>>>,
}

impl WardrobeRepository for InMemoryWardrobeRepository {
    fn replace_wardrobe(
        &self,
        owner: &OwnerId,
        garments: Vec<Garment>,
    ) -> Result<usize, RepositoryError> {
        if let Some(foreign) = garments.iter().find(|garment| &garment.owner_id != owner) {
            return Err(RepositoryError::ForeignGarment(foreign.id.0.clone()));
        }

        let mut guard = self.wardrobes.lock().expect("wardrobe mutex poisoned");
        let count = garments.len();
        guard.insert(owner.clone(), garments);
        Ok(count)
    }

    fn wardrobe(&self, owner: &OwnerId) -> Result<Vec<Garment>, RepositoryError> {
        let guard = self.wardrobes.lock().expect("wardrobe mutex poisoned");
        Ok(guard.get(owner).cloned().unwrap_or_default())
    }
}

pub(crate) fn default_recommendation_config() -> RecommendationConfig {
    RecommendationConfig {
        score_threshold: 60,
        default_result_limit: 6,
        max_result_limit: 10,
    }
}

pub(crate) fn parse_mood(raw: &str) -> Result<Mood, String> {
    Mood::parse(raw).ok_or_else(|| {
        format!(
            "unknown mood '{raw}' (expected casual, formal, adventurous, cozy, energetic, \
             minimalist, or bold)"
        )
    })
}

pub(crate) fn parse_weather(raw: &str) -> Result<Weather, String> {
    Weather::parse(raw).ok_or_else(|| {
        format!("unknown weather '{raw}' (expected sunny, cloudy, rainy, snowy, windy, hot, or cold)")
    })
}
