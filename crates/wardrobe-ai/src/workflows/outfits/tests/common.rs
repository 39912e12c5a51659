use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::outfits::domain::{
    Category, Garment, GarmentId, OwnerId, RecommendationContext, Season,
};
use crate::workflows::outfits::engine::{RecommendationConfig, RecommendationEngine};
use crate::workflows::outfits::repository::{RepositoryError, WardrobeRepository};
use crate::workflows::outfits::service::OutfitRecommendationService;

pub(super) fn owner() -> OwnerId {
    OwnerId("owner-100".to_string())
}

pub(super) fn garment(
    id: &str,
    category: Category,
    color: &str,
    material: Option<&str>,
    season: Season,
    tags: &[&str],
) -> Garment {
    Garment {
        id: GarmentId(id.to_string()),
        owner_id: owner(),
        category,
        primary_color: color.to_string(),
        material: material.map(str::to_string),
        season,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// A small wardrobe of reliable staples; every (top, bottom) pairing clears
/// the default threshold.
pub(super) fn staple_wardrobe() -> Vec<Garment> {
    vec![
        garment(
            "top-01",
            Category::Top,
            "white",
            Some("cotton"),
            Season::AllSeason,
            &["casual", "minimalist", "versatile-high"],
        ),
        garment(
            "top-02",
            Category::Top,
            "blue",
            Some("denim"),
            Season::Spring,
            &["casual", "versatile-medium"],
        ),
        garment(
            "bottom-01",
            Category::Bottom,
            "black",
            Some("cotton"),
            Season::AllSeason,
            &["casual", "minimalist", "versatile-high"],
        ),
        garment(
            "shoes-01",
            Category::Shoes,
            "white",
            Some("leather"),
            Season::AllSeason,
            &["casual", "versatile-high"],
        ),
        garment(
            "acc-01",
            Category::Accessory,
            "black",
            None,
            Season::AllSeason,
            &["minimalist", "weekend"],
        ),
        garment(
            "acc-02",
            Category::Accessory,
            "beige",
            None,
            Season::AllSeason,
            &["classic"],
        ),
        garment(
            "acc-03",
            Category::Accessory,
            "red",
            None,
            Season::AllSeason,
            &["bold"],
        ),
    ]
}

pub(super) fn context() -> RecommendationContext {
    RecommendationContext {
        owner_id: owner(),
        mood: None,
        weather: None,
        temperature: None,
        occasion: None,
        result_limit: None,
    }
}

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::new(RecommendationConfig::default())
}

pub(super) fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[derive(Default, Clone)]
pub(super) struct MemoryWardrobes {
    wardrobes: Arc<Mutex<HashMap<OwnerId, Vec<Garment>>>>,
}

impl WardrobeRepository for MemoryWardrobes {
    fn replace_wardrobe(
        &self,
        owner: &OwnerId,
        garments: Vec<Garment>,
    ) -> Result<usize, RepositoryError> {
        if let Some(foreign) = garments.iter().find(|garment| &garment.owner_id != owner) {
            return Err(RepositoryError::ForeignGarment(foreign.id.0.clone()));
        }

        let mut guard = self.wardrobes.lock().expect("lock");
        let count = garments.len();
        guard.insert(owner.clone(), garments);
        Ok(count)
    }

    fn wardrobe(&self, owner: &OwnerId) -> Result<Vec<Garment>, RepositoryError> {
        let guard = self.wardrobes.lock().expect("lock");
        Ok(guard.get(owner).cloned().unwrap_or_default())
    }
}

pub(super) struct UnavailableWardrobes;

impl WardrobeRepository for UnavailableWardrobes {
    fn replace_wardrobe(
        &self,
        _owner: &OwnerId,
        _garments: Vec<Garment>,
    ) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn wardrobe(&self, _owner: &OwnerId) -> Result<Vec<Garment>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<OutfitRecommendationService<MemoryWardrobes>>,
    MemoryWardrobes,
) {
    let repository = MemoryWardrobes::default();
    let service = Arc::new(OutfitRecommendationService::new(
        Arc::new(repository.clone()),
        RecommendationConfig::default(),
    ));
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
