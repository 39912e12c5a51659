use std::sync::Arc;

use chrono::Utc;

use super::domain::{Garment, OwnerId, RecommendationContext, RecommendationResult};
use super::engine::{RecommendationConfig, RecommendationEngine};
use super::repository::{RepositoryError, WardrobeRepository};

/// Service composing the wardrobe repository and the recommendation engine.
pub struct OutfitRecommendationService<R> {
    repository: Arc<R>,
    engine: RecommendationEngine,
}

impl<R> OutfitRecommendationService<R>
where
    R: WardrobeRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: RecommendationConfig) -> Self {
        Self {
            repository,
            engine: RecommendationEngine::new(config),
        }
    }

    /// Replace the stored wardrobe for an owner, returning the garment count.
    pub fn load_wardrobe(
        &self,
        owner: &OwnerId,
        garments: Vec<Garment>,
    ) -> Result<usize, RecommendationServiceError> {
        Ok(self.repository.replace_wardrobe(owner, garments)?)
    }

    /// Fetch the stored wardrobe for API responses.
    pub fn wardrobe(&self, owner: &OwnerId) -> Result<Vec<Garment>, RecommendationServiceError> {
        Ok(self.repository.wardrobe(owner)?)
    }

    /// Recommend outfits from the stored wardrobe of the context's owner.
    pub fn recommend(
        &self,
        context: &RecommendationContext,
    ) -> Result<RecommendationResult, RecommendationServiceError> {
        let garments = self.repository.wardrobe(&context.owner_id)?;
        Ok(self.engine.recommend(&garments, context, Utc::now()))
    }

    /// Recommend against caller-supplied garments without touching storage.
    pub fn recommend_for_garments(
        &self,
        garments: &[Garment],
        context: &RecommendationContext,
    ) -> RecommendationResult {
        self.engine.recommend(garments, context, Utc::now())
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
