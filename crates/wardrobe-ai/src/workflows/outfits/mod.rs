//! Outfit candidate generation, scoring, and the recommendation service.
//!
//! The engine is a pure function of (garments, context): it filters for
//! weather and temperature, enumerates top/bottom/shoe/accessory
//! combinations, scores each candidate on six weighted criteria, and ranks
//! the survivors. Everything around it (repository, router, service) is thin
//! plumbing with no influence on scoring.

pub mod domain;
pub(crate) mod engine;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Category, Garment, GarmentId, Mood, Outfit, OutfitCandidate, OutfitId, OwnerId,
    RecommendationContext, RecommendationOutcome, RecommendationResult, ScoreComponent,
    ScoreDimension, Season, Weather,
};
pub use engine::{RecommendationConfig, RecommendationEngine};
pub use repository::{RepositoryError, WardrobeRepository};
pub use router::outfit_router;
pub use service::{OutfitRecommendationService, RecommendationServiceError};
