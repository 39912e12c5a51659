use std::sync::Arc;

use super::common::*;
use crate::workflows::outfits::domain::{Category, OwnerId, RecommendationOutcome, Season};
use crate::workflows::outfits::engine::RecommendationConfig;
use crate::workflows::outfits::repository::RepositoryError;
use crate::workflows::outfits::service::{
    OutfitRecommendationService, RecommendationServiceError,
};

#[test]
fn load_then_recommend_round_trips_through_storage() {
    let (service, _repository) = build_service();

    let count = service
        .load_wardrobe(&owner(), staple_wardrobe())
        .expect("wardrobe loads");
    assert_eq!(count, 7);

    let result = service.recommend(&context()).expect("recommendation runs");
    assert_eq!(result.outcome, RecommendationOutcome::Recommended);
    assert!(!result.outfits.is_empty());
}

#[test]
fn recommend_returns_empty_wardrobe_for_unknown_owner() {
    let (service, _repository) = build_service();

    let mut ctx = context();
    ctx.owner_id = OwnerId("owner-unknown".to_string());

    let result = service.recommend(&ctx).expect("recommendation runs");
    assert_eq!(result.outcome, RecommendationOutcome::EmptyWardrobe);
}

#[test]
fn load_wardrobe_rejects_foreign_garments() {
    let (service, _repository) = build_service();

    let mut garments = staple_wardrobe();
    garments[0].owner_id = OwnerId("owner-999".to_string());

    match service.load_wardrobe(&owner(), garments) {
        Err(RecommendationServiceError::Repository(RepositoryError::ForeignGarment(id))) => {
            assert_eq!(id, "top-01");
        }
        other => panic!("expected foreign garment rejection, got {other:?}"),
    }
}

#[test]
fn recommend_propagates_repository_failures() {
    let service = OutfitRecommendationService::new(
        Arc::new(UnavailableWardrobes),
        RecommendationConfig::default(),
    );

    match service.recommend(&context()) {
        Err(RecommendationServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable repository error, got {other:?}"),
    }
}

#[test]
fn recommend_for_garments_bypasses_storage() {
    let service = OutfitRecommendationService::new(
        Arc::new(UnavailableWardrobes),
        RecommendationConfig::default(),
    );

    let garments = vec![
        garment("t-1", Category::Top, "white", None, Season::AllSeason, &[]),
        garment("b-1", Category::Bottom, "black", None, Season::AllSeason, &[]),
    ];

    let result = service.recommend_for_garments(&garments, &context());
    assert_eq!(result.outcome, RecommendationOutcome::Recommended);
}
