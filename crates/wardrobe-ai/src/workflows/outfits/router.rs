use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{post, put},
    Router,
};
use serde_json::json;

use super::domain::{Garment, OwnerId, RecommendationContext};
use super::repository::{RepositoryError, WardrobeRepository};
use super::service::{OutfitRecommendationService, RecommendationServiceError};

/// Router builder exposing HTTP endpoints for wardrobe upload and
/// recommendation requests.
pub fn outfit_router<R>(service: Arc<OutfitRecommendationService<R>>) -> Router
where
    R: WardrobeRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/wardrobe/:owner_id",
            put(replace_wardrobe_handler::<R>).get(wardrobe_handler::<R>),
        )
        .route(
            "/api/v1/outfits/recommendations",
            post(recommend_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn replace_wardrobe_handler<R>(
    State(service): State<Arc<OutfitRecommendationService<R>>>,
    Path(owner_id): Path<String>,
    axum::Json(garments): axum::Json<Vec<Garment>>,
) -> Response
where
    R: WardrobeRepository + 'static,
{
    let owner = OwnerId(owner_id);
    match service.load_wardrobe(&owner, garments) {
        Ok(garment_count) => {
            let payload = json!({
                "owner_id": owner.0,
                "garment_count": garment_count,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(RecommendationServiceError::Repository(error @ RepositoryError::ForeignGarment(_))) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn wardrobe_handler<R>(
    State(service): State<Arc<OutfitRecommendationService<R>>>,
    Path(owner_id): Path<String>,
) -> Response
where
    R: WardrobeRepository + 'static,
{
    let owner = OwnerId(owner_id);
    match service.wardrobe(&owner) {
        Ok(garments) => (StatusCode::OK, axum::Json(garments)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn recommend_handler<R>(
    State(service): State<Arc<OutfitRecommendationService<R>>>,
    axum::Json(context): axum::Json<RecommendationContext>,
) -> Response
where
    R: WardrobeRepository + 'static,
{
    match service.recommend(&context) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
