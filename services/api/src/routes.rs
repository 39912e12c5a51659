use crate::infra::{default_recommendation_config, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use wardrobe_ai::workflows::outfits::{
    outfit_router, Garment, OutfitRecommendationService, RecommendationContext,
    RecommendationEngine, RecommendationResult, WardrobeRepository,
};

/// Inline recommendation request: garments travel with the context, nothing
/// touches storage.
#[derive(Debug, Deserialize)]
pub(crate) struct OutfitPreviewRequest {
    pub(crate) garments: Vec<Garment>,
    pub(crate) context: RecommendationContext,
}

pub(crate) fn with_outfit_routes<R>(service: Arc<OutfitRecommendationService<R>>) -> axum::Router
where
    R: WardrobeRepository + 'static,
{
    outfit_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/outfits/preview",
            axum::routing::post(preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn preview_endpoint(
    Json(payload): Json<OutfitPreviewRequest>,
) -> Json<RecommendationResult> {
    let OutfitPreviewRequest { garments, context } = payload;

    let engine = RecommendationEngine::new(default_recommendation_config());
    Json(engine.recommend(&garments, &context, Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_ai::workflows::outfits::{
        Category, GarmentId, Mood, OwnerId, RecommendationOutcome, Season,
    };

    fn owner() -> OwnerId {
        OwnerId("owner-demo".to_string())
    }

    fn garment(id: &str, category: Category, color: &str, tags: &[&str]) -> Garment {
        Garment {
            id: GarmentId(id.to_string()),
            owner_id: owner(),
            category,
            primary_color: color.to_string(),
            material: None,
            season: Season::AllSeason,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    fn preview_context() -> RecommendationContext {
        RecommendationContext {
            owner_id: owner(),
            mood: Some(Mood::Casual),
            weather: None,
            temperature: None,
            occasion: None,
            result_limit: Some(3),
        }
    }

    #[tokio::test]
    async fn preview_endpoint_ranks_inline_garments() {
        let request = OutfitPreviewRequest {
            garments: vec![
                garment("t-1", Category::Top, "white", &["casual", "versatile-high"]),
                garment("b-1", Category::Bottom, "black", &["casual", "versatile-high"]),
                garment("s-1", Category::Shoes, "white", &["casual"]),
            ],
            context: preview_context(),
        };

        let Json(body) = preview_endpoint(Json(request)).await;

        assert_eq!(body.outcome, RecommendationOutcome::Recommended);
        assert!(!body.outfits.is_empty());
        assert!(body.outfits.len() <= 3);
        for outfit in &body.outfits {
            assert!(outfit.score >= 60);
        }
    }

    #[tokio::test]
    async fn preview_endpoint_reports_empty_wardrobes() {
        let request = OutfitPreviewRequest {
            garments: Vec::new(),
            context: preview_context(),
        };

        let Json(body) = preview_endpoint(Json(request)).await;

        assert_eq!(body.outcome, RecommendationOutcome::EmptyWardrobe);
        assert!(body.outfits.is_empty());
        assert_eq!(body.total_generated, 0);
    }
}
