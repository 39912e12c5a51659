use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::outfits::domain::OwnerId;
use crate::workflows::outfits::engine::RecommendationConfig;
use crate::workflows::outfits::router::{
    outfit_router, recommend_handler, replace_wardrobe_handler, wardrobe_handler,
};
use crate::workflows::outfits::service::OutfitRecommendationService;

#[tokio::test]
async fn wardrobe_route_accepts_uploads() {
    let (service, _repository) = build_service();
    let router = outfit_router(service);

    let response = router
        .oneshot(
            axum::http::Request::put("/api/v1/wardrobe/owner-100")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&staple_wardrobe()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("garment_count"), Some(&json!(7)));
}

#[tokio::test]
async fn recommendation_route_returns_ranked_outfits() {
    let (service, _repository) = build_service();
    service
        .load_wardrobe(&owner(), staple_wardrobe())
        .expect("wardrobe loads");
    let router = outfit_router(service);

    let body = json!({
        "owner_id": "owner-100",
        "mood": "casual",
        "weather": "cloudy",
        "temperature": 18.0,
    });
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/outfits/recommendations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("outcome"), Some(&json!("recommended")));
    let outfits = payload
        .get("outfits")
        .and_then(serde_json::Value::as_array)
        .expect("outfits array");
    assert!(!outfits.is_empty());
}

#[tokio::test]
async fn recommendation_route_reports_empty_wardrobes() {
    let (service, _repository) = build_service();
    let router = outfit_router(service);

    let body = json!({ "owner_id": "owner-without-garments" });
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/outfits/recommendations")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("outcome"), Some(&json!("empty_wardrobe")));
    assert_eq!(payload.get("total_generated"), Some(&json!(0)));
}

#[tokio::test]
async fn replace_handler_rejects_foreign_garments() {
    let (service, _repository) = build_service();

    let mut garments = staple_wardrobe();
    garments[0].owner_id = OwnerId("owner-999".to_string());

    let response = replace_wardrobe_handler::<MemoryWardrobes>(
        State(service),
        Path("owner-100".to_string()),
        axum::Json(garments),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("another wardrobe"));
}

#[tokio::test]
async fn handlers_surface_repository_failures_as_internal_errors() {
    let service = Arc::new(OutfitRecommendationService::new(
        Arc::new(UnavailableWardrobes),
        RecommendationConfig::default(),
    ));

    let response = wardrobe_handler::<UnavailableWardrobes>(
        State(service.clone()),
        Path("owner-100".to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = recommend_handler::<UnavailableWardrobes>(
        State(service),
        axum::Json(context()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn wardrobe_route_lists_stored_garments() {
    let (service, _repository) = build_service();
    service
        .load_wardrobe(&owner(), staple_wardrobe())
        .expect("wardrobe loads");
    let router = outfit_router(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/wardrobe/owner-100")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let garments = payload.as_array().expect("garment array");
    assert_eq!(garments.len(), 7);
}
