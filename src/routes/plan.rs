// src/routes/plan.rs
use axum::{Json, extract::State, http::HeaderMap};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{
        AttractionsRequest, AttractionsResponse, InputMode, PlanRequest, PlanResponse,
    },
    services::{
        metrics_manager::MetricsData,
        parser::parse_trip_request,
        planner::{generate_itinerary, top_attractions},
    },
    state::SharedState,
};

pub async fn plan_handler(
    State(state): State<SharedState>,
    Json(payload): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let trip = match payload.mode {
        InputMode::NaturalLanguage => {
            let query = payload.query.as_deref().unwrap_or_default().trim();
            if query.is_empty() {
                return Err(AppError::BadRequest(
                    "Travel description cannot be empty".to_string(),
                ));
            }
            parse_trip_request(state.generator.as_ref(), query).await?
        }
        InputMode::Form => payload.form_trip(),
    };

    // Reject before any itinerary/attractions call is made.
    trip.validate()?;

    let request_id = Uuid::new_v4().to_string();
    tracing::info!(
        %request_id,
        mode = payload.mode.as_str(),
        destination = %trip.destination,
        duration = trip.duration,
        "generating travel plan"
    );

    state.metrics.increment_mode(payload.mode.as_str()).await;
    state
        .metrics
        .increment_experience(&trip.experience_type.to_string())
        .await;

    let attractions =
        top_attractions(state.generator.as_ref(), &trip.destination, trip.experience_type).await;
    let itinerary = generate_itinerary(state.generator.as_ref(), &trip).await?;

    Ok(Json(PlanResponse {
        request_id,
        trip,
        attractions,
        itinerary,
    }))
}

pub async fn attractions_handler(
    State(state): State<SharedState>,
    Json(payload): Json<AttractionsRequest>,
) -> Result<Json<AttractionsResponse>, AppError> {
    let destination = payload.destination.trim().to_string();
    if destination.is_empty() {
        return Err(AppError::BadRequest(
            "Destination cannot be empty".to_string(),
        ));
    }

    let experience = payload.experience_type.unwrap_or_default();
    let attractions = top_attractions(state.generator.as_ref(), &destination, experience).await;

    Ok(Json(AttractionsResponse {
        destination,
        attractions,
    }))
}

pub async fn get_metrics_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<MetricsData>, AppError> {
    let expected = state.admin_key.as_deref().ok_or(AppError::Unauthorized)?;

    match headers.get("x-admin-key").and_then(|v| v.to_str().ok()) {
        Some(key) if key == expected => Ok(Json(state.metrics.get_metrics().await)),
        _ => Err(AppError::Unauthorized),
    }
}
