//! Venue endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use super::validation::validate_search_term;
use super::{ApiError, ApiResponse, AppState};
use crate::domain::VenueId;
use crate::models::{NewVenue, SearchResults, Venue, VenueArea, VenueDetail, VenuePatch};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search_term: String,
}

pub async fn list_venues(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<VenueArea>>>, ApiError> {
    let areas = state.listing().list_venues_grouped_by_location().await?;
    Ok(Json(ApiResponse::success(areas)))
}

pub async fn search_venues(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchResults<VenueId>>>, ApiError> {
    let term = validate_search_term(&query.search_term)?;
    let results = state.listing().search_venues(term).await?;
    Ok(Json(ApiResponse::success(results)))
}

pub async fn get_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<VenueDetail>>, ApiError> {
    let detail = state.venue_service().get_venue_detail(VenueId::new(id)).await?;
    Ok(Json(ApiResponse::success(detail)))
}

/// Raw venue record, used to prefill the edit form.
pub async fn edit_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Venue>>, ApiError> {
    let venue = state.venue_service().get_venue(VenueId::new(id)).await?;
    Ok(Json(ApiResponse::success(venue)))
}

pub async fn create_venue(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewVenue>,
) -> Result<(StatusCode, Json<ApiResponse<Venue>>), ApiError> {
    let venue = state.venue_service().create_venue(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(venue))))
}

pub async fn update_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(patch): Json<VenuePatch>,
) -> Result<Json<ApiResponse<Venue>>, ApiError> {
    let venue = state
        .venue_service()
        .update_venue(VenueId::new(id), patch)
        .await?;
    Ok(Json(ApiResponse::success(venue)))
}

pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    state.venue_service().delete_venue(VenueId::new(id)).await?;
    Ok(Json(ApiResponse::success(true)))
}
