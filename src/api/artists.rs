use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::validation::validate_search_term;
use super::venues::SearchQuery;
use super::{ApiError, ApiResponse, AppState};
use crate::domain::ArtistId;
use crate::models::{Artist, ArtistDetail, ArtistPatch, ArtistSummary, NewArtist, SearchResults};

pub async fn list_artists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ArtistSummary>>>, ApiError> {
    let artists = state.listing().list_artists().await?;
    Ok(Json(ApiResponse::success(artists)))
}

pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchResults<ArtistId>>>, ApiError> {
    let term = validate_search_term(&query.search_term)?;
    let results = state.listing().search_artists(term).await?;
    Ok(Json(ApiResponse::success(results)))
}

pub async fn get_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ArtistDetail>>, ApiError> {
    let detail = state
        .artist_service()
        .get_artist_detail(ArtistId::new(id))
        .await?;
    Ok(Json(ApiResponse::success(detail)))
}

pub async fn edit_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Artist>>, ApiError> {
    let artist = state.artist_service().get_artist(ArtistId::new(id)).await?;
    Ok(Json(ApiResponse::success(artist)))
}

pub async fn create_artist(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewArtist>,
) -> Result<(StatusCode, Json<ApiResponse<Artist>>), ApiError> {
    let artist = state.artist_service().create_artist(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(artist))))
}

pub async fn update_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(patch): Json<ArtistPatch>,
) -> Result<Json<ApiResponse<Artist>>, ApiError> {
    let artist = state
        .artist_service()
        .update_artist(ArtistId::new(id), patch)
        .await?;
    Ok(Json(ApiResponse::success(artist)))
}
