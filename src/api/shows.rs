use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::models::{NewShow, ShowListing};

pub async fn list_shows(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ShowListing>>>, ApiError> {
    let shows = state.show_service().list_shows().await?;
    Ok(Json(ApiResponse::success(shows)))
}

pub async fn create_show(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewShow>,
) -> Result<(StatusCode, Json<ApiResponse<ShowListing>>), ApiError> {
    let show = state.show_service().create_show(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(show))))
}
