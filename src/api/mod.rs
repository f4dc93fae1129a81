use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::get,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

mod artists;
mod error;
mod observability;
mod shows;
mod system;
mod types;
mod validation;
mod venues;

pub use error::ApiError;
pub use types::*;

use crate::services::{ArtistService, ListingService, ShowService, VenueService};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn venue_service(&self) -> &Arc<dyn VenueService> {
        &self.shared.venue_service
    }

    #[must_use]
    pub fn artist_service(&self) -> &Arc<dyn ArtistService> {
        &self.shared.artist_service
    }

    #[must_use]
    pub fn show_service(&self) -> &Arc<dyn ShowService> {
        &self.shared.show_service
    }

    #[must_use]
    pub fn listing(&self) -> &Arc<ListingService> {
        &self.shared.listing
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub async fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().read().await.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/venues", get(venues::list_venues).post(venues::create_venue))
        .route("/venues/search", get(venues::search_venues))
        .route(
            "/venues/{id}",
            get(venues::get_venue)
                .patch(venues::update_venue)
                .delete(venues::delete_venue),
        )
        .route("/venues/{id}/edit", get(venues::edit_venue))
        .route(
            "/artists",
            get(artists::list_artists).post(artists::create_artist),
        )
        .route("/artists/search", get(artists::search_artists))
        .route(
            "/artists/{id}",
            get(artists::get_artist).patch(artists::update_artist),
        )
        .route("/artists/{id}/edit", get(artists::edit_artist))
        .route("/shows", get(shows::list_shows).post(shows::create_show))
        .route("/system/health", get(system::health))
        .route("/metrics", get(observability::get_metrics))
        .with_state(state);

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}
