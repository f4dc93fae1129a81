//! Prometheus rendering and per-request logging.

use axum::{
    extract::{MatchedPath, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::api::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Label used for requests that matched no route.
const UNMATCHED_ROUTE: &str = "unmatched";

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}

/// Reuses the caller's request id when it is a usable header value,
/// otherwise mints a new one.
fn request_id(req: &Request) -> HeaderValue {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .filter(|value| !value.is_empty() && value.len() <= 128)
        .cloned()
        .or_else(|| HeaderValue::from_str(&Uuid::new_v4().to_string()).ok())
        .unwrap_or_else(|| HeaderValue::from_static("unknown"))
}

/// Logs one `booking_request` line per call and records the
/// `fyyur_http_*` metrics keyed by route template.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = request_id(&req);

    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| UNMATCHED_ROUTE.to_string(), |mp| mp.as_str().to_string());

    let span = info_span!(
        "booking_request",
        request_id = request_id.to_str().unwrap_or_default(),
        method = %method,
        route = %route,
    );

    async move {
        let mut response = next.run(req).await;
        let status = response.status();

        let labels = [
            ("method", method.to_string()),
            ("route", route),
            ("status", status.as_u16().to_string()),
        ];
        metrics::counter!("fyyur_http_requests_total", &labels).increment(1);
        metrics::histogram!("fyyur_http_request_duration_seconds", &labels)
            .record(start.elapsed().as_secs_f64());

        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), elapsed_ms, "Booking request failed");
        } else {
            info!(status = status.as_u16(), elapsed_ms, "Booking request served");
        }

        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, request_id);
        response
    }
    .instrument(span)
    .await
}
