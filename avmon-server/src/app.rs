use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::Settings;
use crate::docs::docs_router;
use crate::errors::UpstreamError;
use crate::handles::*;
use crate::services::{Upstream, UpstreamClient};

pub fn create_app(settings: &Arc<Settings>) -> Result<Router, UpstreamError> {
    let upstream: Arc<dyn Upstream> = Arc::new(UpstreamClient::new(&settings.upstream)?);

    Ok(create_router(upstream, &settings.upstream.org_id))
}

/// Assembles every route around an upstream implementation.
pub fn create_router(upstream: Arc<dyn Upstream>, org_id: &str) -> Router {
    let inventory_state = InventoryState::new(upstream, org_id);
    let health_state = HealthState {
        started_at: Instant::now(),
    };

    Router::new()
        .merge(health_router(health_state))
        .merge(room_router(inventory_state.clone()))
        .merge(device_router(inventory_state.clone()))
        .merge(alert_router(inventory_state.clone()))
        .merge(location_router(inventory_state.clone()))
        .merge(probe_router(inventory_state))
        .merge(docs_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
