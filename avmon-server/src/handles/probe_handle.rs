use std::collections::BTreeMap;

use avmon_api::models::{ProbeResponse, ProbeResult};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use super::InventoryState;
use crate::services::{UpstreamResponse, paths};

const SAMPLE_LENGTH: usize = 300;

pub fn probe_router(state: InventoryState) -> Router {
    Router::new()
        .route("/api/test-inventory", get(test_inventory))
        .with_state(state)
}

/// Requests every candidate inventory path in turn and reports what each returned.
///
/// The vendor contract is undocumented; this exists to find where the room data lives.
#[utoipa::path(
    get,
    path = "/api/test-inventory",
    tag = "probe",
    responses(
        (status = 200, description = "Outcome per candidate inventory path", body = ProbeResponse)
    )
)]
pub async fn test_inventory(State(state): State<InventoryState>) -> Json<ProbeResponse> {
    let mut results = BTreeMap::new();

    for path in paths::inventory_candidates(&state.org_id) {
        tracing::debug!("probing {}", path);

        let result = match state.upstream.fetch_response(&path).await {
            Ok(response) => describe(&response),
            Err(e) => ProbeResult::Failed {
                error: e.to_string(),
                status_code: e.status(),
            },
        };

        results.insert(path, result);
    }

    Json(ProbeResponse {
        success: true,
        message: "Tested multiple endpoints to find room data".to_string(),
        results,
    })
}

fn describe(response: &UpstreamResponse) -> ProbeResult {
    let payload = &response.body;
    let data_keys = payload
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default();
    let has_rooms = ["essentialRooms", "rooms"]
        .iter()
        .any(|key| payload.get(*key).is_some_and(|v| !v.is_null()));
    let data_type = match payload {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };

    let mut sample: String = payload.to_string().chars().take(SAMPLE_LENGTH).collect();
    sample.push_str("...");

    ProbeResult::Success {
        status_code: response.status,
        data_keys,
        has_rooms,
        data_type: data_type.to_string(),
        sample,
    }
}
